//! Card rasterization.
//!
//! Regions are laid out once from fixed constants, drawn in order onto a single
//! `vello_cpu` scene, then flattened to opaque RGB.

/// Card orchestration and render report.
pub mod card;
/// Premultiplied RGBA8 compositing helpers.
pub mod composite;
/// Word wrapping and box fitting.
pub mod fit;
/// Two-color linear gradients.
pub mod gradient;
/// Fixed region geometry.
pub mod layout;
/// Vector drawing surface.
pub mod paint;
/// Seeded texture overlays.
pub mod texture;
