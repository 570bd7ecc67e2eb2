//! Font resolution, measurement, and shaping.
//!
//! Outline fonts go through `parley`; when none can be loaded the built-in bitmap
//! face keeps every role drawable.

/// Built-in 8x8 bitmap face.
pub mod builtin;
/// `parley`-backed measurement and shaping.
pub mod engine;
/// Ordered fallback resolution of fonts per role and category.
pub mod loader;
