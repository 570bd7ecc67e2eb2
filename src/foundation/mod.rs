//! Shared primitives: colors, geometry, errors, and deterministic math.

/// Colors, canvas size, and integer pixel rectangles.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
pub(crate) mod math;
