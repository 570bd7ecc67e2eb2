//! Category styles: palettes, font candidates, and texture patterns.

/// Static style tables keyed by category.
pub mod registry;
