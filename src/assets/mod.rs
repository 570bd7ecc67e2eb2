//! Photo decoding and PNG output.

/// Raster decode, resample, encode, and atomic writes.
pub mod decode;
