//! Byte-unit conversions for sizing arenas.
//!
//! Units are binary: one megabyte is `1024 * 1024` bytes.

const MEGABYTE: usize = 1024 * 1024;
const GIGABYTE: usize = 1024 * MEGABYTE;

/// Bytes expressed in megabytes.
#[allow(clippy::cast_precision_loss, reason = "sizes are reported, not computed on")]
pub fn bytes_to_megabytes(bytes: usize) -> f64 {
    bytes as f64 / MEGABYTE as f64
}

/// Bytes expressed in gigabytes.
#[allow(clippy::cast_precision_loss, reason = "sizes are reported, not computed on")]
pub fn bytes_to_gigabytes(bytes: usize) -> f64 {
    bytes as f64 / GIGABYTE as f64
}

/// Megabytes expressed in bytes, saturating at `usize::MAX`.
pub fn megabytes_to_bytes(megabytes: usize) -> usize {
    megabytes.saturating_mul(MEGABYTE)
}

/// Gigabytes expressed in bytes, saturating at `usize::MAX`.
pub fn gigabytes_to_bytes(gigabytes: usize) -> usize {
    gigabytes.saturating_mul(GIGABYTE)
}
