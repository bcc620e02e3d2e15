//! # Frame Checksum
//!
//! Additive checksum for B1248 command frames.
//!
//! The badge firmware validates each text-segment frame with a plain byte sum
//! modulo 256, computed over every frame byte after the first prefix byte.

/// Calculate the sum-mod-256 checksum over a byte slice
///
/// # Arguments
///
/// * `data` - Bytes covered by the checksum (everything after the first
///   prefix byte: the remaining prefix bytes, the offset byte and the
///   64-byte payload)
///
/// # Returns
///
/// * `u8` - Wrapping byte sum of `data`
pub fn frame_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}
