//! PNG encoder (internal writer).
//!
//! Emits a fixed-layout PNG: the 8-byte signature, an IHDR chunk describing
//! an 8-bit RGBA image, a single IDAT chunk holding the filter-0 scanlines
//! in a stored-block zlib stream, and the IEND chunk. Every chunk carries a
//! CRC-32 over its type tag and data.
//!
//! Stored deflate blocks trade file size for determinism: identical inputs
//! produce byte-identical output with no compressor in the dependency tree.

mod encode;
mod zlib;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::IconError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Encode pixels as a standalone PNG (called from EncodeRequest).
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, IconError> {
    if width == 0 || height == 0 {
        return Err(IconError::InvalidDimensions { width, height });
    }
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    // Raw scanlines dominate the allocation: a filter byte plus RGBA per row.
    let raw_bytes = (width as usize)
        .checked_mul(4)
        .and_then(|r| r.checked_add(1))
        .and_then(|r| r.checked_mul(height as usize))
        .ok_or(IconError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_memory(raw_bytes)?;
    }
    stop.check()?;
    encode::encode_png(pixels, width, height, layout, stop)
}
