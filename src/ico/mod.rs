//! Windows ICO container encoder (internal writer).
//!
//! An ICO file bundles one or more bitmaps behind a 6-byte file header and a
//! 16-byte directory entry per image. Each embedded bitmap is a
//! BITMAPINFOHEADER with doubled height, bottom-up BGRA pixel rows, and a
//! 1-bit AND mask. This encoder always writes 32-bit entries with an
//! all-zero mask, i.e. fully opaque placeholder icons.

mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::IconError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Largest dimension an ICO directory entry can describe (stored as 0).
pub const MAX_DIMENSION: u32 = 256;

/// One image of a multi-resolution icon.
///
/// `pixels` holds `width * height * layout.bytes_per_pixel()` bytes in
/// top-to-bottom row order; the encoder handles the bottom-up flip.
#[derive(Clone, Copy, Debug)]
pub struct IconFrame<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl<'a> IconFrame<'a> {
    /// Bundle a pixel buffer with its dimensions and layout.
    pub fn new(pixels: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels,
            width,
            height,
            layout,
        }
    }
}

/// Encode frames as a `.ico` file (called from EncodeRequest).
pub(crate) fn encode(
    frames: &[IconFrame<'_>],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, IconError> {
    if frames.is_empty() {
        return Err(IconError::UnsupportedVariant(
            "cannot encode an icon with no images".into(),
        ));
    }
    if frames.len() > usize::from(u16::MAX) {
        return Err(IconError::UnsupportedVariant(alloc::format!(
            "icon holds at most {} images, got {}",
            u16::MAX,
            frames.len()
        )));
    }

    let mut total = encode::FILE_HEADER_SIZE + encode::DIR_ENTRY_SIZE * frames.len();
    for frame in frames {
        if frame.width == 0
            || frame.height == 0
            || frame.width > MAX_DIMENSION
            || frame.height > MAX_DIMENSION
        {
            return Err(IconError::InvalidDimensions {
                width: frame.width,
                height: frame.height,
            });
        }
        if let Some(limits) = limits {
            limits.check(frame.width, frame.height)?;
        }
        total = total
            .checked_add(encode::bitmap_size(frame.width, frame.height))
            .ok_or(IconError::DimensionsTooLarge {
                width: frame.width,
                height: frame.height,
            })?;
    }
    if let Some(limits) = limits {
        limits.check_memory(total)?;
    }
    stop.check()?;
    encode::encode_ico(frames, total, stop)
}
