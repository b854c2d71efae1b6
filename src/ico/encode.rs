//! ICO container writer: file header, directory, one embedded DIB per image.

use alloc::vec::Vec;
use enough::Stop;

use super::IconFrame;
use crate::error::IconError;
use crate::pixel::PixelLayout;

pub(crate) const FILE_HEADER_SIZE: usize = 6;
pub(crate) const DIR_ENTRY_SIZE: usize = 16;
const INFO_HEADER_SIZE: usize = 40;

/// Byte length of one embedded bitmap: info header, BGRA rows, AND mask.
///
/// Callers validate dimensions at 1..=256, so the arithmetic cannot overflow.
pub(crate) fn bitmap_size(width: u32, height: u32) -> usize {
    let w = width as usize;
    let h = height as usize;
    INFO_HEADER_SIZE + w * h * 4 + mask_stride(w) * h
}

/// AND-mask rows are 1 bit per pixel, padded to a 4-byte boundary.
fn mask_stride(w: usize) -> usize {
    w.div_ceil(32) * 4
}

pub(crate) fn encode_ico(
    frames: &[IconFrame<'_>],
    total_size: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, IconError> {
    let mut out = Vec::with_capacity(total_size);

    // File header: reserved, type (1 = icon), image count
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&(frames.len() as u16).to_le_bytes());

    // Directory: offsets run from the end of the entry table
    let mut offset = FILE_HEADER_SIZE + DIR_ENTRY_SIZE * frames.len();
    for frame in frames {
        let size = bitmap_size(frame.width, frame.height);
        out.push(dimension_byte(frame.width));
        out.push(dimension_byte(frame.height));
        out.push(0); // palette colors (0 = no palette)
        out.push(0); // reserved
        out.extend_from_slice(&1u16.to_le_bytes()); // color planes
        out.extend_from_slice(&32u16.to_le_bytes()); // bits per pixel
        out.extend_from_slice(&(size as u32).to_le_bytes());
        out.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += size;
    }

    for frame in frames {
        write_bitmap(&mut out, frame, stop)?;
    }

    Ok(out)
}

/// Directory width/height fields are one byte; 256 is stored as 0.
fn dimension_byte(dim: u32) -> u8 {
    if dim == 256 { 0 } else { dim as u8 }
}

fn write_bitmap(
    out: &mut Vec<u8>,
    frame: &IconFrame<'_>,
    stop: &dyn Stop,
) -> Result<(), IconError> {
    let w = frame.width as usize;
    let h = frame.height as usize;
    let expected = w * h * frame.layout.bytes_per_pixel();
    if frame.pixels.len() < expected {
        return Err(IconError::BufferTooSmall {
            needed: expected,
            actual: frame.pixels.len(),
        });
    }

    let mask_bytes = mask_stride(w) * h;
    let image_size = w * h * 4 + mask_bytes;

    // BITMAPINFOHEADER. Height is doubled: the mask rows count toward it.
    out.extend_from_slice(&40u32.to_le_bytes()); // biSize
    out.extend_from_slice(&(frame.width as i32).to_le_bytes()); // biWidth
    out.extend_from_slice(&((frame.height * 2) as i32).to_le_bytes()); // biHeight
    out.extend_from_slice(&1u16.to_le_bytes()); // biPlanes
    out.extend_from_slice(&32u16.to_le_bytes()); // biBitCount
    out.extend_from_slice(&0u32.to_le_bytes()); // biCompression (BI_RGB)
    out.extend_from_slice(&(image_size as u32).to_le_bytes()); // biSizeImage
    out.extend_from_slice(&0i32.to_le_bytes()); // biXPelsPerMeter
    out.extend_from_slice(&0i32.to_le_bytes()); // biYPelsPerMeter
    out.extend_from_slice(&0u32.to_le_bytes()); // biClrUsed
    out.extend_from_slice(&0u32.to_le_bytes()); // biClrImportant

    // Pixel rows, bottom-up, B,G,R,A per pixel. Only Bgra8 can use the
    // direct copy fast path.
    let is_bgra_native = matches!(frame.layout, PixelLayout::Bgra8);
    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        if is_bgra_native {
            let row_start = row * w * 4;
            out.extend_from_slice(&frame.pixels[row_start..row_start + w * 4]);
        } else {
            for col in 0..w {
                let (r, g, b, a) = get_rgba(frame.pixels, row * w + col, frame.layout);
                out.push(b);
                out.push(g);
                out.push(r);
                out.push(a);
            }
        }
    }

    // AND mask: all zero, every pixel opaque
    out.extend(core::iter::repeat_n(0u8, mask_bytes));

    Ok(())
}

fn get_rgba(pixels: &[u8], idx: usize, layout: PixelLayout) -> (u8, u8, u8, u8) {
    match layout {
        PixelLayout::Rgba8 => {
            let off = idx * 4;
            (
                pixels[off],
                pixels[off + 1],
                pixels[off + 2],
                pixels[off + 3],
            )
        }
        PixelLayout::Bgra8 => {
            let off = idx * 4;
            (
                pixels[off + 2],
                pixels[off + 1],
                pixels[off],
                pixels[off + 3],
            )
        }
        PixelLayout::Rgb8 => {
            let off = idx * 3;
            (pixels[off], pixels[off + 1], pixels[off + 2], 255)
        }
        PixelLayout::Gray8 => {
            let g = pixels[idx];
            (g, g, g, 255)
        }
    }
}
