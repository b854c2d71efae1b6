//! PNG container writer: signature, IHDR, IDAT, IEND.

use alloc::vec::Vec;
use enough::Stop;

use super::zlib;
use crate::error::IconError;
use crate::pixel::PixelLayout;

/// Fixed 8-byte PNG signature.
const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub(crate) fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, IconError> {
    let w = width as usize;
    let h = height as usize;
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(IconError::DimensionsTooLarge { width, height })?;
    if pixels.len() < expected {
        return Err(IconError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }

    let raw = filter_scanlines(pixels, w, h, layout, stop)?;
    let idat = zlib::compress_stored(&raw);

    // signature + IHDR (25) + IDAT framing (12) + IEND (12)
    let mut out = Vec::with_capacity(8 + 25 + idat.len() + 12 + 12);
    out.extend_from_slice(&SIGNATURE);

    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = 8; // bit depth
    ihdr[9] = 6; // color type: RGBA
    ihdr[10] = 0; // compression method
    ihdr[11] = 0; // filter method
    ihdr[12] = 0; // interlace method
    write_chunk(&mut out, b"IHDR", &ihdr);

    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);

    Ok(out)
}

/// Serialize rows top-to-bottom as filter-type-0 scanlines of R,G,B,A bytes.
fn filter_scanlines(
    pixels: &[u8],
    w: usize,
    h: usize,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, IconError> {
    let mut raw = Vec::with_capacity((w * 4 + 1) * h);
    match layout {
        PixelLayout::Rgba8 => {
            // Already in scanline byte order, copy whole rows
            for (row_idx, row) in pixels[..w * h * 4].chunks_exact(w * 4).enumerate() {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                raw.push(0); // filter: None
                raw.extend_from_slice(row);
            }
        }
        PixelLayout::Bgra8 => {
            for (row_idx, row) in pixels[..w * h * 4].chunks_exact(w * 4).enumerate() {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                raw.push(0);
                for pixel in row.chunks_exact(4) {
                    raw.extend_from_slice(&[pixel[2], pixel[1], pixel[0], pixel[3]]);
                }
            }
        }
        PixelLayout::Rgb8 => {
            for (row_idx, row) in pixels[..w * h * 3].chunks_exact(w * 3).enumerate() {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                raw.push(0);
                for pixel in row.chunks_exact(3) {
                    raw.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]);
                }
            }
        }
        PixelLayout::Gray8 => {
            for (row_idx, row) in pixels[..w * h].chunks_exact(w).enumerate() {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                raw.push(0);
                for &g in row {
                    raw.extend_from_slice(&[g, g, g, 255]);
                }
            }
        }
    }
    Ok(raw)
}

/// Write one chunk: data length (BE), type tag, data, CRC-32 over type + data.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    let mut crc = crc32_update(0xFFFF_FFFF, chunk_type);
    crc = crc32_update(crc, data);
    out.extend_from_slice(&(!crc).to_be_bytes());
}

/// CRC-32 (polynomial 0xEDB88320), fed without init/final inversion so the
/// type tag and data can be hashed in sequence.
fn crc32_update(mut crc: u32, data: &[u8]) -> u32 {
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
        }
    }
    crc
}
