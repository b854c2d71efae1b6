//! # zenicons
//!
//! Placeholder icon asset encoder: Windows ICO containers and standalone
//! PNG files, written byte-by-byte with no image stack behind them.
//!
//! The crate exists to stamp out the small icon sets desktop bundlers expect
//! (`icon.ico`, `32x32.png`, ...) from raw pixel buffers. Both encoders are
//! pure, single-pass transforms: identical inputs produce byte-identical
//! files, so generated assets stay stable across runs.
//!
//! ## Supported containers
//!
//! - **ICO** — 6-byte file header, one 16-byte directory entry per image,
//!   and one embedded 32-bit BITMAPINFOHEADER bitmap per entry (bottom-up
//!   BGRA rows followed by an all-zero AND mask).
//! - **PNG** — signature, IHDR (8-bit RGBA), a single IDAT holding filter-0
//!   scanlines in a stored-block zlib stream, IEND; CRC-32 per chunk.
//!
//! ## Non-Goals
//!
//! - Decoding — use a real image stack to read icons back.
//! - Compression ratio — stored deflate blocks keep output deterministic and
//!   the dependency tree empty; placeholder icons are small either way.
//! - Transparency masks — the ICO AND mask is always all-zero (opaque).
//!
//! ## Usage
//!
//! ```no_run
//! use zenicons::{EncodeRequest, IconFrame, PixelLayout, Unstoppable};
//!
//! let pixels = vec![0u8; 32 * 32 * 4]; // RGBA
//!
//! // Standalone PNG
//! let png = EncodeRequest::png()
//!     .encode(&pixels, 32, 32, PixelLayout::Rgba8, Unstoppable)?;
//!
//! // One-entry Windows icon
//! let frame = IconFrame::new(&pixels, 32, 32, PixelLayout::Rgba8);
//! let ico = EncodeRequest::ico().encode_frames(&[frame], Unstoppable)?;
//! # Ok::<(), zenicons::IconError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod encode;
mod error;
mod limits;
mod pixel;

pub mod ico;
mod png;

// Re-exports
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::IconError;
pub use ico::IconFrame;
pub use limits::Limits;
pub use pixel::PixelLayout;
