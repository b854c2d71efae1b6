use alloc::vec::Vec;
use enough::Stop;

use crate::error::IconError;
use crate::ico::{self, IconFrame};
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::png;

/// Which container an [`EncodeRequest`] produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Container {
    Ico,
    Png,
}

/// Builder for an encode operation.
///
/// ```no_run
/// use zenicons::{EncodeRequest, PixelLayout, Unstoppable};
///
/// let pixels = [37u8, 99, 235, 255]; // one RGBA pixel
/// let png = EncodeRequest::png()
///     .encode(&pixels, 1, 1, PixelLayout::Rgba8, Unstoppable)?;
/// # Ok::<(), zenicons::IconError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EncodeRequest {
    container: Container,
    limits: Option<Limits>,
}

impl EncodeRequest {
    /// Encode to a standalone PNG file.
    pub fn png() -> Self {
        Self {
            container: Container::Png,
            limits: None,
        }
    }

    /// Encode to a Windows ICO container.
    pub fn ico() -> Self {
        Self {
            container: Container::Ico,
            limits: None,
        }
    }

    /// Apply resource limits to this encode.
    pub fn with_limits(mut self, limits: &Limits) -> Self {
        self.limits = Some(limits.clone());
        self
    }

    /// Encode a single image.
    ///
    /// For ICO this produces a one-entry icon; see [`encode_frames`] for
    /// multi-resolution icons.
    ///
    /// [`encode_frames`]: Self::encode_frames
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        stop: impl Stop,
    ) -> Result<Vec<u8>, IconError> {
        match self.container {
            Container::Png => {
                png::encode(pixels, width, height, layout, self.limits.as_ref(), &stop)
            }
            Container::Ico => ico::encode(
                &[IconFrame::new(pixels, width, height, layout)],
                self.limits.as_ref(),
                &stop,
            ),
        }
    }

    /// Encode a multi-image icon, one directory entry per frame.
    ///
    /// PNG holds a single image; anything but exactly one frame is rejected.
    pub fn encode_frames(
        &self,
        frames: &[IconFrame<'_>],
        stop: impl Stop,
    ) -> Result<Vec<u8>, IconError> {
        match self.container {
            Container::Ico => ico::encode(frames, self.limits.as_ref(), &stop),
            Container::Png => match frames {
                [frame] => png::encode(
                    frame.pixels,
                    frame.width,
                    frame.height,
                    frame.layout,
                    self.limits.as_ref(),
                    &stop,
                ),
                _ => Err(IconError::UnsupportedVariant(alloc::format!(
                    "PNG holds a single image, got {} frames",
                    frames.len()
                ))),
            },
        }
    }
}

#[cfg(feature = "rgb")]
impl EncodeRequest {
    /// Encode from typed RGBA pixels.
    pub fn encode_rgba(
        &self,
        pixels: &[rgb::RGBA8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, IconError> {
        use rgb::ComponentBytes as _;
        self.encode(pixels.as_bytes(), width, height, PixelLayout::Rgba8, stop)
    }
}

#[cfg(feature = "imgref")]
impl EncodeRequest {
    /// Encode from an [`imgref::ImgRef`] of typed RGBA pixels.
    ///
    /// Copies row-by-row when the buffer stride exceeds its width.
    pub fn encode_imgref(
        &self,
        img: imgref::ImgRef<'_, rgb::RGBA8>,
        stop: impl Stop,
    ) -> Result<Vec<u8>, IconError> {
        use rgb::ComponentBytes as _;

        let (width, height) = (img.width(), img.height());
        if img.stride() == width {
            let pixels = &img.buf()[..width * height];
            return self.encode_rgba(pixels, width as u32, height as u32, stop);
        }
        let mut contiguous = Vec::with_capacity(width * height);
        for row in img.rows() {
            contiguous.extend_from_slice(row);
        }
        self.encode(
            contiguous.as_bytes(),
            width as u32,
            height as u32,
            PixelLayout::Rgba8,
            stop,
        )
    }
}
