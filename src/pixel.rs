/// Pixel memory layout of an encoder input buffer.
///
/// Both encoders normalize to their container's native order on the way out
/// (R,G,B,A scanlines for PNG, B,G,R,A rows for ICO), so sources can hand
/// over whichever order they already hold.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale (expanded to opaque gray).
    Gray8,
    /// 3 channels, 8-bit RGB (alpha filled with 255).
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
    /// 4 channels, 8-bit BGRA (window-system byte order).
    Bgra8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }
}
