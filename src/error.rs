use alloc::string::String;
use enough::StopReason;

/// Errors from ICO/PNG encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IconError {
    #[error("unsupported image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for IconError {
    fn from(r: StopReason) -> Self {
        IconError::Cancelled(r)
    }
}
