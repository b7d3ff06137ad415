//! Error types for grid construction, access and ingestion.

/// Errors that can occur while building or accessing an [`AnsImage`](super::AnsImage).
#[derive(Debug, thiserror::Error)]
pub enum AnsImageError {
    /// Grid height is not an even value
    #[error("ANSImage: height must be even value")]
    OddHeight,

    /// Grid height or width is below the minimum of 2
    #[error("ANSImage: height or width must be >=2")]
    InvalidBounds,

    /// Pixel coordinates fall outside the grid
    #[error("ANSImage: out of bounds")]
    OutOfBounds,

    /// The image decoder or resampler failed
    #[error(transparent)]
    Decode(#[from] image::ImageError),

    /// Reading the image source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
