//! Error types for ulam-render.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, rendering or writing a spiral.
#[derive(Debug, Error)]
pub enum Error {
    /// Image width or height is zero, or the pixel buffer is not addressable
    #[error("invalid dimensions: {width}x{height} is not a drawable image size")]
    InvalidDimensions { width: u32, height: u32 },

    /// Ring count resolved to zero or needs a sieve too large to address
    #[error("invalid ring count: {0}")]
    InvalidLevels(String),

    /// Frame rate of zero
    #[error("invalid frame rate: {0} fps")]
    InvalidFrameRate(u32),

    /// Spiral mode reveals per frame of zero
    #[error("frame step must be at least 1")]
    InvalidFrameStep,

    /// Unrecognized mode or cell shape name
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Animated output requested for a non-GIF file
    #[error("animated output must be written to a .gif file, got {}", path.display())]
    AnimationFormat { path: PathBuf },

    /// Nothing was rendered, so there is nothing to write
    #[error("no frames to write")]
    EmptyAnimation,

    /// Geometry layout error
    #[error("layout error: {0}")]
    Geometry(#[from] ulam_geometry::GeometryError),

    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Config parsing error
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
