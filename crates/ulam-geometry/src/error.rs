//! Error types for ulam-geometry.

use thiserror::Error;

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised while laying out a spiral on a pixel grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The target image has no pixels to tile.
    #[error("image must be at least 1x1 pixels, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// A spiral needs at least the center ring.
    #[error("ring count must be at least 1")]
    ZeroLevels,
}
