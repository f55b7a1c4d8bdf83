//! Lattice-to-pixel rasterization.
//!
//! A [`GridLayout`] fixes the image size, ring count and rounding mode, then
//! maps lattice points to the pixel rectangle of their cell.
//!
//! In [`RoundingMode::Discrete`] every cell is exactly `unit x unit` pixels with
//! `unit = min(w, h) div side`, so adjacent cells never overlap or leave gaps
//! and the whole block sits at most one pixel off true center.
//!
//! In both modes, when the ring count asks for more cells than there are
//! pixels the layout clamps to one pixel per cell and lowers the ring count
//! until the block fits (see [`fit_levels`]).
//!
//! [`RoundingMode::Continuous`] keeps the real-valued cell size. Cell edges are
//! floored independently, so cell sizes may differ by a pixel, but the block
//! scales smoothly as the ring count changes between animation frames.

use crate::error::{GeometryError, Result};
use crate::spiral::{checked_side_length, side_length};
use crate::LatticePoint;

/// How cell edges are rounded to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Integer cell size, gapless tiling
    #[default]
    Discrete,
    /// Real-valued cell size, smooth between ring counts
    Continuous,
}

/// Inclusive pixel rectangle `[x1, x2] x [y1, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl PixelRect {
    /// Create a rectangle from inclusive corners.
    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in pixels.
    pub fn width(&self) -> i64 {
        self.x2 - self.x1 + 1
    }

    /// Height in pixels.
    pub fn height(&self) -> i64 {
        self.y2 - self.y1 + 1
    }

    /// Number of pixels covered.
    pub fn area(&self) -> i64 {
        self.width().max(0) * self.height().max(0)
    }

    /// Whether pixel `(x, y)` lies inside.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Whether two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }

    /// Intersect with `[0, width) x [0, height)`.
    pub fn clip(&self, width: u32, height: u32) -> Option<Self> {
        let clipped = Self {
            x1: self.x1.max(0),
            y1: self.y1.max(0),
            x2: self.x2.min(width as i64 - 1),
            y2: self.y2.min(height as i64 - 1),
        };
        (clipped.x1 <= clipped.x2 && clipped.y1 <= clipped.y2).then_some(clipped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scale {
    Discrete { unit: i64, left: i64, top: i64 },
    Continuous { extent: f64, dim: f64, left: f64, top: f64 },
}

/// Cell placement for one image size, ring count and rounding mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    width: u32,
    height: u32,
    levels: u64,
    requested_levels: u64,
    mode: RoundingMode,
    scale: Scale,
}

impl GridLayout {
    /// Lay out `levels` rings on a `width x height` image.
    pub fn new(width: u32, height: u32, levels: u64, mode: RoundingMode) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyImage { width, height });
        }
        if levels == 0 {
            return Err(GeometryError::ZeroLevels);
        }

        let a = width.min(height) as i64;
        let (w, h) = (width as i64, height as i64);
        let requested_levels = levels;
        let levels = fit_levels(width, height, levels);
        if levels != requested_levels {
            tracing::debug!(
                requested = requested_levels,
                effective = levels,
                pixels = a,
                "ring count exceeds pixel budget, clamping to one pixel per cell"
            );
        }

        let dim = side_length(levels);
        let scale = match mode {
            RoundingMode::Discrete => {
                let dim = dim as i64;
                let (unit, cut) = (a / dim, a % dim);
                let left = (w - a + cut) / 2;
                let top = (h - a + cut) / 2;
                Scale::Discrete { unit, left, top }
            }
            RoundingMode::Continuous => {
                let extent = a as f64;
                let left = (w as f64 - extent) / 2.0;
                let top = (h as f64 - extent) / 2.0;
                Scale::Continuous {
                    extent,
                    dim: dim as f64,
                    left,
                    top,
                }
            }
        };

        Ok(Self {
            width,
            height,
            levels,
            requested_levels,
            mode,
            scale,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ring count actually laid out (after any clamping).
    pub fn levels(&self) -> u64 {
        self.levels
    }

    /// Whether the requested ring count was lowered to fit the image.
    pub fn is_clamped(&self) -> bool {
        self.levels != self.requested_levels
    }

    /// Rounding mode of this layout.
    pub fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Side of one cell in pixels.
    pub fn cell_size(&self) -> f64 {
        match self.scale {
            Scale::Discrete { unit, .. } => unit as f64,
            Scale::Continuous { extent, dim, .. } => extent / dim,
        }
    }

    /// Pixel rectangle of the cell at `point`.
    ///
    /// Points outside the laid-out rings still map to a rectangle, possibly
    /// beyond the image; callers decide which cells to paint.
    pub fn rect_of(&self, point: LatticePoint) -> PixelRect {
        let levels = self.levels as i64;
        let col = point.x + levels - 1;
        let row = levels - 1 - point.y;

        match self.scale {
            Scale::Discrete { unit, left, top } => {
                let x1 = unit * col + left;
                let y1 = unit * row + top;
                PixelRect::new(x1, y1, x1 + unit - 1, y1 + unit - 1)
            }
            Scale::Continuous {
                extent,
                dim,
                left,
                top,
            } => {
                // edge c at extent * c / dim; the last edge is exactly extent
                let edge = |c: i64, offset: f64| (extent * c as f64 / dim + offset).floor() as i64;
                let x1 = edge(col, left);
                let y1 = edge(row, top);
                let x2 = (edge(col + 1, left) - 1).max(x1);
                let y2 = (edge(row + 1, top) - 1).max(y1);
                PixelRect::new(x1, y1, x2, y2)
            }
        }
    }

    /// Bounding rectangle of every cell in the laid-out rings.
    pub fn block(&self) -> PixelRect {
        let r = self.levels as i64 - 1;
        let top_left = self.rect_of(LatticePoint::new(-r, r));
        let bottom_right = self.rect_of(LatticePoint::new(r, -r));
        PixelRect::new(top_left.x1, top_left.y1, bottom_right.x2, bottom_right.y2)
    }
}

/// Largest ring count up to `levels` whose square fits in a `width x height`
/// image at one pixel per cell or more.
///
/// Ring counts whose side length overflows are treated as too large.
pub fn fit_levels(width: u32, height: u32, levels: u64) -> u64 {
    let a = width.min(height) as u64;
    match checked_side_length(levels) {
        Some(dim) if dim <= a => levels,
        _ => (a + 1) / 2,
    }
}

/// One-shot form of [`GridLayout::rect_of`].
pub fn rect_of(
    point: LatticePoint,
    width: u32,
    height: u32,
    levels: u64,
    mode: RoundingMode,
) -> Result<PixelRect> {
    Ok(GridLayout::new(width, height, levels, mode)?.rect_of(point))
}
