//! Cell paint instructions.

use serde::{Deserialize, Serialize};
use ulam_geometry::{PixelRect, SpiralIndex};

use crate::config::CellShape;

/// A resolved paint instruction for one spiral cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    /// Fill the whole cell rectangle
    Clear {
        index: SpiralIndex,
        rect: PixelRect,
        color: [u8; 3],
    },

    /// Paint the cell in the configured shape
    Draw {
        index: SpiralIndex,
        rect: PixelRect,
        shape: CellShape,
        color: [u8; 3],
    },
}

impl DrawCommand {
    /// Spiral index this command paints.
    pub fn index(&self) -> SpiralIndex {
        match self {
            DrawCommand::Clear { index, .. } => *index,
            DrawCommand::Draw { index, .. } => *index,
        }
    }

    /// Target rectangle.
    pub fn rect(&self) -> PixelRect {
        match self {
            DrawCommand::Clear { rect, .. } => *rect,
            DrawCommand::Draw { rect, .. } => *rect,
        }
    }

    /// Fill color.
    pub fn color(&self) -> [u8; 3] {
        match self {
            DrawCommand::Clear { color, .. } => *color,
            DrawCommand::Draw { color, .. } => *color,
        }
    }

    /// Whether pixel `(x, y)` is painted by this command.
    pub fn covers(&self, x: i64, y: i64) -> bool {
        let rect = self.rect();
        if !rect.contains(x, y) {
            return false;
        }
        match self {
            DrawCommand::Clear { .. } => true,
            DrawCommand::Draw { shape: CellShape::Square, .. } => true,
            DrawCommand::Draw { shape: CellShape::Circle, .. } => {
                // pixel centers inside the inscribed ellipse
                let rx = rect.width() as f64 / 2.0;
                let ry = rect.height() as f64 / 2.0;
                let dx = (x - rect.x1) as f64 + 0.5 - rx;
                let dy = (y - rect.y1) as f64 + 0.5 - ry;
                (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
            }
        }
    }
}
