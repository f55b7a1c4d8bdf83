//! Raster canvas for spiral cells.

use image::{Rgb, RgbImage};
use ulam_geometry::{GridLayout, SpiralIndex};

use crate::config::CellShape;
use crate::draw::DrawCommand;

/// Empty image area.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Settled prime cell.
pub const CELL: Rgb<u8> = Rgb([255, 0, 0]);

/// Newest revealed cell when it is prime.
pub const PRIME_HIGHLIGHT: Rgb<u8> = Rgb([0, 255, 0]);

/// Newest revealed cell when it is not prime.
pub const NON_PRIME_HIGHLIGHT: Rgb<u8> = Rgb([0, 255, 255]);

/// An image being painted cell by cell.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
    layout: GridLayout,
    shape: CellShape,
}

impl Canvas {
    /// Create a background-filled canvas for `layout`.
    pub fn new(layout: GridLayout, shape: CellShape) -> Self {
        Self {
            image: RgbImage::from_pixel(layout.width(), layout.height(), BACKGROUND),
            layout,
            shape,
        }
    }

    /// Layout used to place cells.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Current image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Owned copy of the current image.
    pub fn snapshot(&self) -> RgbImage {
        self.image.clone()
    }

    /// Consume the canvas, returning its image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Fill the whole cell of `index` with `color`.
    pub fn clear_cell(&mut self, index: SpiralIndex, color: Rgb<u8>) {
        let cmd = DrawCommand::Clear {
            index,
            rect: self.layout.rect_of(index.point()),
            color: color.0,
        };
        self.apply(&cmd);
    }

    /// Paint the cell of `index` in the canvas shape.
    pub fn draw_cell(&mut self, index: SpiralIndex, color: Rgb<u8>) {
        let cmd = DrawCommand::Draw {
            index,
            rect: self.layout.rect_of(index.point()),
            shape: self.shape,
            color: color.0,
        };
        self.apply(&cmd);
    }

    /// Paint a resolved command, clipped to the image.
    pub fn apply(&mut self, cmd: &DrawCommand) {
        let Some(clip) = cmd.rect().clip(self.image.width(), self.image.height()) else {
            return;
        };
        let color = Rgb(cmd.color());
        for y in clip.y1..=clip.y2 {
            for x in clip.x1..=clip.x2 {
                if cmd.covers(x, y) {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulam_geometry::RoundingMode;

    fn canvas(size: u32, levels: u64, shape: CellShape) -> Canvas {
        let layout = GridLayout::new(size, size, levels, RoundingMode::Discrete).unwrap();
        Canvas::new(layout, shape)
    }

    #[test]
    fn starts_with_background() {
        let c = canvas(9, 2, CellShape::Square);
        assert!(c.image().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn draw_fills_cell_rect() {
        let mut c = canvas(9, 2, CellShape::Square);
        // index 2 is one cell right of center: x in 6..9, y in 3..6
        c.draw_cell(SpiralIndex::new(2), CELL);

        for y in 0..9 {
            for x in 0..9 {
                let expected = if (6..9).contains(&x) && (3..6).contains(&y) {
                    CELL
                } else {
                    BACKGROUND
                };
                assert_eq!(*c.image().get_pixel(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn clear_restores_background() {
        let mut c = canvas(9, 2, CellShape::Circle);
        c.draw_cell(SpiralIndex::new(5), NON_PRIME_HIGHLIGHT);
        c.clear_cell(SpiralIndex::new(5), BACKGROUND);
        assert!(c.image().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn circle_leaves_corners() {
        let mut c = canvas(30, 1, CellShape::Circle);
        c.draw_cell(SpiralIndex::ORIGIN, CELL);
        assert_eq!(*c.image().get_pixel(15, 15), CELL);
        assert_eq!(*c.image().get_pixel(0, 0), BACKGROUND);
        assert_eq!(*c.image().get_pixel(29, 29), BACKGROUND);
    }

    #[test]
    fn out_of_range_cells_are_clipped() {
        let mut c = canvas(9, 2, CellShape::Square);
        // index 10 lies in ring 3, beyond the layout
        c.draw_cell(SpiralIndex::new(10), CELL);
        assert!(c.image().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn snapshot_is_independent() {
        let mut c = canvas(9, 2, CellShape::Square);
        let before = c.snapshot();
        c.draw_cell(SpiralIndex::ORIGIN, CELL);
        assert!(before.pixels().all(|p| *p == BACKGROUND));
        assert_eq!(*c.image().get_pixel(4, 4), CELL);
    }
}
