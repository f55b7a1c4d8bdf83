//! Frame sequences and their timing.
//!
//! Renderers hand each frame to a [`FrameSink`] as soon as it is drawn. An
//! [`Animation`] is the in-memory sink; the GIF writer in `encode` streams
//! frames to disk instead.

use image::RgbImage;

use crate::error::Result;

/// Receives frames in order as they are rendered.
pub trait FrameSink {
    /// Accept the next frame.
    fn push_frame(&mut self, image: RgbImage) -> Result<()>;
}

/// One rendered image in a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position in the sequence, starting at 0
    pub index: usize,
    /// Owned pixels; never aliased by later frames
    pub image: RgbImage,
}

/// An ordered set of frames played at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<Frame>,
    fps: u32,
}

impl Animation {
    /// Create an empty animation at `fps` frames per second.
    pub fn new(fps: u32) -> Self {
        Self {
            frames: Vec::new(),
            fps: fps.max(1),
        }
    }

    /// Append an image as the next frame.
    pub fn push(&mut self, image: RgbImage) {
        let index = self.frames.len();
        self.frames.push(Frame { index, image });
    }

    /// All frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Consume the animation, returning its frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been pushed.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Last frame (the final state of the render).
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Frames per second.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Display time of one frame in milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps
    }

    /// Total running time in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.frames.len() as u64 * 1000 / self.fps as u64
    }
}

impl FrameSink for Animation {
    fn push_frame(&mut self, image: RgbImage) -> Result<()> {
        self.push(image);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(size: u32) -> RgbImage {
        RgbImage::new(size, size)
    }

    #[test]
    fn starts_empty() {
        let animation = Animation::new(10);
        assert!(animation.is_empty());
        assert_eq!(animation.len(), 0);
        assert!(animation.last().is_none());
    }

    #[test]
    fn push_assigns_sequential_indices() {
        let mut animation = Animation::new(10);
        for _ in 0..5 {
            animation.push(blank(2));
        }
        let indices: Vec<_> = animation.frames().iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(animation.last().map(|f| f.index), Some(4));
    }

    #[test]
    fn timing() {
        let mut animation = Animation::new(25);
        assert_eq!(animation.frame_delay_ms(), 40);
        for _ in 0..50 {
            animation.push(blank(1));
        }
        assert_eq!(animation.duration_ms(), 2000);
    }

    #[test]
    fn sink_appends_frames() {
        let mut animation = Animation::new(10);
        animation.push_frame(blank(3)).unwrap();
        animation.push_frame(blank(3)).unwrap();
        assert_eq!(animation.len(), 2);
        assert_eq!(animation.last().map(|f| f.index), Some(1));
    }

    #[test]
    fn zero_fps_is_raised_to_one() {
        let animation = Animation::new(0);
        assert_eq!(animation.fps(), 1);
        assert_eq!(animation.frame_delay_ms(), 1000);
    }
}
