//! Writing frames to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, ImageFormat, RgbImage};

use crate::animation::{Animation, Frame, FrameSink};
use crate::error::{Error, Result};

/// GIF quantizer speed (1 = best quality, 30 = fastest).
const GIF_SPEED: i32 = 10;

/// Fail unless `path` names a `.gif` file.
pub fn ensure_gif_path(path: &Path) -> Result<()> {
    if ImageFormat::from_path(path).ok() == Some(ImageFormat::Gif) {
        Ok(())
    } else {
        Err(Error::AnimationFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Looping GIF encoder that writes each frame as it arrives.
///
/// Only the frame being encoded is held in memory.
pub struct GifWriter<W: Write> {
    encoder: GifEncoder<W>,
    delay: Delay,
    frames: usize,
}

impl GifWriter<BufWriter<File>> {
    /// Create `path` and start a GIF at `fps` frames per second.
    pub fn create(path: &Path, fps: u32) -> Result<Self> {
        ensure_gif_path(path)?;
        Self::new(BufWriter::new(File::create(path)?), fps)
    }
}

impl<W: Write> GifWriter<W> {
    /// Start a GIF on `writer` at `fps` frames per second.
    pub fn new(writer: W, fps: u32) -> Result<Self> {
        let mut encoder = GifEncoder::new_with_speed(writer, GIF_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(Self {
            encoder,
            delay: Delay::from_numer_denom_ms(1000, fps.max(1)),
            frames: 0,
        })
    }

    /// Frames encoded so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Write the trailer and return the number of frames encoded.
    pub fn finish(self) -> Result<usize> {
        if self.frames == 0 {
            return Err(Error::EmptyAnimation);
        }
        let frames = self.frames;
        // the encoder writes the GIF trailer when dropped
        drop(self.encoder);
        Ok(frames)
    }
}

impl<W: Write> FrameSink for GifWriter<W> {
    fn push_frame(&mut self, image: RgbImage) -> Result<()> {
        let rgba = DynamicImage::ImageRgb8(image).into_rgba8();
        self.encoder
            .encode_frame(image::Frame::from_parts(rgba, 0, 0, self.delay))?;
        self.frames += 1;
        if self.frames % 100 == 0 {
            tracing::debug!(frames = self.frames, "encoded frames");
        }
        Ok(())
    }
}

/// Write one frame as a still image; the format follows the file extension.
pub fn write_still(frame: &Frame, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)?;
    frame.image.save_with_format(path, format)?;
    tracing::info!(path = %path.display(), ?format, "wrote still image");
    Ok(())
}

/// Write every frame of an in-memory animation as a looping GIF.
pub fn write_gif(animation: &Animation, path: &Path) -> Result<()> {
    if animation.is_empty() {
        return Err(Error::EmptyAnimation);
    }
    let mut writer = GifWriter::create(path, animation.fps())?;
    for frame in animation.frames() {
        writer.push_frame(frame.image.clone())?;
    }
    let frames = writer.finish()?;

    tracing::info!(
        path = %path.display(),
        frames,
        fps = animation.fps(),
        "wrote animation"
    );
    Ok(())
}

/// Write a render result to `path`.
///
/// Animated renders must target a `.gif`; still renders write their final
/// frame in whatever format the extension names.
pub fn write(animation: &Animation, animated: bool, path: &Path) -> Result<()> {
    if animated {
        return write_gif(animation, path);
    }

    let frame = animation.last().ok_or(Error::EmptyAnimation)?;
    write_still(frame, path)
}
