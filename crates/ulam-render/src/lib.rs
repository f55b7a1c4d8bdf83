//! Ulam Spiral Rendering
//!
//! Paints spiral cells onto raster images and writes them as still images or
//! looping GIFs.
//!
//! # Architecture
//!
//! - **Config**: image size, ring count and mode, loadable from JSON
//! - **Canvas**: resolves spiral indices to pixel rectangles and paints them
//! - **Renderer**: builds the prime table once and generates frames per mode
//! - **Encode**: writes a still frame or the whole animation to disk
//!
//! # Usage
//!
//! ```ignore
//! let config = RenderConfig { levels: Some(200), mode: Mode::Expand, ..Default::default() };
//! render_to_file(config, Path::new("expand.gif"))?;
//! ```

mod animation;
mod canvas;
mod config;
mod draw;
mod encode;
mod error;
mod generate;

use std::path::Path;

pub use animation::{Animation, Frame, FrameSink};
pub use canvas::{Canvas, BACKGROUND, CELL, NON_PRIME_HIGHLIGHT, PRIME_HIGHLIGHT};
pub use config::{CellShape, Mode, RenderConfig, DEFAULT_FPS, DEFAULT_SIZE};
pub use draw::DrawCommand;
pub use encode::{ensure_gif_path, write, write_gif, write_still, GifWriter};
pub use error::{Error, Result};
pub use generate::Renderer;

/// Validate `config`, render it and write the result to `path`.
///
/// Animated modes are checked against the output extension before any frame
/// is generated, and their frames are encoded as they are drawn. Returns the
/// number of frames written.
pub fn render_to_file(config: RenderConfig, path: &Path) -> Result<usize> {
    let animated = config.mode.is_animated();
    if animated {
        ensure_gif_path(path)?;
    }

    let renderer = Renderer::new(config)?;
    if animated {
        let mut gif = GifWriter::create(path, renderer.config().fps)?;
        renderer.render_into(&mut gif)?;
        let frames = gif.finish()?;
        tracing::info!(path = %path.display(), frames, "wrote animation");
        return Ok(frames);
    }

    let animation = renderer.run()?;
    write(&animation, false, path)?;
    Ok(animation.len())
}
