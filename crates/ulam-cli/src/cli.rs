use std::path::PathBuf;

use clap::Parser;
use ulam_render::{CellShape, Mode, RenderConfig};

#[derive(Debug, Parser)]
#[command(name = "ulam")]
#[command(author, version, about = "Render the Ulam spiral as an image or animation")]
pub struct Cli {
    /// Output file (.png, .jpg or .gif; animated modes need .gif)
    #[arg(short, long)]
    pub output: PathBuf,

    /// JSON file with render settings; flags override it
    #[arg(short, long, env = "ULAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, env = "ULAM_WIDTH")]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, env = "ULAM_HEIGHT")]
    pub height: Option<u32>,

    /// Number of rings around and including the center
    #[arg(short, long, conflicts_with = "grid")]
    pub levels: Option<u64>,

    /// Grid side in cells (converted to (N + 1) / 2 rings)
    #[arg(short, long)]
    pub grid: Option<u64>,

    /// still, spiral, expand or grow
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Spiral mode: reveal only primes
    #[arg(long)]
    pub primes_only: bool,

    /// Animation frame rate
    #[arg(long)]
    pub fps: Option<u32>,

    /// Spiral mode: reveals per frame
    #[arg(long)]
    pub frame_step: Option<u64>,

    /// square or circle
    #[arg(long)]
    pub shape: Option<CellShape>,
}

impl Cli {
    /// Overlay the flags given on the command line onto `base`.
    pub fn apply(&self, base: RenderConfig) -> RenderConfig {
        let mut config = base;
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(levels) = self.levels {
            config.levels = Some(levels);
            config.grid = None;
        }
        if let Some(grid) = self.grid {
            config.grid = Some(grid);
            config.levels = None;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.primes_only {
            config.primes_only = true;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(step) = self.frame_step {
            config.frame_step = step;
        }
        if let Some(shape) = self.shape {
            config.shape = shape;
        }
        config
    }
}
