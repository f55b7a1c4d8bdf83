//! Render configuration.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulam_geometry::{checked_max_index, fit_levels};

use crate::error::{Error, Result};

/// Default image side, in pixels.
pub const DEFAULT_SIZE: u32 = 1800;

/// Default animation frame rate.
pub const DEFAULT_FPS: u32 = 10;

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// A single image of every prime
    #[default]
    Still,
    /// Reveal indices one at a time
    Spiral,
    /// Reveal one ring at a time
    Expand,
    /// Re-render the whole grid at increasing ring counts
    Grow,
}

impl Mode {
    /// Whether this mode produces more than one frame.
    pub fn is_animated(&self) -> bool {
        !matches!(self, Mode::Still)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "still" => Ok(Mode::Still),
            "spiral" => Ok(Mode::Spiral),
            "expand" => Ok(Mode::Expand),
            "grow" => Ok(Mode::Grow),
            _ => Err(Error::UnknownVariant {
                kind: "mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Shape painted inside each cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellShape {
    /// Fill the whole rectangle
    #[default]
    Square,
    /// Fill the inscribed ellipse
    Circle,
}

impl FromStr for CellShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(CellShape::Square),
            "circle" => Ok(CellShape::Circle),
            _ => Err(Error::UnknownVariant {
                kind: "shape",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for a render run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Ring count; takes precedence over `grid`
    pub levels: Option<u64>,
    /// Grid side in cells, converted to `(grid + 1) / 2` rings
    pub grid: Option<u64>,
    /// Generation mode
    pub mode: Mode,
    /// Spiral mode: skip non-primes entirely
    pub primes_only: bool,
    /// Animation frame rate
    pub fps: u32,
    /// Spiral mode: reveals per emitted frame
    pub frame_step: u64,
    /// Cell shape
    pub shape: CellShape,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            levels: None,
            grid: None,
            mode: Mode::Still,
            primes_only: false,
            fps: DEFAULT_FPS,
            frame_step: 1,
            shape: CellShape::Square,
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Ring count to render before any pixel-budget clamping.
    ///
    /// Explicit `levels` wins, then `grid`, then one pixel per cell.
    pub fn resolved_levels(&self) -> u64 {
        self.levels
            .or(self.grid.map(|g| g.div_ceil(2)))
            .unwrap_or_else(|| (self.width.min(self.height) as u64 + 1) / 2)
    }

    /// Ring count after fitting the resolved count to the image.
    pub fn effective_levels(&self) -> u64 {
        fit_levels(self.width, self.height, self.resolved_levels())
    }

    /// Check the config before any expensive work is done.
    pub fn validate(&self) -> Result<()> {
        let pixels = (self.width as u64)
            .checked_mul(self.height as u64)
            .and_then(|p| p.checked_mul(3))
            .and_then(|bytes| usize::try_from(bytes).ok());
        if self.width == 0 || self.height == 0 || pixels.is_none() {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.resolved_levels() == 0 {
            return Err(Error::InvalidLevels(match (self.levels, self.grid) {
                (Some(_), _) => "levels must be at least 1".to_string(),
                (None, Some(g)) => format!("grid of {} cells has no rings", g),
                (None, None) => "image too small".to_string(),
            }));
        }
        let levels = self.effective_levels();
        let sieve_len = checked_max_index(levels)
            .and_then(|limit| usize::try_from(limit).ok())
            .and_then(|limit| limit.checked_add(1));
        if sieve_len.is_none() {
            return Err(Error::InvalidLevels(format!(
                "{} rings need a prime table larger than addressable memory",
                levels
            )));
        }
        if self.fps == 0 {
            return Err(Error::InvalidFrameRate(self.fps));
        }
        if self.frame_step == 0 {
            return Err(Error::InvalidFrameStep);
        }
        Ok(())
    }
}
