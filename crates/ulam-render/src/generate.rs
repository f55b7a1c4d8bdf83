//! Frame generation for each render mode.

use ulam_geometry::{max_index, GridLayout, PrimeTable, RoundingMode, Spiral, SpiralIndex};

use crate::animation::{Animation, FrameSink};
use crate::canvas::{Canvas, BACKGROUND, CELL, NON_PRIME_HIGHLIGHT, PRIME_HIGHLIGHT};
use crate::config::{Mode, RenderConfig};
use crate::error::Result;

/// Spiral frame counts above this are logged as a warning.
const LARGE_ANIMATION_FRAMES: u64 = 10_000;

/// Renders a validated config into frames.
///
/// The prime table is built once, for the largest index the chosen mode will
/// draw, and only read afterwards.
pub struct Renderer {
    config: RenderConfig,
    layout: GridLayout,
    table: PrimeTable,
}

impl Renderer {
    /// Validate `config`, resolve its ring count and build the sieve.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;

        let rounding = match config.mode {
            Mode::Grow => RoundingMode::Continuous,
            _ => RoundingMode::Discrete,
        };
        let requested = config.resolved_levels();
        let layout = GridLayout::new(config.width, config.height, requested, rounding)?;
        if layout.is_clamped() {
            tracing::info!(
                requested,
                effective = layout.levels(),
                "not enough pixels for requested rings, using one pixel per cell"
            );
        }

        let table = PrimeTable::build(max_index(layout.levels()));
        tracing::info!(
            limit = table.limit(),
            primes = table.count(),
            "prime table ready"
        );

        Ok(Self {
            config,
            layout,
            table,
        })
    }

    /// Ring count that will be rendered.
    pub fn levels(&self) -> u64 {
        self.layout.levels()
    }

    /// Layout of the final frame.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Sieve shared by every frame.
    pub fn table(&self) -> &PrimeTable {
        &self.table
    }

    /// Config this renderer was built from.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Generate every frame into an in-memory [`Animation`].
    ///
    /// Long animations should be streamed with [`Renderer::render_into`].
    pub fn run(&self) -> Result<Animation> {
        let mut animation = Animation::new(self.config.fps);
        self.render_into(&mut animation)?;
        Ok(animation)
    }

    /// Generate every frame for the configured mode, handing each one to
    /// `sink` as soon as it is drawn. Returns the number of frames emitted.
    pub fn render_into<S: FrameSink>(&self, sink: &mut S) -> Result<usize> {
        tracing::info!(
            mode = ?self.config.mode,
            levels = self.levels(),
            width = self.config.width,
            height = self.config.height,
            "rendering"
        );

        let frames = match self.config.mode {
            Mode::Still => self.still(sink)?,
            Mode::Spiral => self.spiral(sink)?,
            Mode::Expand => self.expand(sink)?,
            Mode::Grow => self.grow(sink)?,
        };

        tracing::info!(frames, "render complete");
        Ok(frames)
    }

    /// One frame with every prime drawn.
    pub fn still<S: FrameSink>(&self, sink: &mut S) -> Result<usize> {
        let mut canvas = Canvas::new(self.layout, self.config.shape);
        self.draw_primes(&mut canvas, max_index(self.levels()));
        sink.push_frame(canvas.into_image())?;
        Ok(1)
    }

    /// Reveal indices one at a time, highlighting the newest cell.
    ///
    /// With `primes_only`, non-primes are never shown. A frame is emitted every
    /// `frame_step` reveals, and once more for the settled final state.
    pub fn spiral<S: FrameSink>(&self, sink: &mut S) -> Result<usize> {
        let total = max_index(self.levels());
        let step = self.config.frame_step;
        let reveals = if self.config.primes_only {
            self.table.count() as u64
        } else {
            total
        };
        let expected = reveals / step + 1;
        if expected > LARGE_ANIMATION_FRAMES {
            tracing::warn!(frames = expected, "spiral animation will be very long");
        }

        let mut canvas = Canvas::new(self.layout, self.config.shape);
        let mut newest: Option<SpiralIndex> = None;
        let mut revealed = 0u64;
        let mut frames = 0usize;

        for (index, _) in Spiral::take_indices(total) {
            let prime = self.table.is_prime(index.value());
            if self.config.primes_only && !prime {
                continue;
            }

            if let Some(previous) = newest.take() {
                self.settle(&mut canvas, previous);
            }
            let highlight = if prime {
                PRIME_HIGHLIGHT
            } else {
                NON_PRIME_HIGHLIGHT
            };
            canvas.draw_cell(index, highlight);
            newest = Some(index);
            revealed += 1;

            if revealed % step == 0 {
                sink.push_frame(canvas.snapshot())?;
                frames += 1;
                if frames % 1000 == 0 {
                    tracing::debug!(frames, index = %index, "spiral progress");
                }
            }
        }

        if let Some(previous) = newest {
            self.settle(&mut canvas, previous);
        }
        sink.push_frame(canvas.into_image())?;
        Ok(frames + 1)
    }

    /// Reveal one ring per frame.
    pub fn expand<S: FrameSink>(&self, sink: &mut S) -> Result<usize> {
        let mut canvas = Canvas::new(self.layout, self.config.shape);

        for level in 1..=self.levels() {
            for (index, _) in Spiral::levels(level, level) {
                if self.table.is_prime(index.value()) {
                    canvas.draw_cell(index, CELL);
                }
            }
            sink.push_frame(canvas.snapshot())?;
            tracing::debug!(level, "ring revealed");
        }

        Ok(self.levels() as usize)
    }

    /// Re-render the whole grid at ring counts `1..=levels`.
    ///
    /// Uses continuous rounding so the grid scales smoothly between frames.
    pub fn grow<S: FrameSink>(&self, sink: &mut S) -> Result<usize> {
        for level in 1..=self.levels() {
            let layout = GridLayout::new(
                self.config.width,
                self.config.height,
                level,
                RoundingMode::Continuous,
            )?;
            let mut canvas = Canvas::new(layout, self.config.shape);
            self.draw_primes(&mut canvas, max_index(level));
            sink.push_frame(canvas.into_image())?;
            tracing::debug!(level, "grid grown");
        }

        Ok(self.levels() as usize)
    }

    fn draw_primes(&self, canvas: &mut Canvas, limit: u64) {
        for prime in self.table.primes().take_while(|&p| p <= limit) {
            canvas.draw_cell(SpiralIndex::new(prime), CELL);
        }
    }

    /// Return a highlighted cell to its resting color.
    fn settle(&self, canvas: &mut Canvas, index: SpiralIndex) {
        if self.table.is_prime(index.value()) {
            canvas.draw_cell(index, CELL);
        } else {
            canvas.clear_cell(index, BACKGROUND);
        }
    }
}
