//! The stage player.
//!
//! Owns the canvas and at most one live composition. Everything here
//! runs on the host's single stepping cadence: each `step` advances the
//! installed composition by one tick and redraws the whole canvas, so
//! no locking is needed anywhere in the pipeline.

use tracing::{debug, info};

use showreel_core::{Color, FrameBuffer, ShowreelResult};

use crate::composition::{Composition, CompositionMode};
use crate::context::Context2D;
use crate::source::VideoSource;

pub struct Player {
    ctx: Context2D,
    composition: Option<Box<dyn Composition>>,
    /// Painted on steps where no composition is installed.
    background: Color,
}

impl Player {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            ctx: Context2D::new(width, height),
            composition: None,
            background: Color::BLACK,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn canvas_width(&self) -> u32 {
        self.ctx.width()
    }

    pub fn canvas_height(&self) -> u32 {
        self.ctx.height()
    }

    pub fn has_composition(&self) -> bool {
        self.composition.is_some()
    }

    /// Install a composition for `mode` over `sources` and start it.
    /// Any previously installed composition is stopped and dropped
    /// before the replacement goes live.
    pub fn start(&mut self, mode: CompositionMode, sources: Vec<Box<dyn VideoSource>>) {
        self.shutdown();
        info!(%mode, sources = sources.len(), "starting composition");
        let mut composition = mode.create(sources);
        composition.play();
        self.composition = Some(composition);
    }

    /// Like [`start`](Self::start) but parses the mode from its
    /// configuration string first. Unknown strings leave the player
    /// untouched.
    pub fn start_mode(
        &mut self,
        mode: &str,
        sources: Vec<Box<dyn VideoSource>>,
    ) -> ShowreelResult<()> {
        let mode = mode.parse::<CompositionMode>()?;
        self.start(mode, sources);
        Ok(())
    }

    /// Stop and discard the installed composition, if any.
    pub fn stop(&mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(mut composition) = self.composition.take() {
            debug!("stopping previous composition");
            composition.stop();
        }
    }

    /// Advance one time step and redraw the canvas, returning the
    /// rendered frame. With no composition installed the canvas is
    /// simply filled with the background color.
    pub fn step(&mut self) -> &FrameBuffer {
        match &mut self.composition {
            Some(composition) => {
                composition.tick();
                composition.draw(&mut self.ctx);
            }
            None => {
                let bounds = self.ctx.bounds();
                self.ctx.fill_rect(bounds, self.background);
            }
        }
        self.ctx.frame()
    }

    /// Run `steps` consecutive steps, returning the final frame.
    /// `run(0)` performs no step and returns the canvas as-is.
    pub fn run(&mut self, steps: usize) -> &FrameBuffer {
        for _ in 0..steps {
            self.step();
        }
        self.ctx.frame()
    }
}
