//! The composition abstraction.
//!
//! A composition is a strategy governing how a set of video sources is
//! scheduled and rendered onto one canvas. The trait's provided `draw`
//! is a template method: it always clears the whole canvas to solid
//! black inside a scoped save/restore, then delegates per-frame
//! rendering to the concrete strategy. The trait imposes no timing of
//! its own; the host invokes `tick` and `draw` on its own cadence.

use std::str::FromStr;

use showreel_core::{Color, ShowreelError};

use crate::context::Context2D;
use crate::crossfade::CrossfadeComposition;
use crate::passthrough::PassthroughComposition;
use crate::source::VideoSource;

/// A pluggable playback strategy over a set of owned video sources.
pub trait Composition {
    /// Begin playback from the first source. Idempotent: any in-progress
    /// playback is fully stopped first.
    fn play(&mut self);

    /// Halt playback of every owned source immediately. Safe to call
    /// when already stopped.
    fn stop(&mut self);

    /// Pump one host time step: advance the active sources and react to
    /// their end-of-playback signals.
    fn tick(&mut self);

    /// Render the current frame. Receives the context with a clean
    /// background already painted; must scope any transforms it applies.
    fn draw_in_context(&mut self, ctx: &mut Context2D);

    /// Template method: clear the entire canvas to solid black within a
    /// save/restore scope, then delegate to `draw_in_context`.
    fn draw(&mut self, ctx: &mut Context2D) {
        ctx.save();
        let bounds = ctx.bounds();
        ctx.fill_rect(bounds, Color::BLACK);
        ctx.restore();
        self.draw_in_context(ctx);
    }
}

/// The fixed set of recognized composition modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionMode {
    /// Sequential playback, one source at a time, no blending.
    Passthrough,
    /// Blended dual-source transition (extension point).
    Crossfade,
}

impl FromStr for CompositionMode {
    type Err = ShowreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nop" => Ok(CompositionMode::Passthrough),
            "crossfade" => Ok(CompositionMode::Crossfade),
            other => Err(ShowreelError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositionMode::Passthrough => write!(f, "nop"),
            CompositionMode::Crossfade => write!(f, "crossfade"),
        }
    }
}

impl CompositionMode {
    /// Build the concrete composition for this mode over `sources`.
    pub fn create(self, sources: Vec<Box<dyn VideoSource>>) -> Box<dyn Composition> {
        tracing::info!("creating '{}' composition with {} sources", self, sources.len());
        match self {
            CompositionMode::Passthrough => Box::new(PassthroughComposition::new(sources)),
            CompositionMode::Crossfade => Box::new(CrossfadeComposition::new(sources)),
        }
    }
}
