//! Crossfade composition.
//!
//! Recognized as a mode so configurations can select it, but the fade
//! scheduling is not implemented yet. Playback is accepted and state is
//! tracked; nothing beyond the cleared canvas is drawn.
//!
//! TODO: overlap the tail of the active clip with the head of the next
//! one, ramping opacity between the two over a configurable duration.

use tracing::warn;

use crate::composition::Composition;
use crate::context::Context2D;
use crate::source::VideoSource;

pub struct CrossfadeComposition {
    sources: Vec<Box<dyn VideoSource>>,
    playing: bool,
}

impl CrossfadeComposition {
    pub fn new(sources: Vec<Box<dyn VideoSource>>) -> Self {
        Self {
            sources,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Composition for CrossfadeComposition {
    fn play(&mut self) {
        warn!("crossfade playback is not implemented; canvas stays blank");
        self.playing = true;
    }

    fn stop(&mut self) {
        self.playing = false;
        for source in &mut self.sources {
            source.pause();
        }
    }

    fn tick(&mut self) {}

    fn draw_in_context(&mut self, _ctx: &mut Context2D) {}
}
