//! Sequential passthrough composition.
//!
//! Plays its sources one at a time, in order, advancing circularly on
//! each clip's end-of-playback signal. The end signal is the sole driver
//! of advancement; the draw cadence has no effect on scheduling.

use crate::composition::Composition;
use crate::context::Context2D;
use crate::draw::draw_aspect_fill;
use crate::source::VideoSource;

pub struct PassthroughComposition {
    sources: Vec<Box<dyn VideoSource>>,
    /// Index of the active source, if playback has reached one.
    current: Option<usize>,
    playing: bool,
}

impl PassthroughComposition {
    pub fn new(sources: Vec<Box<dyn VideoSource>>) -> Self {
        Self {
            sources,
            current: None,
            playing: false,
        }
    }

    /// The active source index, if any. Mostly useful for observation
    /// and tests.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Pause the active source and start the next one, wrapping to the
    /// first after the last. No-op with no sources.
    fn play_next(&mut self) {
        if self.sources.is_empty() {
            return;
        }
        if let Some(i) = self.current {
            self.sources[i].pause();
        }
        let next = self.current.map(|i| (i + 1) % self.sources.len()).unwrap_or(0);
        self.sources[next].play();
        self.current = Some(next);
    }
}

impl Composition for PassthroughComposition {
    fn play(&mut self) {
        self.stop();
        self.playing = true;
        self.current = None;
        self.play_next();
    }

    fn stop(&mut self) {
        self.playing = false;
        for source in &mut self.sources {
            source.pause();
        }
    }

    fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if let Some(i) = self.current {
            self.sources[i].tick();
            if self.sources[i].take_ended() {
                self.play_next();
            }
        }
    }

    fn draw_in_context(&mut self, ctx: &mut Context2D) {
        if !self.playing {
            return;
        }
        let Some(i) = self.current else {
            return;
        };
        let bounds = ctx.bounds();
        if let Some(frame) = self.sources[i].current_frame() {
            draw_aspect_fill(ctx, frame, bounds);
        }
    }
}
