//! # showreel-render
//!
//! The Showreel playback engine. Provides a CPU 2D drawing surface with
//! canvas-style save/restore discipline, the aspect-fill drawing routine,
//! the pluggable composition strategies (sequential passthrough, with a
//! crossfade extension point), and the single-threaded player loop that
//! drives them.

pub mod composition;
pub mod context;
pub mod crossfade;
pub mod draw;
pub mod passthrough;
pub mod player;
pub mod source;

pub use composition::{Composition, CompositionMode};
pub use context::Context2D;
pub use crossfade::CrossfadeComposition;
pub use draw::draw_aspect_fill;
pub use passthrough::PassthroughComposition;
pub use player::Player;
pub use source::{FrameSequenceSource, VideoSource};
