//! Video sources.
//!
//! A `VideoSource` is anything that can be played, paused, ticked by the
//! host loop, and asked for its current frame. End-of-playback is a
//! latched signal owned by the source and drained by the composition
//! that owns it, so a superseded composition's sources can never reach
//! into shared state.

use std::path::Path;

use showreel_core::frame::{FrameBuffer, PixelFormat};
use showreel_core::geom::Size;
use showreel_core::{ShowreelError, ShowreelResult};

/// A playable clip of decoded frames.
pub trait VideoSource {
    /// Begin (or resume) playback. Restarts from the first frame when
    /// playback previously reached the end.
    fn play(&mut self);

    /// Pause playback, retaining position.
    fn pause(&mut self);

    fn is_playing(&self) -> bool;

    /// Natural (intrinsic) pixel dimensions once loaded.
    fn natural_size(&self) -> Size;

    /// The frame to present right now, if any.
    fn current_frame(&self) -> Option<&FrameBuffer>;

    /// Advance playback by one host-delivered time step.
    fn tick(&mut self);

    /// Drain the end-of-playback signal. Returns true exactly once per
    /// completed playback.
    fn take_ended(&mut self) -> bool;
}

/// A pre-decoded clip: an ordered sequence of frames advanced one per
/// tick while playing. Reaching the end pauses the source and latches
/// the ended signal.
pub struct FrameSequenceSource {
    frames: Vec<FrameBuffer>,
    cursor: usize,
    playing: bool,
    /// Latched end signal, drained by `take_ended`.
    ended: bool,
    /// Playback ran to completion; the next play rewinds. Distinct from
    /// `ended` so draining the signal does not forget the position.
    completed: bool,
}

impl FrameSequenceSource {
    pub fn new(frames: Vec<FrameBuffer>) -> Self {
        Self {
            frames,
            cursor: 0,
            playing: false,
            ended: false,
            completed: false,
        }
    }

    /// Load a clip from a directory of image files, ordered by file name.
    pub fn from_dir(dir: &Path) -> ShowreelResult<Self> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("png") | Some("jpg") | Some("jpeg") | Some("bmp")
                )
            })
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(ShowreelError::asset("no image frames in clip directory", dir));
        }

        let frames = paths
            .iter()
            .map(|p| load_frame(p))
            .collect::<ShowreelResult<Vec<_>>>()?;
        tracing::info!(
            "loaded clip {} ({} frames, {}x{})",
            dir.display(),
            frames.len(),
            frames[0].width,
            frames[0].height
        );
        Ok(Self::new(frames))
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl VideoSource for FrameSequenceSource {
    fn play(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        if self.completed {
            self.cursor = 0;
            self.completed = false;
        }
        self.playing = true;
        self.ended = false;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn natural_size(&self) -> Size {
        self.frames
            .first()
            .map(|f| f.natural_size())
            .unwrap_or_else(Size::zero)
    }

    fn current_frame(&self) -> Option<&FrameBuffer> {
        self.frames.get(self.cursor)
    }

    fn tick(&mut self) {
        if !self.playing || self.frames.is_empty() {
            return;
        }
        if self.cursor + 1 < self.frames.len() {
            self.cursor += 1;
        } else {
            self.playing = false;
            self.ended = true;
            self.completed = true;
        }
    }

    fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended)
    }
}

/// Decode a single image file into a frame buffer.
pub fn load_frame(path: &Path) -> ShowreelResult<FrameBuffer> {
    let img = image::open(path).map_err(|e| {
        ShowreelError::asset(
            format!("failed to load frame '{}': {}", path.display(), e),
            path,
        )
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut fb = FrameBuffer::new(width, height, PixelFormat::Rgba8);
    fb.data = rgba.into_raw();

    Ok(fb)
}
