//! A minimal 2D drawing surface over a CPU frame buffer.
//!
//! `Context2D` mirrors the drawing discipline of an immediate-mode canvas:
//! a save/restore stack of drawing state, translate/scale transforms, a
//! clip region, solid fills, and drawing a decoded frame at the current
//! origin. Transforms are restricted to translation and axis-aligned
//! scaling, so clip regions always remain rectangles in device space.

use showreel_core::frame::{FrameBuffer, PixelFormat};
use showreel_core::geom::Rect;
use showreel_core::Color;

/// One saved drawing state: transform plus clip region (device space).
#[derive(Debug, Clone, Copy)]
struct DrawState {
    tx: f64,
    ty: f64,
    sx: f64,
    sy: f64,
    clip: Rect,
}

/// A 2D drawing context rendering into an owned RGBA frame buffer.
pub struct Context2D {
    target: FrameBuffer,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Context2D {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: FrameBuffer::new(width, height, PixelFormat::Rgba8),
            state: DrawState {
                tx: 0.0,
                ty: 0.0,
                sx: 1.0,
                sy: 1.0,
                clip: Rect::new(0.0, 0.0, width as f64, height as f64),
            },
            stack: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.target.width
    }

    pub fn height(&self) -> u32 {
        self.target.height
    }

    /// Full canvas bounds in user space.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.target.width as f64, self.target.height as f64)
    }

    /// The rendered pixels.
    pub fn frame(&self) -> &FrameBuffer {
        &self.target
    }

    pub fn into_frame(self) -> FrameBuffer {
        self.target
    }

    /// Push the current transform and clip onto the state stack.
    pub fn save(&mut self) {
        self.stack.push(self.state);
    }

    /// Pop the most recently saved state. Unbalanced restores are a
    /// silent no-op, matching canvas semantics.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    /// Translate the origin by (dx, dy) in current user units.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.state.tx += dx * self.state.sx;
        self.state.ty += dy * self.state.sy;
    }

    /// Multiply the current scale by (sx, sy).
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.state.sx *= sx;
        self.state.sy *= sy;
    }

    /// Intersect the clip region with `rect` (given in user space).
    /// Everything drawn afterwards is confined to the result.
    pub fn clip_rect(&mut self, rect: Rect) {
        let device = self.to_device(rect);
        self.state.clip = self.state.clip.intersection(&device);
    }

    /// Fill `rect` (user space) with a solid color, overwriting alpha.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let area = self
            .to_device(rect)
            .intersection(&self.state.clip)
            .intersection(&self.bounds());
        if area.is_empty() {
            return;
        }
        let rgba = color.to_rgba8();
        let (x0, x1, y0, y1) = pixel_span(&area);
        for y in y0..y1 {
            for x in x0..x1 {
                if area.contains_point(&pixel_center(x, y)) {
                    self.target.set_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Draw a frame with its top-left corner at the current origin,
    /// scaled by the current transform, nearest-neighbor sampled and
    /// alpha-blended over the target. Clipped to the clip region.
    pub fn draw_frame(&mut self, src: &FrameBuffer) {
        if src.is_empty() || self.state.sx <= 0.0 || self.state.sy <= 0.0 {
            return;
        }
        let DrawState { tx, ty, sx, sy, .. } = self.state;
        let device = Rect::new(tx, ty, src.width as f64 * sx, src.height as f64 * sy);
        let area = device
            .intersection(&self.state.clip)
            .intersection(&self.bounds());
        if area.is_empty() {
            return;
        }

        let (x0, x1, y0, y1) = pixel_span(&area);
        for y in y0..y1 {
            let src_y = (((y as f64 + 0.5 - ty) / sy) as u32).min(src.height - 1);
            for x in x0..x1 {
                if !area.contains_point(&pixel_center(x, y)) {
                    continue;
                }
                let src_x = (((x as f64 + 0.5 - tx) / sx) as u32).min(src.width - 1);
                if let Some(pixel) = src.get_pixel(src_x, src_y) {
                    self.blend_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Source-over blend of one RGBA pixel onto the target.
    fn blend_pixel(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let sa = src[3] as u32;
        if sa == 0 {
            return;
        }
        if sa == 255 {
            self.target.set_pixel(x, y, src);
            return;
        }
        let Some(dst) = self.target.get_pixel(x, y) else {
            return;
        };
        let da = dst[3] as u32;
        let inv_sa = 255 - sa;
        // 255-scaled fixed point: numerator and denominator share the
        // same weights, so channels stay within 0..=255 exactly.
        let weight = sa * 255 + da * inv_sa;
        let channel = |s: u8, d: u8| -> u8 {
            ((s as u32 * sa * 255 + d as u32 * da * inv_sa) / weight) as u8
        };
        self.target.set_pixel(
            x,
            y,
            [
                channel(src[0], dst[0]),
                channel(src[1], dst[1]),
                channel(src[2], dst[2]),
                (weight / 255) as u8,
            ],
        );
    }

    /// Map a user-space rect into device space under the current transform.
    fn to_device(&self, rect: Rect) -> Rect {
        Rect::new(
            self.state.tx + rect.min_x() * self.state.sx,
            self.state.ty + rect.min_y() * self.state.sy,
            rect.width() * self.state.sx,
            rect.height() * self.state.sy,
        )
    }
}

/// Integer pixel range covered by a device-space rect.
fn pixel_span(area: &Rect) -> (u32, u32, u32, u32) {
    let x0 = area.min_x().floor().max(0.0) as u32;
    let x1 = area.max_x().ceil().max(0.0) as u32;
    let y0 = area.min_y().floor().max(0.0) as u32;
    let y1 = area.max_y().ceil().max(0.0) as u32;
    (x0, x1, y0, y1)
}

fn pixel_center(x: u32, y: u32) -> showreel_core::Point {
    showreel_core::Point::new(x as f64 + 0.5, y as f64 + 0.5)
}
