//! Aspect-fill drawing.
//!
//! Scales a source frame uniformly so it covers a destination rect
//! entirely while preserving its aspect ratio, centering along the
//! cropped axis. Overflow is clipped; no letterbox or pillarbox bands
//! remain.

use showreel_core::frame::FrameBuffer;
use showreel_core::geom::Rect;

use crate::context::Context2D;

/// Draw `frame` into `dst`, scaled to fill it while preserving aspect
/// ratio. A zero-area source or destination is a silent no-op. All
/// transform and clip changes are scoped with save/restore so repeated
/// calls never accumulate state.
pub fn draw_aspect_fill(ctx: &mut Context2D, frame: &FrameBuffer, dst: Rect) {
    if frame.is_empty() || dst.is_empty() {
        return;
    }

    let iw = frame.width as f64;
    let ih = frame.height as f64;
    let src_aspect = frame.natural_size().aspect_ratio();
    let dst_aspect = dst.size.aspect_ratio();

    // Source relatively taller: match the destination width and center
    // vertically; otherwise match the height and center horizontally.
    // Either way one axis overflows and gets cropped by the clip.
    let (scale, offset_x, offset_y) = if src_aspect < dst_aspect {
        let scale = dst.width() / iw;
        (scale, 0.0, (dst.height() - ih * scale) / 2.0)
    } else {
        let scale = dst.height() / ih;
        (scale, (dst.width() - iw * scale) / 2.0, 0.0)
    };

    ctx.save();
    ctx.translate(dst.min_x(), dst.min_y());
    ctx.clip_rect(Rect::new(0.0, 0.0, dst.width(), dst.height()));
    ctx.translate(offset_x, offset_y);
    ctx.scale(scale, scale);
    ctx.draw_frame(frame);
    ctx.restore();
}
