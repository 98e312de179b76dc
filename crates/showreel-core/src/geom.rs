use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A fresh zero-valued point. Value semantics: every call returns a
    /// new instance, never a shared one.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::zero()
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Compute the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            return 0.0;
        }
        self.width / self.height
    }

    /// A size with a non-positive extent on either axis is degenerate:
    /// it covers no pixels and drawing into it is a no-op.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

/// An axis-aligned rectangle described by an origin (top-left) and a size.
///
/// Negative sizes are not validated; they are treated as an accepted
/// degenerate case (`is_empty`) and every consumer skips empty rects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn zero() -> Self {
        Self {
            origin: Point::zero(),
            size: Size::zero(),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// A new rect with this rect's size, positioned so its center
    /// coincides with `outer`'s center. No clamping happens when this
    /// rect is larger than `outer`.
    pub fn centered_in(&self, outer: &Rect) -> Rect {
        Rect::new(
            outer.min_x() + (outer.width() - self.width()) / 2.0,
            outer.min_y() + (outer.height() - self.height()) / 2.0,
            self.width(),
            self.height(),
        )
    }

    /// All four fields rounded to the nearest integer, origin and size
    /// independently. Avoids sub-pixel blurring when drawing.
    pub fn aligned_to_grid(&self) -> Rect {
        Rect::new(
            self.origin.x.round(),
            self.origin.y.round(),
            self.size.width.round(),
            self.size.height.round(),
        )
    }

    /// A new rect shrunk symmetrically by `dx` on the X axis and `dy` on
    /// the Y axis (width shrinks by `2*dx`, height by `2*dy`).
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width - 2.0 * dx,
            self.size.height - 2.0 * dy,
        )
    }

    /// Inclusive boundary test on both axes.
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// The overlapping region of two rects. Non-overlapping inputs
    /// produce a degenerate (empty) rect.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.min_x().max(other.min_x());
        let y0 = self.min_y().max(other.min_y());
        let x1 = self.max_x().min(other.max_x());
        let y1 = self.max_y().min(other.max_y());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_zero_values_are_fresh_and_equal() {
        assert_eq!(Point::zero(), Point::zero());
        assert_eq!(Size::zero(), Size::zero());
        assert_eq!(Rect::zero(), Rect::zero());
    }

    #[test]
    fn test_rect_copy_roundtrip() {
        let r = Rect::new(1.5, -2.0, 10.0, 20.0);
        let copy = r;
        assert_eq!(r, copy);
    }

    #[test]
    fn test_derived_accessors() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((r.min_x() - 10.0).abs() < EPS);
        assert!((r.mid_x() - 60.0).abs() < EPS);
        assert!((r.max_x() - 110.0).abs() < EPS);
        assert!((r.min_y() - 20.0).abs() < EPS);
        assert!((r.mid_y() - 45.0).abs() < EPS);
        assert!((r.max_y() - 70.0).abs() < EPS);
    }

    #[test]
    fn test_centered_in_preserves_size_and_matches_midpoints() {
        let inner = Rect::new(0.0, 0.0, 40.0, 30.0);
        let outer = Rect::new(10.0, 10.0, 100.0, 100.0);
        let c = inner.centered_in(&outer);
        assert_eq!(c.size, inner.size);
        assert!((c.mid_x() - outer.mid_x()).abs() < EPS);
        assert!((c.mid_y() - outer.mid_y()).abs() < EPS);
    }

    #[test]
    fn test_centered_in_does_not_clamp_oversized() {
        let inner = Rect::new(0.0, 0.0, 200.0, 200.0);
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let c = inner.centered_in(&outer);
        assert!((c.min_x() - -50.0).abs() < EPS);
        assert!((c.min_y() - -50.0).abs() < EPS);
        assert_eq!(c.size, inner.size);
    }

    #[test]
    fn test_aligned_to_grid_rounds_each_field() {
        let r = Rect::new(1.4, 2.6, 10.5, 20.49);
        let g = r.aligned_to_grid();
        assert_eq!(g, Rect::new(1.0, 3.0, 11.0, 20.0));
    }

    #[test]
    fn test_inset_shrinks_both_axes() {
        let r = Rect::new(10.0, 10.0, 100.0, 80.0);
        let i = r.inset(5.0, 10.0);
        assert_eq!(i, Rect::new(15.0, 20.0, 90.0, 60.0));
    }

    #[test]
    fn test_contains_point_inclusive_bounds() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(&Point::new(0.0, 0.0)));
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(r.contains_point(&Point::new(5.0, 5.0)));
        assert!(!r.contains_point(&Point::new(10.01, 5.0)));
        assert!(!r.contains_point(&Point::new(5.0, -0.01)));
    }

    #[test]
    fn test_contains_point_degenerate_rect() {
        let r = Rect::new(0.0, 0.0, -5.0, 10.0);
        assert!(r.is_empty());
        assert!(!r.contains_point(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_intersection_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn test_size_aspect_ratio() {
        let s = Size::new(1920.0, 1080.0);
        assert!((s.aspect_ratio() - 16.0 / 9.0).abs() < 0.01);
        assert_eq!(Size::new(10.0, 0.0).aspect_ratio(), 0.0);
    }
}
