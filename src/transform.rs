//! Coordinate transforms between data and screen space.

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::view::Viewport;

/// Affine transform from derived plot bounds into a screen rectangle.
///
/// X grows left-to-right; data Y is inverted so larger values sit higher.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    viewport: Viewport,
    screen: ScreenRect,
}

impl Transform {
    /// Create a transform for the given bounds and screen rectangle.
    ///
    /// Returns `None` when either side has no area.
    pub fn new(viewport: Viewport, screen: ScreenRect) -> Option<Self> {
        if !screen.is_valid() || !viewport.is_valid() {
            return None;
        }
        Some(Self { viewport, screen })
    }

    /// Access the data bounds.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the screen rectangle.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Screen X of a data X value.
    pub fn x_to_screen(&self, x: f64) -> f32 {
        let norm = (x - self.viewport.x.min) / self.viewport.x.span();
        (self.screen.min.x as f64 + norm * self.screen.width() as f64) as f32
    }

    /// Screen Y of a data Y value.
    pub fn y_to_screen(&self, y: f64) -> f32 {
        let norm = (y - self.viewport.y.min) / self.viewport.y.span();
        (self.screen.min.y as f64 + (1.0 - norm) * self.screen.height() as f64) as f32
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.x_to_screen(point.x), self.y_to_screen(point.y))
    }

    /// Map a screen point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Point {
        let x_norm = (point.x as f64 - self.screen.min.x as f64) / self.screen.width() as f64;
        let y_norm = (self.screen.max.y as f64 - point.y as f64) / self.screen.height() as f64;
        Point::new(
            self.viewport.x.min + x_norm * self.viewport.x.span(),
            self.viewport.y.min + y_norm * self.viewport.y.span(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;
    use proptest::prelude::*;

    fn transform() -> Transform {
        let viewport = Viewport::new(Range::new(0.0, 10.0), Range::new(-5.0, 5.0));
        let screen = ScreenRect::new(ScreenPoint::new(50.0, 30.0), ScreenPoint::new(750.0, 530.0));
        Transform::new(viewport, screen).expect("valid transform")
    }

    #[test]
    fn corners_map_to_rect_edges() {
        let t = transform();
        assert_eq!(t.data_to_screen(Point::new(0.0, 5.0)), ScreenPoint::new(50.0, 30.0));
        assert_eq!(t.data_to_screen(Point::new(10.0, -5.0)), ScreenPoint::new(750.0, 530.0));
        assert_eq!(t.y_to_screen(0.0), 280.0);
    }

    #[test]
    fn rejects_empty_rect() {
        let viewport = Viewport::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0));
        let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(0.0, 10.0));
        assert!(Transform::new(viewport, screen).is_none());
    }

    #[test]
    fn rejects_collapsed_bounds() {
        let viewport = Viewport::new(Range::new(1.0, 1.0), Range::new(0.0, 1.0));
        let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 10.0));
        assert!(Transform::new(viewport, screen).is_none());
    }

    proptest! {
        #[test]
        fn roundtrip_within_a_pixel(x in 0.0_f64..10.0, y in -5.0_f64..5.0) {
            let t = transform();
            let point = Point::new(x, y);
            let back = t.screen_to_data(t.data_to_screen(point));
            let x_per_px = 10.0 / 700.0;
            let y_per_px = 10.0 / 500.0;
            prop_assert!((back.x - x).abs() <= x_per_px * 0.01);
            prop_assert!((back.y - y).abs() <= y_per_px * 0.01);
        }
    }
}
