//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] lives in data space; [`ScreenPoint`] and [`ScreenRect`] are
//! pixel coordinates with Y growing downwards.

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a pixel delta.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at `origin` with the given size.
    pub fn from_origin_size(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self::new(origin, origin.offset(width, height))
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Shrink the rectangle by per-edge margins, keeping at least
    /// `min_size` pixels on each axis.
    pub fn inset(&self, margins: Margins, min_size: f32) -> Self {
        let min = self.min.offset(margins.left, margins.top);
        let width = (self.width() - margins.left - margins.right).max(min_size);
        let height = (self.height() - margins.top - margins.bottom).max(min_size);
        Self::from_origin_size(min, width, height)
    }
}

/// Smallest plot rectangle side after margins are applied.
pub const MIN_PLOT_SIZE: f32 = 10.0;

/// Per-edge pixel margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Left margin.
    pub left: f32,
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 50.0,
            top: 30.0,
            right: 50.0,
            bottom: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_keeps_minimum_size() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(0.0, 0.0), 60.0, 40.0);
        let inner = rect.inset(Margins::default(), MIN_PLOT_SIZE);
        assert_eq!(inner.min, ScreenPoint::new(50.0, 30.0));
        assert_eq!(inner.width(), 10.0);
        assert_eq!(inner.height(), 10.0);
    }

    #[test]
    fn inset_subtracts_margins() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(10.0, 20.0), 800.0, 600.0);
        let inner = rect.inset(Margins::default(), MIN_PLOT_SIZE);
        assert_eq!(inner.min, ScreenPoint::new(60.0, 50.0));
        assert_eq!(inner.max, ScreenPoint::new(760.0, 570.0));
    }
}
