//! Data ranges and derived plot bounds.

use crate::params::YClamp;
use crate::sampling::SampleSet;

/// Fraction of the X span added on each side.
pub const X_PADDING_FRAC: f64 = 0.02;
/// Fraction of the Y span added on each side.
pub const Y_PADDING_FRAC: f64 = 0.08;
/// Spans below this are treated as collapsed.
pub const COLLAPSED_SPAN: f64 = 1e-9;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Add `frac` of the span on each side.
    pub fn padded(&self, frac: f64) -> Self {
        let padding = self.span().abs() * frac;
        Self {
            min: self.min - padding,
            max: self.max + padding,
        }
    }

    /// Widen a collapsed range by `half` on each side.
    pub fn widened_if_collapsed(&self, half: f64) -> Self {
        if self.span().abs() >= COLLAPSED_SPAN {
            return *self;
        }
        Self {
            min: self.min - half,
            max: self.max + half,
        }
    }

    /// Integers inside the range, from `ceil(min)` to `floor(max)`.
    pub fn integer_span(&self) -> Option<(i64, i64)> {
        if !self.is_finite() {
            return None;
        }
        let first = self.min.ceil();
        let last = self.max.floor();
        if first > last || first < i64::MIN as f64 || last > i64::MAX as f64 {
            return None;
        }
        Some((first as i64, last as i64))
    }
}

/// Visible data ranges on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Check whether both axes are valid.
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    /// Derive padded plot bounds from a sample set.
    ///
    /// Y values are clamped first when the clamp is enabled. A collapsed Y
    /// range is widened by ±1 before padding. Returns `None` for fewer than
    /// two samples.
    pub fn from_samples(samples: &SampleSet, clamp: YClamp) -> Option<Self> {
        if !samples.is_plottable() {
            return None;
        }
        let x = samples.x_range()?;
        let y = samples.y_range(clamp)?.widened_if_collapsed(1.0);
        Some(Self {
            x: x.padded(X_PADDING_FRAC),
            y: y.padded(Y_PADDING_FRAC),
        })
    }
}
