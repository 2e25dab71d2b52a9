//! Plot parameters and display options.

use crate::error::{ParamError, Result};

/// Upper bound on samples per render pass.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Sampling domain and interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotParams {
    /// Lower domain bound.
    pub x_min: f64,
    /// Upper domain bound (inclusive).
    pub x_max: f64,
    /// Sampling interval.
    pub step: f64,
}

impl PlotParams {
    /// Create a new parameter set.
    pub fn new(x_min: f64, x_max: f64, step: f64) -> Self {
        Self { x_min, x_max, step }
    }

    /// Check the domain and step before sampling.
    pub fn validate(&self) -> Result<()> {
        if !(self.x_min.is_finite() && self.x_max.is_finite() && self.x_min < self.x_max) {
            return Err(ParamError::InvalidDomain {
                x_min: self.x_min,
                x_max: self.x_max,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ParamError::InvalidStep { step: self.step });
        }
        let count = self.estimated_samples();
        if count > MAX_SAMPLES as f64 {
            return Err(ParamError::TooManySamples {
                count,
                max: MAX_SAMPLES,
            });
        }
        Ok(())
    }

    /// Number of grid positions the sampler will visit.
    pub fn estimated_samples(&self) -> f64 {
        ((self.x_max - self.x_min) / self.step).floor() + 1.0
    }
}

impl Default for PlotParams {
    fn default() -> Self {
        Self::new(0.1, 1.2, 0.01)
    }
}

/// How the curve is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Connect samples with one polyline.
    #[default]
    Line,
    /// Draw a filled circle per sample.
    Points,
}

impl RenderMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Line => Self::Points,
            Self::Points => Self::Line,
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Points => "Points",
        }
    }
}

/// Optional symmetric clamp on Y values before mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YClamp {
    /// Whether clamping is applied.
    pub enabled: bool,
    /// Clamp magnitude; values are limited to `[-limit, limit]`.
    pub limit: f64,
}

impl YClamp {
    /// An enabled clamp with the given magnitude.
    pub fn enabled(limit: f64) -> Self {
        Self {
            enabled: true,
            limit,
        }
    }

    /// Apply the clamp to a value.
    pub fn apply(&self, value: f64) -> f64 {
        if self.enabled {
            value.max(-self.limit).min(self.limit)
        } else {
            value
        }
    }
}

impl Default for YClamp {
    fn default() -> Self {
        Self {
            enabled: false,
            limit: 100.0,
        }
    }
}

/// Display-only options.
///
/// None of these affect the sample set; they only change the screen mapping
/// and draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Line or point rendering.
    pub mode: RenderMode,
    /// Marker diameter in pixels for [`RenderMode::Points`].
    pub point_size: f32,
    /// Optional Y clamp.
    pub y_clamp: YClamp,
}

impl RenderOptions {
    /// Check display options before rendering.
    pub fn validate(&self) -> Result<()> {
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(ParamError::InvalidPointSize {
                size: self.point_size,
            });
        }
        // A disabled clamp may hold any value until it is switched on.
        if self.y_clamp.enabled && !(self.y_clamp.limit.is_finite() && self.y_clamp.limit > 0.0)
        {
            return Err(ParamError::InvalidClampLimit {
                limit: self.y_clamp.limit,
            });
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            point_size: 6.0,
            y_clamp: YClamp::default(),
        }
    }
}
