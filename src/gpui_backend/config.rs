use std::path::PathBuf;

use crate::geom::Margins;

/// Configuration for the GPUI plot view.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotViewConfig {
    /// Margins between the canvas edge and the plot rectangle.
    pub margins: Margins,
    /// Amount the domain buttons move `x_min`/`x_max`.
    pub domain_nudge: f64,
    /// Amount the point size buttons change the marker diameter.
    pub point_size_step: f32,
    /// Destination of the PNG export.
    pub export_path: PathBuf,
    /// Image size used when exporting before the canvas was painted.
    pub export_fallback_size: (u32, u32),
}

impl Default for PlotViewConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            domain_nudge: 0.1,
            point_size_step: 1.0,
            export_path: PathBuf::from("plot.png"),
            export_fallback_size: (800, 600),
        }
    }
}
