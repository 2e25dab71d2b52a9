use crate::export::export_png;
use crate::plot::FunctionPlot;
use crate::renderer::format_number;

use super::config::PlotViewConfig;

/// A toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Switch between line and point rendering.
    ToggleMode,
    /// Move `x_min` down by the domain nudge.
    DecreaseXMin,
    /// Move `x_min` up by the domain nudge.
    IncreaseXMin,
    /// Move `x_max` down by the domain nudge.
    DecreaseXMax,
    /// Move `x_max` up by the domain nudge.
    IncreaseXMax,
    /// Halve the sampling interval.
    HalveStep,
    /// Double the sampling interval.
    DoubleStep,
    /// Shrink the markers.
    ShrinkPoints,
    /// Grow the markers.
    GrowPoints,
    /// Switch the Y clamp on or off.
    ToggleClamp,
    /// Halve the clamp limit.
    HalveClamp,
    /// Double the clamp limit.
    DoubleClamp,
    /// Restore the initial parameters and options.
    Reset,
    /// Write the plot to the configured PNG path.
    Export,
}

impl ToolbarAction {
    /// Buttons in toolbar order.
    pub const ALL: [Self; 14] = [
        Self::ToggleMode,
        Self::DecreaseXMin,
        Self::IncreaseXMin,
        Self::DecreaseXMax,
        Self::IncreaseXMax,
        Self::HalveStep,
        Self::DoubleStep,
        Self::ShrinkPoints,
        Self::GrowPoints,
        Self::ToggleClamp,
        Self::HalveClamp,
        Self::DoubleClamp,
        Self::Reset,
        Self::Export,
    ];

    /// Button caption for the current plot state.
    pub fn label(self, plot: &FunctionPlot) -> String {
        let params = plot.params();
        let options = plot.options();
        match self {
            Self::ToggleMode => options.mode.toggled().label().to_string(),
            Self::DecreaseXMin => format!("x min − ({})", format_number(params.x_min)),
            Self::IncreaseXMin => "x min +".to_string(),
            Self::DecreaseXMax => format!("x max − ({})", format_number(params.x_max)),
            Self::IncreaseXMax => "x max +".to_string(),
            Self::HalveStep => format!("Δx ÷2 ({})", format_number(params.step)),
            Self::DoubleStep => "Δx ×2".to_string(),
            Self::ShrinkPoints => format!("size − ({})", options.point_size),
            Self::GrowPoints => "size +".to_string(),
            Self::ToggleClamp if options.y_clamp.enabled => "clamp off".to_string(),
            Self::ToggleClamp => "clamp on".to_string(),
            Self::HalveClamp => format!("limit ÷2 ({})", format_number(options.y_clamp.limit)),
            Self::DoubleClamp => "limit ×2".to_string(),
            Self::Reset => "Reset".to_string(),
            Self::Export => "Export PNG".to_string(),
        }
    }

    /// Apply the button to `plot`.
    ///
    /// Returns a status message for actions that report one. `canvas_size` is
    /// the last painted canvas size, used as the export image size.
    pub fn apply(
        self,
        plot: &mut FunctionPlot,
        config: &PlotViewConfig,
        canvas_size: Option<(f32, f32)>,
    ) -> Option<String> {
        let params = plot.params();
        match self {
            Self::ToggleMode => plot.toggle_mode(),
            Self::DecreaseXMin => plot.set_x_min(params.x_min - config.domain_nudge),
            Self::IncreaseXMin => plot.set_x_min(params.x_min + config.domain_nudge),
            Self::DecreaseXMax => plot.set_x_max(params.x_max - config.domain_nudge),
            Self::IncreaseXMax => plot.set_x_max(params.x_max + config.domain_nudge),
            Self::HalveStep => plot.set_step(params.step * 0.5),
            Self::DoubleStep => plot.set_step(params.step * 2.0),
            Self::ShrinkPoints => {
                let size = plot.options().point_size - config.point_size_step;
                plot.set_point_size(size);
            }
            Self::GrowPoints => {
                let size = plot.options().point_size + config.point_size_step;
                plot.set_point_size(size);
            }
            Self::ToggleClamp => {
                let clamp = &mut plot.options_mut().y_clamp;
                clamp.enabled = !clamp.enabled;
            }
            Self::HalveClamp => plot.options_mut().y_clamp.limit *= 0.5,
            Self::DoubleClamp => plot.options_mut().y_clamp.limit *= 2.0,
            Self::Reset => plot.reset(),
            Self::Export => return Some(export(plot, config, canvas_size)),
        }
        tracing::debug!(action = ?self, params = ?plot.params(), "toolbar action");
        if let Err(err) = plot.params().validate().and_then(|()| plot.options().validate()) {
            tracing::warn!(action = ?self, %err, "plot input rejected");
        }
        None
    }
}

fn export(
    plot: &mut FunctionPlot,
    config: &PlotViewConfig,
    canvas_size: Option<(f32, f32)>,
) -> String {
    let size = canvas_size
        .map(|(w, h)| (w.round().max(0.0) as u32, h.round().max(0.0) as u32))
        .unwrap_or(config.export_fallback_size);
    match export_png(plot, &config.export_path, size, config.margins) {
        Ok(_) => format!("saved {}", config.export_path.display()),
        Err(err) => {
            tracing::error!(%err, "export failed");
            format!("export failed: {err}")
        }
    }
}
