//! Plot configuration entry points and builders.

use std::sync::Arc;

use crate::axis::AxisConfig;
use crate::geom::ScreenRect;
use crate::params::{PlotParams, RenderMode, RenderOptions, YClamp};
use crate::render::TextMeasurer;
use crate::renderer::{PlotFrame, PlotRenderer};
use crate::sampling::{SampleProvider, SampleSet};
use crate::style::Theme;

/// Everything needed to render the function: sampling parameters, display
/// options, and styling.
///
/// Sampling and rendering are pure functions of this value.
#[derive(Debug, Clone, Default)]
pub struct FunctionPlot {
    provider: SampleProvider,
    initial: PlotParams,
    options: RenderOptions,
    renderer: PlotRenderer,
}

impl FunctionPlot {
    /// Create a plot with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a plot with custom configuration.
    pub fn builder() -> FunctionPlotBuilder {
        FunctionPlotBuilder::default()
    }

    /// Current sampling parameters.
    pub fn params(&self) -> PlotParams {
        self.provider.params()
    }

    /// Set the lower domain bound.
    pub fn set_x_min(&mut self, x_min: f64) {
        self.provider.set_x_min(x_min);
    }

    /// Set the upper domain bound.
    pub fn set_x_max(&mut self, x_max: f64) {
        self.provider.set_x_max(x_max);
    }

    /// Set the sampling interval.
    pub fn set_step(&mut self, step: f64) {
        self.provider.set_step(step);
    }

    /// Access the display options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Access the display options mutably.
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Set the render mode.
    pub fn set_mode(&mut self, mode: RenderMode) {
        self.options.mode = mode;
    }

    /// Switch between line and point rendering.
    pub fn toggle_mode(&mut self) {
        self.options.mode = self.options.mode.toggled();
    }

    /// Set the marker diameter for point rendering.
    pub fn set_point_size(&mut self, size: f32) {
        self.options.point_size = size;
    }

    /// Set the Y clamp.
    pub fn set_y_clamp(&mut self, clamp: YClamp) {
        self.options.y_clamp = clamp;
    }

    /// Restore the parameters the plot was built with and default options.
    pub fn reset(&mut self) {
        self.provider.set_params(self.initial);
        self.options = RenderOptions::default();
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.renderer.theme
    }

    /// Access the renderer configuration.
    pub fn renderer(&self) -> &PlotRenderer {
        &self.renderer
    }

    /// Samples for the current parameters (memoized).
    pub fn samples(&mut self) -> Arc<SampleSet> {
        self.provider.samples()
    }

    /// Parameter generation, bumped on every effective parameter change.
    pub fn generation(&self) -> u64 {
        self.provider.generation()
    }

    /// Sample and record one frame inside `rect`.
    pub fn frame(&mut self, rect: ScreenRect, measurer: &dyn TextMeasurer) -> PlotFrame {
        let samples = self.provider.samples();
        self.renderer
            .render(&samples, self.params(), &self.options, rect, measurer)
    }
}

/// Builder for configuring a plot before construction.
#[derive(Debug, Default)]
pub struct FunctionPlotBuilder {
    params: PlotParams,
    options: RenderOptions,
    renderer: PlotRenderer,
}

impl FunctionPlotBuilder {
    /// Set the domain.
    pub fn domain(mut self, x_min: f64, x_max: f64) -> Self {
        self.params.x_min = x_min;
        self.params.x_max = x_max;
        self
    }

    /// Set the sampling interval.
    pub fn step(mut self, step: f64) -> Self {
        self.params.step = step;
        self
    }

    /// Set the initial render mode.
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Set the marker diameter.
    pub fn point_size(mut self, size: f32) -> Self {
        self.options.point_size = size;
        self
    }

    /// Set the Y clamp.
    pub fn y_clamp(mut self, clamp: YClamp) -> Self {
        self.options.y_clamp = clamp;
        self
    }

    /// Set the theme used by the plot.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.renderer.theme = theme;
        self
    }

    /// Set the X axis configuration.
    pub fn x_axis(mut self, axis: AxisConfig) -> Self {
        self.renderer.x_axis = axis;
        self
    }

    /// Set the Y axis configuration.
    pub fn y_axis(mut self, axis: AxisConfig) -> Self {
        self.renderer.y_axis = axis;
        self
    }

    /// Replace the whole renderer configuration.
    pub fn renderer(mut self, renderer: PlotRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Build the plot.
    pub fn build(self) -> FunctionPlot {
        FunctionPlot {
            provider: SampleProvider::with_params(self.params),
            initial: self.params,
            options: self.options,
            renderer: self.renderer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamError;
    use crate::geom::ScreenPoint;
    use crate::params::MAX_SAMPLES;
    use crate::render::EstimatedTextMeasurer;
    use crate::renderer::FrameStatus;

    #[test]
    fn builder_sets_everything() {
        let plot = FunctionPlot::builder()
            .domain(-2.0, 2.0)
            .step(0.05)
            .mode(RenderMode::Points)
            .point_size(4.0)
            .theme(Theme::dark())
            .y_axis(AxisConfig::titled("f(x)"))
            .build();
        assert_eq!(plot.params(), PlotParams::new(-2.0, 2.0, 0.05));
        assert_eq!(plot.options().mode, RenderMode::Points);
        assert_eq!(plot.options().point_size, 4.0);
        assert_eq!(plot.theme(), &Theme::dark());
        assert_eq!(plot.renderer().y_axis.title(), Some("f(x)"));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut plot = FunctionPlot::builder().domain(0.5, 2.0).build();
        plot.set_x_min(1.0);
        plot.set_step(0.5);
        plot.toggle_mode();
        plot.set_y_clamp(YClamp::enabled(5.0));
        plot.reset();
        assert_eq!(plot.params(), PlotParams::new(0.5, 2.0, 0.01));
        assert_eq!(plot.options(), &RenderOptions::default());
    }

    #[test]
    fn setters_resample() {
        let mut plot = FunctionPlot::new();
        assert_eq!(plot.samples().len(), 111);
        plot.set_x_max(0.2);
        assert_eq!(plot.samples().len(), 11);
        assert_eq!(plot.generation(), 1);
    }

    #[test]
    fn too_fine_step_is_rejected_before_sampling() {
        let mut plot = FunctionPlot::builder().domain(0.1, 1.2).step(1e-7).build();
        let rect = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(400.0, 300.0));
        let frame = plot.frame(rect, &EstimatedTextMeasurer::default());
        assert!(matches!(
            frame.status,
            FrameStatus::Invalid(ParamError::TooManySamples { .. })
        ));
        assert!(plot.samples().len() <= MAX_SAMPLES);
        assert!(plot.samples().is_empty());
    }

    #[test]
    fn frame_reports_invalid_input() {
        let mut plot = FunctionPlot::new();
        plot.set_x_min(2.0);
        let rect = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(400.0, 300.0));
        let frame = plot.frame(rect, &EstimatedTextMeasurer::default());
        assert!(matches!(frame.status, FrameStatus::Invalid(_)));
    }
}
