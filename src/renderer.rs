//! Turns a sample set into a recorded frame.
//!
//! Layers are recorded in a fixed order, each drawn over the previous one:
//! border, dashed grid, zero axes, tick marks, the curve, and text labels.

use crate::axis::{AxisConfig, MAX_TICKS, integer_ticks};
use crate::error::ParamError;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::params::{PlotParams, RenderMode, RenderOptions};
use crate::render::{
    DashPattern, LineSegment, LineStyle, MarkerStyle, RectStyle, RenderCommand, RenderList,
    TextMeasurer, TextStyle,
};
use crate::sampling::SampleSet;
use crate::style::Theme;
use crate::transform::Transform;
use crate::view::{Range, Viewport};

/// Outcome of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStatus {
    /// The curve and its decorations were recorded.
    Drawn,
    /// Fewer than two samples survived; a "no valid values" message was
    /// recorded instead.
    Empty,
    /// Parameters were rejected; an "invalid input" message was recorded.
    Invalid(ParamError),
    /// The viewport rectangle has no area; nothing was recorded.
    NoArea,
}

/// Result of one render pass.
#[derive(Debug, Clone)]
pub struct PlotFrame {
    /// Recorded drawing commands.
    pub render: RenderList,
    /// What was drawn.
    pub status: FrameStatus,
    /// Derived plot bounds, present for drawn frames.
    pub bounds: Option<Viewport>,
    /// Data-to-screen mapping, present for drawn frames.
    pub transform: Option<Transform>,
}

impl PlotFrame {
    fn new(render: RenderList, status: FrameStatus) -> Self {
        Self {
            render,
            status,
            bounds: None,
            transform: None,
        }
    }
}

/// Layout and styling for render passes.
#[derive(Debug, Clone)]
pub struct PlotRenderer {
    /// Colors.
    pub theme: Theme,
    /// X axis title and tick labels.
    pub x_axis: AxisConfig,
    /// Y axis title and tick labels.
    pub y_axis: AxisConfig,
    /// Grid cells per axis.
    pub grid_divisions: u32,
    /// Grid dash pattern.
    pub grid_dash: DashPattern,
    /// Tick length in pixels.
    pub tick_length: f32,
    /// Stroke width of the curve and zero axes.
    pub line_width: f32,
    /// Font size of the summary line.
    pub summary_size: f32,
    /// Font size of inline messages.
    pub message_size: f32,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            x_axis: AxisConfig::titled("x"),
            y_axis: AxisConfig::titled("y"),
            grid_divisions: 6,
            grid_dash: DashPattern::default(),
            tick_length: 6.0,
            line_width: 2.0,
            summary_size: 12.0,
            message_size: 14.0,
        }
    }
}

impl PlotRenderer {
    /// Record one frame for `samples` inside `rect`.
    pub fn render(
        &self,
        samples: &SampleSet,
        params: PlotParams,
        options: &RenderOptions,
        rect: ScreenRect,
        measurer: &dyn TextMeasurer,
    ) -> PlotFrame {
        let mut render = RenderList::new();
        if !rect.is_valid() {
            return PlotFrame::new(render, FrameStatus::NoArea);
        }

        if let Err(err) = params.validate().and_then(|()| options.validate()) {
            tracing::debug!(%err, "rejected plot input");
            self.push_border(&mut render, rect);
            self.push_message(&mut render, rect, &format!("Invalid input: {err}"), measurer);
            return PlotFrame::new(render, FrameStatus::Invalid(err));
        }

        let bounds = Viewport::from_samples(samples, options.y_clamp);
        let transform = bounds.and_then(|bounds| Transform::new(bounds, rect));
        let (Some(bounds), Some(transform)) = (bounds, transform) else {
            tracing::debug!(samples = samples.len(), "nothing to plot");
            self.push_border(&mut render, rect);
            self.push_message(
                &mut render,
                rect,
                "No valid values in the selected domain",
                measurer,
            );
            return PlotFrame::new(render, FrameStatus::Empty);
        };

        self.push_border(&mut render, rect);
        self.push_grid(&mut render, rect);
        self.push_zero_axes(&mut render, &transform);
        self.push_ticks(&mut render, &transform, measurer);
        self.push_curve(&mut render, samples, options, &transform);
        self.push_labels(&mut render, samples, params, options, rect);

        PlotFrame {
            render,
            status: FrameStatus::Drawn,
            bounds: Some(bounds),
            transform: Some(transform),
        }
    }

    fn push_border(&self, render: &mut RenderList, rect: ScreenRect) {
        render.push(RenderCommand::Rect {
            rect,
            style: RectStyle::outline(self.theme.border, 1.0),
        });
    }

    fn push_grid(&self, render: &mut RenderList, rect: ScreenRect) {
        let divisions = self.grid_divisions.max(1);
        let mut segments = Vec::with_capacity(2 * (divisions as usize + 1));
        for i in 0..=divisions {
            let frac = i as f32 / divisions as f32;
            let x = rect.min.x + frac * rect.width();
            segments.push(LineSegment::new(
                ScreenPoint::new(x, rect.min.y),
                ScreenPoint::new(x, rect.max.y),
            ));
        }
        for i in 0..=divisions {
            let frac = i as f32 / divisions as f32;
            let y = rect.min.y + frac * rect.height();
            segments.push(LineSegment::new(
                ScreenPoint::new(rect.min.x, y),
                ScreenPoint::new(rect.max.x, y),
            ));
        }
        render.push(RenderCommand::LineSegments {
            segments,
            style: LineStyle::dashed(self.theme.grid, 1.0, self.grid_dash),
        });
    }

    fn push_zero_axes(&self, render: &mut RenderList, transform: &Transform) {
        let bounds = transform.viewport();
        let rect = transform.screen();
        let mut segments = Vec::new();
        if bounds.y.contains(0.0) {
            let y = transform.y_to_screen(0.0);
            segments.push(LineSegment::new(
                ScreenPoint::new(rect.min.x, y),
                ScreenPoint::new(rect.max.x, y),
            ));
        }
        if bounds.x.contains(0.0) {
            let x = transform.x_to_screen(0.0);
            segments.push(LineSegment::new(
                ScreenPoint::new(x, rect.min.y),
                ScreenPoint::new(x, rect.max.y),
            ));
        }
        if !segments.is_empty() {
            render.push(RenderCommand::LineSegments {
                segments,
                style: LineStyle::solid(self.theme.axis, self.line_width),
            });
        }
    }

    fn push_ticks(
        &self,
        render: &mut RenderList,
        transform: &Transform,
        measurer: &dyn TextMeasurer,
    ) {
        let bounds = transform.viewport();
        let rect = transform.screen();
        let mut segments = Vec::new();
        let mut labels = Vec::new();

        for tick in integer_ticks(bounds.x, &self.x_axis, MAX_TICKS) {
            let x = transform.x_to_screen(tick.value);
            segments.push(LineSegment::new(
                ScreenPoint::new(x, rect.max.y),
                ScreenPoint::new(x, rect.max.y - self.tick_length),
            ));
            if !tick.label.is_empty() {
                let size = measurer.measure(&tick.label, self.x_axis.label_size());
                let position = ScreenPoint::new(x - size.0 * 0.5, rect.max.y + 4.0);
                labels.push((position, tick.label, self.x_axis.label_size()));
            }
        }

        for tick in integer_ticks(bounds.y, &self.y_axis, MAX_TICKS) {
            let y = transform.y_to_screen(tick.value);
            segments.push(LineSegment::new(
                ScreenPoint::new(rect.min.x, y),
                ScreenPoint::new(rect.min.x + self.tick_length, y),
            ));
            if !tick.label.is_empty() {
                let size = measurer.measure(&tick.label, self.y_axis.label_size());
                let position = ScreenPoint::new(rect.min.x - 4.0 - size.0, y - size.1 * 0.5);
                labels.push((position, tick.label, self.y_axis.label_size()));
            }
        }

        if !segments.is_empty() {
            render.push(RenderCommand::LineSegments {
                segments,
                style: LineStyle::solid(self.theme.tick, 1.0),
            });
        }
        for (position, text, size) in labels {
            render.push(RenderCommand::Text {
                position,
                text,
                style: TextStyle {
                    color: self.theme.text,
                    size,
                },
            });
        }
    }

    fn push_curve(
        &self,
        render: &mut RenderList,
        samples: &SampleSet,
        options: &RenderOptions,
        transform: &Transform,
    ) {
        let points: Vec<ScreenPoint> = samples
            .points(options.y_clamp)
            .map(|point| transform.data_to_screen(point))
            .collect();
        let command = match options.mode {
            RenderMode::Line => RenderCommand::Polyline {
                points,
                style: LineStyle::solid(self.theme.curve, self.line_width),
            },
            RenderMode::Points => RenderCommand::Points {
                points,
                style: MarkerStyle {
                    color: self.theme.curve,
                    size: options.point_size,
                },
            },
        };
        render.push(command);
    }

    fn push_labels(
        &self,
        render: &mut RenderList,
        samples: &SampleSet,
        params: PlotParams,
        options: &RenderOptions,
        rect: ScreenRect,
    ) {
        let text_style = |size: f32| TextStyle {
            color: self.theme.text,
            size,
        };
        if let Some(title) = self.x_axis.title() {
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(rect.max.x - 12.0, rect.max.y + 2.0),
                text: title.to_string(),
                style: text_style(self.x_axis.label_size()),
            });
        }
        if let Some(title) = self.y_axis.title() {
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(rect.min.x - 18.0, rect.min.y + 2.0),
                text: title.to_string(),
                style: text_style(self.y_axis.label_size()),
            });
        }
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(rect.min.x + 8.0, rect.min.y + 6.0),
            text: summary_line(samples, params, options),
            style: text_style(self.summary_size),
        });
    }

    fn push_message(
        &self,
        render: &mut RenderList,
        rect: ScreenRect,
        message: &str,
        measurer: &dyn TextMeasurer,
    ) {
        let size = measurer.measure(message, self.message_size);
        let position = ScreenPoint::new(
            rect.min.x + ((rect.width() - size.0) * 0.5).max(4.0),
            rect.min.y + (rect.height() - size.1) * 0.5,
        );
        render.push(RenderCommand::Text {
            position,
            text: message.to_string(),
            style: TextStyle {
                color: self.theme.message,
                size: self.message_size,
            },
        });
    }
}

/// One-line description of the domain, step, and value range.
pub fn summary_line(samples: &SampleSet, params: PlotParams, options: &RenderOptions) -> String {
    let y = samples
        .y_range(options.y_clamp)
        .unwrap_or(Range::new(f64::NAN, f64::NAN));
    format!(
        "x ∈ [{}, {}], Δx = {}, y ∈ [{}, {}], n = {}",
        format_number(params.x_min),
        format_number(params.x_max),
        format_number(params.step),
        format_number(y.min),
        format_number(y.max),
        samples.len(),
    )
}

/// Format with up to four decimals, trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "–".to_string();
    }
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::YClamp;
    use crate::render::EstimatedTextMeasurer;
    use crate::sampling::sample;
    use pretty_assertions::assert_eq;

    fn rect() -> ScreenRect {
        ScreenRect::new(ScreenPoint::new(50.0, 30.0), ScreenPoint::new(750.0, 530.0))
    }

    fn render(samples: &SampleSet, params: PlotParams, options: &RenderOptions) -> PlotFrame {
        PlotRenderer::default().render(
            samples,
            params,
            options,
            rect(),
            &EstimatedTextMeasurer::default(),
        )
    }

    fn kinds(frame: &PlotFrame) -> Vec<&'static str> {
        frame
            .render
            .commands()
            .iter()
            .map(|command| match command {
                RenderCommand::LineSegments { style, .. } if style.dash.is_some() => "grid",
                RenderCommand::LineSegments { .. } => "segments",
                RenderCommand::Polyline { .. } => "polyline",
                RenderCommand::Points { .. } => "points",
                RenderCommand::Rect { .. } => "rect",
                RenderCommand::Text { .. } => "text",
            })
            .collect()
    }

    fn has_curve(frame: &PlotFrame) -> bool {
        frame.render.commands().iter().any(|command| {
            matches!(
                command,
                RenderCommand::Polyline { .. } | RenderCommand::Points { .. }
            )
        })
    }

    fn texts(frame: &PlotFrame) -> Vec<String> {
        frame
            .render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn default_plot_layers_in_order() {
        let params = PlotParams::default();
        let frame = render(&sample(params), params, &RenderOptions::default());
        assert_eq!(frame.status, FrameStatus::Drawn);
        assert_eq!(
            kinds(&frame),
            vec!["rect", "grid", "segments", "polyline", "text", "text", "text"]
        );
        let summary = texts(&frame).pop().unwrap();
        assert!(summary.starts_with("x ∈ [0.1, 1.2], Δx = 0.01, y ∈ ["));
        assert!(summary.ends_with("n = 111"));
    }

    #[test]
    fn grid_is_six_by_six() {
        let params = PlotParams::default();
        let frame = render(&sample(params), params, &RenderOptions::default());
        let RenderCommand::LineSegments { segments, .. } = &frame.render.commands()[1] else {
            panic!("expected grid segments");
        };
        assert_eq!(segments.len(), 14);
        assert_eq!(segments[0].start.x, 50.0);
        assert_eq!(segments[6].start.x, 750.0);
        assert_eq!(segments[7].start.y, 30.0);
        assert_eq!(segments[13].start.y, 530.0);
    }

    #[test]
    fn ticks_follow_integer_positions() {
        let params = PlotParams::default();
        let frame = render(&sample(params), params, &RenderOptions::default());
        let bounds = frame.bounds.unwrap();
        let transform = frame.transform.clone().unwrap();
        let RenderCommand::LineSegments { segments, .. } = &frame.render.commands()[2] else {
            panic!("expected tick segments");
        };
        let y_ticks = (bounds.y.max.floor() - bounds.y.min.ceil()) as usize + 1;
        assert_eq!(segments.len(), 1 + y_ticks);
        let x_tick = segments[0];
        assert_eq!(x_tick.start.x, transform.x_to_screen(1.0));
        assert_eq!(x_tick.start.y, 530.0);
        assert_eq!(x_tick.end.y, 524.0);
    }

    #[test]
    fn reversed_domain_is_invalid() {
        let params = PlotParams::new(1.0, 0.5, 0.01);
        let frame = render(&sample(params), params, &RenderOptions::default());
        assert!(matches!(
            frame.status,
            FrameStatus::Invalid(ParamError::InvalidDomain { .. })
        ));
        assert!(!has_curve(&frame));
        assert!(frame.bounds.is_none());
        assert!(texts(&frame)[0].starts_with("Invalid input"));
    }

    #[test]
    fn zero_step_is_invalid() {
        let params = PlotParams::new(0.1, 1.2, 0.0);
        let frame = render(&sample(params), params, &RenderOptions::default());
        assert!(matches!(frame.status, FrameStatus::Invalid(_)));
        assert!(!has_curve(&frame));
    }

    #[test]
    fn domain_around_pole_is_empty() {
        let params = PlotParams::new(-0.0005, 0.0005, 0.0001);
        let samples = sample(params);
        assert!(samples.is_empty());
        let frame = render(&samples, params, &RenderOptions::default());
        assert_eq!(frame.status, FrameStatus::Empty);
        assert!(!has_curve(&frame));
        assert_eq!(texts(&frame), vec!["No valid values in the selected domain"]);
    }

    #[test]
    fn flat_samples_do_not_divide_by_zero() {
        let samples = SampleSet::from_pairs(&[(1.0, 7.5), (2.0, 7.5), (3.0, 7.5)]);
        let params = PlotParams::new(1.0, 3.0, 1.0);
        let frame = render(&samples, params, &RenderOptions::default());
        assert_eq!(frame.status, FrameStatus::Drawn);
        assert!(frame.bounds.unwrap().y.span() >= 2.0);
        let RenderCommand::Polyline { points, .. } = &frame.render.commands()[3] else {
            panic!("expected polyline");
        };
        assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_eq!(points[0].y, points[2].y);
    }

    #[test]
    fn zero_axes_only_when_in_range() {
        let samples = SampleSet::from_pairs(&[(-1.0, -2.0), (1.0, 3.0)]);
        let params = PlotParams::new(-1.0, 1.0, 2.0);
        let frame = render(&samples, params, &RenderOptions::default());
        let transform = frame.transform.clone().unwrap();
        let RenderCommand::LineSegments { segments, style } = &frame.render.commands()[2] else {
            panic!("expected zero axes");
        };
        assert_eq!(style.width, 2.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start.y, transform.y_to_screen(0.0));
        assert_eq!(segments[1].start.x, transform.x_to_screen(0.0));

        let params = PlotParams::default();
        let frame = render(&sample(params), params, &RenderOptions::default());
        assert_eq!(kinds(&frame)[2], "segments");
        let RenderCommand::LineSegments { style, .. } = &frame.render.commands()[2] else {
            unreachable!();
        };
        assert_eq!(style.width, 1.0);
    }

    #[test]
    fn mode_toggle_changes_only_the_curve() {
        let params = PlotParams::default();
        let samples = sample(params);
        let line = render(&samples, params, &RenderOptions::default());
        let options = RenderOptions {
            mode: RenderMode::Points,
            ..RenderOptions::default()
        };
        let points = render(&samples, params, &options);

        assert_eq!(line.bounds, points.bounds);
        assert_eq!(line.transform, points.transform);
        let (line_cmds, point_cmds) = (line.render.commands(), points.render.commands());
        assert_eq!(line_cmds.len(), point_cmds.len());
        for (a, b) in line_cmds.iter().zip(point_cmds) {
            match (a, b) {
                (
                    RenderCommand::Polyline { points: pa, .. },
                    RenderCommand::Points { points: pb, style },
                ) => {
                    assert_eq!(pa, pb);
                    assert_eq!(style.size, 6.0);
                }
                _ => assert_eq!(a, b),
            }
        }
    }

    #[test]
    fn clamp_limits_mapped_curve() {
        let params = PlotParams::new(0.01, 1.0, 0.01);
        let samples = sample(params);
        let options = RenderOptions {
            y_clamp: YClamp::enabled(20.0),
            ..RenderOptions::default()
        };
        let frame = render(&samples, params, &options);
        let bounds = frame.bounds.unwrap();
        assert!(bounds.y.max <= 20.0 + 0.08 * 40.0);
        assert!(samples.ys().iter().any(|&y| y > 20.0));
    }

    #[test]
    fn sample_roundtrip_through_frame_transform() {
        let params = PlotParams::default();
        let samples = sample(params);
        let frame = render(&samples, params, &RenderOptions::default());
        let transform = frame.transform.unwrap();
        let bounds = frame.bounds.unwrap();
        for point in samples.points(YClamp::default()) {
            let back = transform.screen_to_data(transform.data_to_screen(point));
            assert!((back.x - point.x).abs() < bounds.x.span() / 700.0);
            assert!((back.y - point.y).abs() < bounds.y.span() / 500.0);
        }
    }

    #[test]
    fn tick_labels_when_enabled() {
        let renderer = PlotRenderer {
            x_axis: AxisConfig::titled("x").with_tick_labels(true),
            ..PlotRenderer::default()
        };
        let params = PlotParams::default();
        let frame = renderer.render(
            &sample(params),
            params,
            &RenderOptions::default(),
            rect(),
            &EstimatedTextMeasurer::default(),
        );
        assert!(texts(&frame).iter().any(|text| text == "1"));
    }

    #[test]
    fn empty_rect_records_nothing() {
        let params = PlotParams::default();
        let frame = PlotRenderer::default().render(
            &sample(params),
            params,
            &RenderOptions::default(),
            ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(0.0, 0.0)),
            &EstimatedTextMeasurer::default(),
        );
        assert_eq!(frame.status, FrameStatus::NoArea);
        assert!(frame.render.is_empty());
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(57.54321), "57.5432");
        assert_eq!(format_number(f64::NAN), "–");
    }
}
