//! Rendering primitives and the drawing-command list.
//!
//! The renderer records [`RenderCommand`]s into a [`RenderList`]; backends
//! implement [`Surface`] and the list replays itself onto them. The same list
//! drives the GPUI canvas and the PNG exporter.

use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// 8-bit channels, alpha dropped.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Dash pattern in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    /// Drawn length.
    pub on: f32,
    /// Gap length.
    pub off: f32,
}

impl Default for DashPattern {
    fn default() -> Self {
        Self { on: 4.0, off: 4.0 }
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Dash pattern, solid when `None`.
    pub dash: Option<DashPattern>,
}

impl LineStyle {
    /// Solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Dashed stroke.
    pub fn dashed(color: Color, width: f32, pattern: DashPattern) -> Self {
        Self {
            color,
            width,
            dash: Some(pattern),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Filled circle markers.
///
/// Marker sizes are diameters in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Color,
    /// Marker diameter in pixels.
    pub size: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 6.0,
        }
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

impl RectStyle {
    /// Unfilled outline.
    pub fn outline(stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill: Color::TRANSPARENT,
            stroke,
            stroke_width,
        }
    }
}

impl Default for RectStyle {
    fn default() -> Self {
        Self::outline(Color::BLACK, 1.0)
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }

    /// Segment length in pixels.
    pub fn length(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Split the segment into the drawn pieces of a dash pattern.
    pub fn dashes(&self, pattern: DashPattern) -> Vec<LineSegment> {
        let length = self.length();
        if length <= 0.0 {
            return Vec::new();
        }
        if pattern.on <= 0.0 || pattern.off <= 0.0 {
            return vec![*self];
        }
        let at = |t: f32| {
            let frac = t / length;
            ScreenPoint::new(
                self.start.x + (self.end.x - self.start.x) * frac,
                self.start.y + (self.end.y - self.start.y) * frac,
            )
        };
        let period = pattern.on + pattern.off;
        let mut out = Vec::with_capacity((length / period).ceil() as usize);
        let mut t = 0.0_f32;
        while t < length {
            let end = (t + pattern.on).min(length);
            out.push(LineSegment::new(at(t), at(end)));
            t += period;
        }
        out
    }
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw independent line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Draw one connected polyline.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<ScreenPoint>,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw filled circles.
    Points {
        /// Circle centers.
        points: Vec<ScreenPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text with its top-left corner at `position`.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Drawing target for a [`RenderList`].
///
/// Dashed strokes are split by [`RenderList::replay`], so implementations
/// only ever receive solid line styles.
pub trait Surface {
    /// Backend error.
    type Error;

    /// Stroke independent segments.
    fn line_segments(
        &mut self,
        segments: &[LineSegment],
        style: LineStyle,
    ) -> Result<(), Self::Error>;

    /// Stroke a connected polyline.
    fn polyline(&mut self, points: &[ScreenPoint], style: LineStyle) -> Result<(), Self::Error>;

    /// Fill circles centered at each point.
    fn points(&mut self, points: &[ScreenPoint], style: MarkerStyle) -> Result<(), Self::Error>;

    /// Fill and stroke a rectangle.
    fn rect(&mut self, rect: ScreenRect, style: RectStyle) -> Result<(), Self::Error>;

    /// Draw a single line of text.
    fn text(
        &mut self,
        position: ScreenPoint,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), Self::Error>;
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay every command, in order, onto a surface.
    pub fn replay<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for command in &self.commands {
            match command {
                RenderCommand::LineSegments { segments, style } => match style.dash {
                    Some(pattern) => {
                        let pieces: Vec<LineSegment> = segments
                            .iter()
                            .flat_map(|segment| segment.dashes(pattern))
                            .collect();
                        surface.line_segments(&pieces, LineStyle { dash: None, ..*style })?;
                    }
                    None => surface.line_segments(segments, *style)?,
                },
                RenderCommand::Polyline { points, style } => surface.polyline(points, *style)?,
                RenderCommand::Points { points, style } => surface.points(points, *style)?,
                RenderCommand::Rect { rect, style } => surface.rect(*rect, *style)?,
                RenderCommand::Text {
                    position,
                    text,
                    style,
                } => surface.text(*position, text, style)?,
            }
        }
        Ok(())
    }
}

/// Text size estimation for layout.
pub trait TextMeasurer {
    /// Width and height of a single line of text at `size` pixels.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Measures text with a fixed average glyph width.
#[derive(Debug, Clone, Copy)]
pub struct EstimatedTextMeasurer {
    /// Average glyph width relative to the font size.
    pub char_width_ratio: f32,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let chars = text.chars().count() as f32;
        (chars * size * self.char_width_ratio, size * 1.2)
    }
}
