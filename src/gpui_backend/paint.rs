use std::convert::Infallible;

use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, ShapedLine, TextRun, Window,
    font, point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{
    Color, LineSegment, LineStyle, MarkerStyle, RectStyle, Surface, TextMeasurer, TextStyle,
};

const UI_FONT: &str = ".SystemUIFont";

/// Paints replayed render commands into a GPUI window.
pub(crate) struct GpuiSurface<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
}

impl<'a> GpuiSurface<'a> {
    pub(crate) fn new(window: &'a mut Window, cx: &'a mut App) -> Self {
        Self { window, cx }
    }
}

impl Surface for GpuiSurface<'_> {
    type Error = Infallible;

    fn line_segments(
        &mut self,
        segments: &[LineSegment],
        style: LineStyle,
    ) -> Result<(), Self::Error> {
        if segments.is_empty() {
            return Ok(());
        }
        let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
        for segment in segments {
            builder.move_to(to_point(segment.start));
            builder.line_to(to_point(segment.end));
        }
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(style.color));
        }
        Ok(())
    }

    fn polyline(&mut self, points: &[ScreenPoint], style: LineStyle) -> Result<(), Self::Error> {
        let [first, rest @ ..] = points else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }
        let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
        builder.move_to(to_point(*first));
        for pt in rest {
            builder.line_to(to_point(*pt));
        }
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(style.color));
        }
        Ok(())
    }

    fn points(&mut self, points: &[ScreenPoint], style: MarkerStyle) -> Result<(), Self::Error> {
        let radius = style.size.max(1.0) * 0.5;
        let color = to_rgba(style.color);
        for pt in points {
            let bounds = Bounds::from_corners(
                point(px(pt.x - radius), px(pt.y - radius)),
                point(px(pt.x + radius), px(pt.y + radius)),
            );
            self.window.paint_quad(quad(
                bounds,
                Corners::all(px(radius)),
                color,
                Edges::all(px(0.0)),
                color,
                BorderStyle::default(),
            ));
        }
        Ok(())
    }

    fn rect(&mut self, rect: ScreenRect, style: RectStyle) -> Result<(), Self::Error> {
        self.window.paint_quad(quad(
            to_bounds(rect),
            Corners::all(px(0.0)),
            to_rgba(style.fill),
            Edges::all(px(style.stroke_width)),
            to_rgba(style.stroke),
            BorderStyle::default(),
        ));
        Ok(())
    }

    fn text(
        &mut self,
        position: ScreenPoint,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        if text.is_empty() {
            return Ok(());
        }
        let shaped = shape(self.window, text, style.size, to_hsla(style.color));
        let line_height = shaped.ascent + shaped.descent;
        if let Err(err) = shaped.paint(to_point(position), line_height, self.window, self.cx) {
            tracing::warn!(%err, text, "failed to paint label");
        }
        Ok(())
    }
}

/// Measures text with the window's text system.
pub(crate) struct GpuiTextMeasurer<'a> {
    window: &'a Window,
}

impl<'a> GpuiTextMeasurer<'a> {
    pub(crate) fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl TextMeasurer for GpuiTextMeasurer<'_> {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let shaped = shape(self.window, text, size, gpui::black());
        let width = f32::from(shaped.width);
        let height = f32::from(shaped.ascent + shaped.descent);
        (width, height.max(size * 1.2))
    }
}

fn shape(window: &Window, text: &str, size: f32, color: gpui::Hsla) -> ShapedLine {
    let run = TextRun {
        len: text.len(),
        font: font(UI_FONT),
        color,
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    window
        .text_system()
        .shape_line(text.to_string().into(), px(size), &[run], None)
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_point(pt: ScreenPoint) -> gpui::Point<Pixels> {
    point(px(pt.x), px(pt.y))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(to_point(rect.min), to_point(rect.max))
}
