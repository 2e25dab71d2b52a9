//! PNG export through an off-screen `plotters` bitmap.
//!
//! The exported image is produced by replaying the same [`RenderList`] that
//! the on-screen view paints, so both match pixel-for-pixel in layout.
//!
//! [`RenderList`]: crate::render::RenderList

use std::path::Path;

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::style::{IntoFont, RGBAColor, ShapeStyle};

use crate::error::ExportError;
use crate::geom::{MIN_PLOT_SIZE, Margins, ScreenPoint, ScreenRect};
use crate::plot::FunctionPlot;
use crate::render::{
    Color, EstimatedTextMeasurer, LineSegment, LineStyle, MarkerStyle, RectStyle, Surface,
    TextStyle,
};
use crate::renderer::FrameStatus;

/// Font family used for exported labels.
pub const EXPORT_FONT_FAMILY: &str = "sans-serif";

/// Render `plot` into a `width`×`height` PNG at `path`.
///
/// The plot rectangle is the full image inset by `margins`, matching the
/// on-screen panel layout.
pub fn export_png(
    plot: &mut FunctionPlot,
    path: impl AsRef<Path>,
    (width, height): (u32, u32),
    margins: Margins,
) -> Result<FrameStatus, ExportError> {
    let path = path.as_ref();
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyImage { width, height });
    }

    let full = ScreenRect::from_origin_size(
        ScreenPoint::new(0.0, 0.0),
        width as f32,
        height as f32,
    );
    let frame = plot.frame(
        full.inset(margins, MIN_PLOT_SIZE),
        &EstimatedTextMeasurer::default(),
    );

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&to_rgba(plot.theme().background))
        .map_err(|err| ExportError::draw(path, err))?;
    let mut surface = PlottersSurface::new(&root);
    frame
        .render
        .replay(&mut surface)
        .map_err(|err| ExportError::draw(path, err))?;
    root.present().map_err(|err| {
        tracing::error!(path = %path.display(), %err, "failed to write PNG");
        ExportError::write(path, err)
    })?;

    tracing::info!(
        path = %path.display(),
        width,
        height,
        status = ?frame.status,
        skipped_labels = surface.skipped_labels(),
        "exported plot"
    );
    Ok(frame.status)
}

/// A [`Surface`] drawing into a `plotters` drawing area.
pub struct PlottersSurface<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
    skipped_labels: usize,
}

impl<'a, DB: DrawingBackend> PlottersSurface<'a, DB> {
    /// Wrap a drawing area.
    pub fn new(area: &'a DrawingArea<DB, Shift>) -> Self {
        Self {
            area,
            skipped_labels: 0,
        }
    }

    /// Labels that could not be rasterized.
    pub fn skipped_labels(&self) -> usize {
        self.skipped_labels
    }
}

impl<DB: DrawingBackend> Surface for PlottersSurface<'_, DB> {
    type Error = DrawingAreaErrorKind<DB::ErrorType>;

    fn line_segments(
        &mut self,
        segments: &[LineSegment],
        style: LineStyle,
    ) -> Result<(), Self::Error> {
        let shape = stroke(style.color, style.width);
        for segment in segments {
            self.area.draw(&PathElement::new(
                vec![pixel(segment.start), pixel(segment.end)],
                shape,
            ))?;
        }
        Ok(())
    }

    fn polyline(&mut self, points: &[ScreenPoint], style: LineStyle) -> Result<(), Self::Error> {
        if points.len() < 2 {
            return Ok(());
        }
        let path: Vec<(i32, i32)> = points.iter().copied().map(pixel).collect();
        self.area
            .draw(&PathElement::new(path, stroke(style.color, style.width)))
    }

    fn points(&mut self, points: &[ScreenPoint], style: MarkerStyle) -> Result<(), Self::Error> {
        let radius = (style.size * 0.5).round().max(1.0) as i32;
        let fill = ShapeStyle {
            color: to_rgba(style.color),
            filled: true,
            stroke_width: 1,
        };
        for point in points {
            self.area.draw(&Circle::new(pixel(*point), radius, fill))?;
        }
        Ok(())
    }

    fn rect(&mut self, rect: ScreenRect, style: RectStyle) -> Result<(), Self::Error> {
        let corners = [pixel(rect.min), pixel(rect.max)];
        if style.fill.a > 0.0 {
            let fill = ShapeStyle {
                color: to_rgba(style.fill),
                filled: true,
                stroke_width: 1,
            };
            self.area.draw(&Rectangle::new(corners, fill))?;
        }
        self.area.draw(&Rectangle::new(
            corners,
            stroke(style.stroke, style.stroke_width),
        ))
    }

    fn text(
        &mut self,
        position: ScreenPoint,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let font = (EXPORT_FONT_FAMILY, f64::from(style.size))
            .into_font()
            .color(&to_rgba(style.color));
        // Missing system fonts only cost the label, not the export.
        if let Err(err) = self
            .area
            .draw(&Text::new(text.to_string(), pixel(position), font))
        {
            tracing::warn!(%err, text, "skipping label");
            self.skipped_labels += 1;
        }
        Ok(())
    }
}

fn stroke(color: Color, width: f32) -> ShapeStyle {
    ShapeStyle {
        color: to_rgba(color),
        filled: false,
        stroke_width: width.round().max(1.0) as u32,
    }
}

fn pixel(point: ScreenPoint) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn to_rgba(color: Color) -> RGBAColor {
    let (r, g, b) = color.to_rgb8();
    RGBAColor(r, g, b, f64::from(color.a.clamp(0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PlotParams;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn writes_png_at_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let mut plot = FunctionPlot::new();
        let status = export_png(&mut plot, &path, (640, 480), Margins::default()).unwrap();
        assert_eq!(status, FrameStatus::Drawn);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        // IHDR width and height, big-endian.
        assert_eq!(&bytes[16..20], &640_u32.to_be_bytes());
        assert_eq!(&bytes[20..24], &480_u32.to_be_bytes());
    }

    #[test]
    fn invalid_input_still_exports_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.png");
        let mut plot = FunctionPlot::builder().domain(1.0, 0.5).build();
        let status = export_png(&mut plot, &path, (320, 240), Margins::default()).unwrap();
        assert!(matches!(status, FrameStatus::Invalid(_)));
        assert!(path.exists());
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.png");
        let mut plot = FunctionPlot::new();
        let err = export_png(&mut plot, &path, (320, 240), Margins::default()).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().contains("plot.png"));
        assert_eq!(plot.params(), PlotParams::default());
    }

    #[test]
    fn empty_image_is_rejected() {
        let mut plot = FunctionPlot::new();
        let err = export_png(&mut plot, "unused.png", (0, 240), Margins::default()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::EmptyImage {
                width: 0,
                height: 240
            }
        ));
    }

    #[test]
    fn surface_starts_with_no_skipped_labels() {
        let mut buffer = vec![0_u8; 16 * 16 * 3];
        let root = BitMapBackend::with_buffer(&mut buffer, (16, 16)).into_drawing_area();
        let mut surface = PlottersSurface::new(&root);
        surface
            .polyline(
                &[ScreenPoint::new(1.0, 1.0), ScreenPoint::new(14.0, 14.0)],
                LineStyle::solid(Color::BLACK, 1.0),
            )
            .unwrap();
        assert_eq!(surface.skipped_labels(), 0);
    }

    #[test]
    fn rgba_conversion() {
        let color = to_rgba(Color::from_rgb8(0, 128, 128));
        assert_eq!((color.0, color.1, color.2), (0, 128, 128));
        assert_eq!(color.3, 1.0);
    }
}
