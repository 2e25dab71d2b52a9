//! gpui-fnplot samples and plots `y = tan(0.5x) / x³ + 7.5`.
//!
//! Sampling, bounds derivation and frame recording are backend-agnostic; the
//! recorded [`RenderList`] is replayed onto a GPUI canvas (feature `gpui`) or
//! into a PNG through `plotters`.

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod export;
pub mod function;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod params;
pub mod plot;
pub mod render;
pub mod renderer;
pub mod sampling;
pub mod style;
pub mod transform;
pub mod view;

pub use axis::{AxisConfig, AxisFormatter, Tick};
pub use error::{ExportError, ParamError, Result};
pub use export::{PlottersSurface, export_png};
pub use function::{EXPRESSION, evaluate};
pub use geom::{Margins, Point, ScreenPoint, ScreenRect};
#[cfg(feature = "gpui")]
pub use gpui_backend::{FunctionPlotView, PlotViewConfig, ToolbarAction};
pub use params::{PlotParams, RenderMode, RenderOptions, YClamp};
pub use plot::{FunctionPlot, FunctionPlotBuilder};
pub use render::{
    Color, DashPattern, LineSegment, LineStyle, MarkerStyle, RectStyle, RenderCommand, RenderList,
    Surface, TextMeasurer, TextStyle,
};
pub use renderer::{FrameStatus, PlotFrame, PlotRenderer};
pub use sampling::{SampleProvider, SampleSet, sample};
pub use style::Theme;
pub use transform::Transform;
pub use view::{Range, Viewport};
