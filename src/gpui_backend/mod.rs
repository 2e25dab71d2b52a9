//! GPUI integration for gpui-fnplot.
//!
//! This module provides a GPUI view that renders a
//! [`FunctionPlot`](crate::plot::FunctionPlot) under a toolbar of parameter
//! controls, and exports the current plot to PNG.

mod config;
mod paint;
mod toolbar;
mod view;

pub use config::PlotViewConfig;
pub use toolbar::ToolbarAction;
pub use view::FunctionPlotView;
