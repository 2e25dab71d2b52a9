//! fnplot - interactive plot of y = tan(0.5x)/x³ + 7.5.

use gpui::{
    AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use tracing_subscriber::EnvFilter;

use gpui_fnplot::{EXPRESSION, FunctionPlot, FunctionPlotView, PlotViewConfig};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(expression = EXPRESSION, "starting fnplot");

    Application::new().run(|cx| {
        let options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some(EXPRESSION.into()),
                ..Default::default()
            }),
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(900.0), px(680.0)),
                cx,
            ))),
            ..Default::default()
        };

        let opened = cx.open_window(options, |_window, cx| {
            let view = FunctionPlotView::with_config(FunctionPlot::new(), PlotViewConfig::default());
            cx.new(|_| view)
        });
        if let Err(err) = opened {
            tracing::error!(%err, "failed to open window");
            cx.quit();
        }
    });
}
