use std::cell::Cell;
use std::rc::Rc;

use gpui::prelude::*;
use gpui::{MouseButton, MouseDownEvent, SharedString, Window, canvas, div};

use crate::geom::{MIN_PLOT_SIZE, ScreenPoint, ScreenRect};
use crate::plot::FunctionPlot;

use super::config::PlotViewConfig;
use super::paint::{GpuiSurface, GpuiTextMeasurer, to_hsla};
use super::toolbar::ToolbarAction;

/// A GPUI view that renders a [`FunctionPlot`] below a parameter toolbar.
///
/// Every toolbar click mutates the owned plot and requests a redraw; the
/// canvas resamples only when the sampling parameters changed.
pub struct FunctionPlotView {
    plot: FunctionPlot,
    config: PlotViewConfig,
    status: Option<String>,
    canvas_size: Rc<Cell<Option<(f32, f32)>>>,
}

impl FunctionPlotView {
    /// Create a new view for the given plot.
    ///
    /// Uses the default [`PlotViewConfig`].
    pub fn new(plot: FunctionPlot) -> Self {
        Self::with_config(plot, PlotViewConfig::default())
    }

    /// Create a new view with a custom configuration.
    pub fn with_config(plot: FunctionPlot, config: PlotViewConfig) -> Self {
        Self {
            plot,
            config,
            status: None,
            canvas_size: Rc::new(Cell::new(None)),
        }
    }

    /// Access the plot.
    pub fn plot(&self) -> &FunctionPlot {
        &self.plot
    }

    /// Access the plot mutably.
    pub fn plot_mut(&mut self) -> &mut FunctionPlot {
        &mut self.plot
    }

    fn on_action(&mut self, action: ToolbarAction, cx: &mut Context<Self>) {
        let status = action.apply(&mut self.plot, &self.config, self.canvas_size.get());
        if status.is_some() {
            self.status = status;
        }
        cx.notify();
    }

    fn toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.plot.theme();
        let border = to_hsla(theme.border);
        let mut row = div()
            .flex()
            .flex_row()
            .flex_wrap()
            .items_center()
            .gap_1()
            .p_1()
            .text_sm()
            .text_color(to_hsla(theme.text));
        for action in ToolbarAction::ALL {
            row = row.child(
                div()
                    .px_2()
                    .py_1()
                    .border_1()
                    .border_color(border)
                    .rounded_sm()
                    .cursor_pointer()
                    .child(SharedString::from(action.label(&self.plot)))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                            this.on_action(action, cx);
                        }),
                    ),
            );
        }
        if let Some(status) = &self.status {
            row = row.child(
                div()
                    .px_2()
                    .text_color(to_hsla(theme.message))
                    .child(SharedString::from(status.clone())),
            );
        }
        row
    }
}

impl Render for FunctionPlotView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let samples = self.plot.samples();
        let params = self.plot.params();
        let options = *self.plot.options();
        let renderer = self.plot.renderer().clone();
        let margins = self.config.margins;
        let canvas_size = Rc::clone(&self.canvas_size);
        let background = to_hsla(self.plot.theme().background);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(background)
            .child(self.toolbar(cx))
            .child(
                div().flex_grow().child(
                    canvas(
                        move |bounds, window, _| {
                            let width = f32::from(bounds.size.width);
                            let height = f32::from(bounds.size.height);
                            canvas_size.set(Some((width, height)));
                            let origin = ScreenPoint::new(
                                f32::from(bounds.origin.x),
                                f32::from(bounds.origin.y),
                            );
                            let rect = ScreenRect::from_origin_size(origin, width, height)
                                .inset(margins, MIN_PLOT_SIZE);
                            let measurer = GpuiTextMeasurer::new(window);
                            renderer.render(&samples, params, &options, rect, &measurer)
                        },
                        move |_, frame, window, cx| {
                            let mut surface = GpuiSurface::new(window, cx);
                            if let Err(never) = frame.render.replay(&mut surface) {
                                match never {}
                            }
                        },
                    )
                    .size_full(),
                ),
            )
    }
}
