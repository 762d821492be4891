//! Plotters-powered return-period chart widget for Ratatui.
//!
//! Plotters output is rendered into the Ratatui buffer through
//! `plotters-ratatui-backend`, which gives proper axes and tick labels without
//! hand-placing them on a `Canvas`.
//!
//! The widget is scale-agnostic. For a logarithmic return-period axis the
//! caller passes `log10(T)` as x and a tick formatter that prints the period
//! back in years; for a linear axis x is `T` itself.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call, already mapped
/// into axis space, so `render()` only draws. The data prep lives in
/// `tui::chart_data` and is tested there without a terminal.
pub struct GumbelPlottersChart<'a> {
    /// Line series for the fitted curve (empty before a fit).
    pub curve: &'a [(f64, f64)],
    /// Scatter series for the input calibration points.
    pub points: &'a [(f64, f64)],
    /// Answers to "T -> V" queries.
    pub period_queries: &'a [(f64, f64)],
    /// Answers to "V -> T" queries.
    pub speed_queries: &'a [(f64, f64)],
    /// X bounds (years, or `log10` years on a log axis).
    pub x_bounds: [f64; 2],
    /// Y bounds (m/s).
    pub y_bounds: [f64; 2],
    /// Axis labels.
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Tick label formatting; `fmt_x` undoes the `log10` mapping on a log axis.
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for GumbelPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters fails to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        // An empty or inverted range cannot be drawn; leave the area blank.
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        // `widget_fn` hands us a Plotters drawing area backed by Ratatui's
        // `Canvas`; everything drawn on it lands in `buf`.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes and tick labels only; mesh lines are too noisy at cell resolution.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // High-contrast palette; query colors match `query_style` in the query list.
            let curve_color = RGBColor(0, 255, 255); // cyan
            let points_color = WHITE;
            let period_color = RGBColor(255, 0, 0); // red
            let speed_color = RGBColor(0, 255, 0); // green

            // 1) Fitted curve.
            chart.draw_series(LineSeries::new(self.curve.iter().copied(), &curve_color))?;

            // 2) Input points.
            chart.draw_series(self.points.iter().map(|&(x, y)| Pixel::new((x, y), points_color)))?;

            // 3) Query answers, drawn last so they sit on top of the curve.
            //
            // `Circle` radii come out huge through the ratatui backend (pixel
            // radius is taken as canvas units), so markers are single pixels.
            chart.draw_series(
                self.period_queries
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), period_color)),
            )?;
            chart.draw_series(
                self.speed_queries
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), speed_color)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
