//! Ratatui-based terminal UI.
//!
//! One open project: a table of input points that can be edited, the fitted
//! curve on a Plotters chart, and the list of answered queries. Core errors
//! (bad input, no fit yet, out-of-domain query) land in the status line; the
//! UI only exits on `q` or a terminal failure.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tracing::{info, warn};

use crate::cli::TuiArgs;
use crate::domain::{PlotScale, QueryKind};
use crate::engine::Project;
use crate::error::AppError;
use crate::io::{load_project, parse_point_arg, save_project};
use crate::models::sample_curve;
use crate::report::{ReportOptions, format_query_line, format_report};

mod plotters_chart;

use plotters_chart::GumbelPlottersChart;

const DEFAULT_PROJECT_PATH: &str = "project.gblproj";
const DEFAULT_REPORT_PATH: &str = "gumbel_report.md";
const CURVE_SAMPLES: usize = 200;

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    // Load before taking over the terminal so load errors print normally.
    let mut app = App::from_args(&args)?;

    let _guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// What the footer prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    AddPoint,
    EditPoint(usize),
    QueryPeriod,
    QuerySpeed,
    CurvePoint,
    SavePath,
    ReportPath,
}

impl Prompt {
    fn label(self) -> &'static str {
        match self {
            Prompt::AddPoint => "New point T:V",
            Prompt::EditPoint(_) => "Edit point T:V",
            Prompt::QueryPeriod => "Return period T (years)",
            Prompt::QuerySpeed => "Wind speed V (m/s)",
            Prompt::CurvePoint => "Look up curve at T (years)",
            Prompt::SavePath => "Save project to",
            Prompt::ReportPath => "Write report to",
        }
    }
}

#[derive(Debug, Clone)]
struct Input {
    prompt: Prompt,
    buffer: String,
}

struct App {
    project: Project,
    project_path: Option<PathBuf>,
    selected: usize,
    input: Option<Input>,
    status: String,
    status_is_error: bool,
    /// Points changed after the active fit was computed.
    stale_fit: bool,
}

impl App {
    fn new(project: Project) -> Self {
        Self {
            project,
            project_path: None,
            selected: 0,
            input: None,
            status: "Add points with 'a', then fit with 'f'.".to_string(),
            status_is_error: false,
            stale_fit: false,
        }
    }

    fn from_args(args: &TuiArgs) -> Result<Self, AppError> {
        if let Some(path) = &args.project {
            let project = load_project(path, false)?;
            let mut app = Self::new(project);
            app.project_path = Some(path.clone());
            app.info(format!("Opened {}", path.display()));
            return Ok(app);
        }

        let points = crate::app::pipeline::collect_points(args.file.as_deref(), &[])?;
        let mut app = Self::new(Project::from_points(points));
        if app.project.points().len() >= 2 {
            app.fit();
        }
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100)).map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.input.is_some() {
            self.handle_input_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.project.points().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('a') => self.open_prompt(Prompt::AddPoint, String::new()),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(p) = self.project.points().get(self.selected) {
                    let prefill = format!("{}:{}", p.return_period, p.wind_speed);
                    self.open_prompt(Prompt::EditPoint(self.selected), prefill);
                } else {
                    self.error("No point selected.");
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('f') => self.fit(),
            KeyCode::Char('p') => self.open_prompt(Prompt::QueryPeriod, String::new()),
            KeyCode::Char('v') => self.open_prompt(Prompt::QuerySpeed, String::new()),
            KeyCode::Char('g') => self.open_prompt(Prompt::CurvePoint, String::new()),
            KeyCode::Char('l') => {
                let scale = self.project.plot_scale().toggled();
                self.project.set_plot_scale(scale);
                self.info(format!("Return period axis: {}", scale.display_name()));
            }
            KeyCode::Char('c') => {
                self.project.clear_queries();
                self.info("Cleared queried values.");
            }
            KeyCode::Char('s') => {
                let prefill = self
                    .project_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| DEFAULT_PROJECT_PATH.to_string());
                self.open_prompt(Prompt::SavePath, prefill);
            }
            KeyCode::Char('r') => self.open_prompt(Prompt::ReportPath, DEFAULT_REPORT_PATH.to_string()),
            _ => {}
        }

        false
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                self.input = None;
                self.info("Canceled.");
            }
            KeyCode::Enter => {
                if let Some(input) = self.input.take() {
                    self.submit(input.prompt, input.buffer.trim());
                }
            }
            KeyCode::Backspace => {
                input.buffer.pop();
            }
            KeyCode::Char(c) => input.buffer.push(c),
            _ => {}
        }
    }

    fn open_prompt(&mut self, prompt: Prompt, prefill: String) {
        self.input = Some(Input {
            prompt,
            buffer: prefill,
        });
    }

    fn submit(&mut self, prompt: Prompt, text: &str) {
        match prompt {
            Prompt::AddPoint => match parse_point_arg(text) {
                Ok(point) => {
                    self.project.add_point(point);
                    self.selected = self.project.points().len() - 1;
                    self.mark_points_changed();
                    self.info(format!("Added T={} years, V={} m/s.", point.return_period, point.wind_speed));
                }
                Err(msg) => self.error(msg),
            },
            Prompt::EditPoint(index) => match parse_point_arg(text) {
                Ok(point) => {
                    if self.project.update_point(index, point).is_some() {
                        self.mark_points_changed();
                        self.info(format!("Updated point {}.", index + 1));
                    } else {
                        self.error(format!("Point {} no longer exists.", index + 1));
                    }
                }
                Err(msg) => self.error(msg),
            },
            Prompt::QueryPeriod => {
                let result = parse_value(text, "return period").and_then(|t| {
                    self.project
                        .query_by_period(t)
                        .map_err(|e| e.to_string())
                });
                self.report_query(result);
            }
            Prompt::QuerySpeed => {
                let result = parse_value(text, "wind speed").and_then(|v| {
                    self.project
                        .query_by_speed(v)
                        .map_err(|e| e.to_string())
                });
                self.report_query(result);
            }
            Prompt::CurvePoint => {
                let result = parse_value(text, "return period").and_then(|t| {
                    self.project
                        .engine()
                        .curve_point_at(t)
                        .map_err(|e| e.to_string())
                });
                match result {
                    Ok((v, t)) => self.info(format!("Curve at T = {t:.1} years: V = {v:.2} m/s (not recorded)")),
                    Err(msg) => self.error(msg),
                }
            }
            Prompt::SavePath => self.save(text),
            Prompt::ReportPath => self.write_report(text),
        }
    }

    fn report_query(&mut self, result: Result<crate::domain::QueriedPoint, String>) {
        match result {
            Ok(q) => {
                info!(kind = q.kind.as_str(), t = q.return_period, v = q.wind_speed, "query answered");
                self.info(format_query_line(&q));
            }
            Err(msg) => self.error(msg),
        }
    }

    fn fit(&mut self) {
        match self.project.fit() {
            Ok(params) => {
                self.stale_fit = false;
                self.info(format!(
                    "Fitted: mu = {:.3} m/s, 1/alpha = {:.3} m/s (queries cleared).",
                    params.mu, params.scale
                ));
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn remove_selected(&mut self) {
        match self.project.remove_point(self.selected) {
            Some(p) => {
                let remaining = self.project.points().len();
                self.selected = self.selected.min(remaining.saturating_sub(1));
                self.mark_points_changed();
                self.info(format!("Removed T={} years, V={} m/s.", p.return_period, p.wind_speed));
            }
            None => self.error("No point selected."),
        }
    }

    fn mark_points_changed(&mut self) {
        if self.project.params().is_some() {
            self.stale_fit = true;
        }
    }

    fn save(&mut self, text: &str) {
        if text.is_empty() {
            self.error("Save path is empty.");
            return;
        }
        let path = PathBuf::from(text);
        match save_project(&path, &self.project) {
            Ok(()) => {
                self.info(format!("Saved {}", path.display()));
                self.project_path = Some(path);
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn write_report(&mut self, text: &str) {
        if text.is_empty() {
            self.error("Report path is empty.");
            return;
        }
        let report = match format_report(&self.project, &ReportOptions::default(), Utc::now()) {
            Ok(r) => r,
            Err(err) => {
                self.error(err.to_string());
                return;
            }
        };
        match std::fs::write(text, report) {
            Ok(()) => self.info(format!("Wrote report {text}")),
            Err(e) => self.error(format!("Failed to write report '{text}': {e}")),
        }
    }

    fn info(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
        self.status_is_error = false;
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
        self.status_is_error = true;
        warn!(status = %self.status, "tui error");
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let doc = self
            .project_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unsaved project".to_string());

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("gw", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" - Gumbel extreme wind speed | {doc}")),
        ]));

        let fit_line = match self.project.params() {
            Some(p) => {
                let mut s = format!(
                    "mu = {:.3} m/s | 1/alpha = {:.3} m/s | alpha = {:.5} | n = {} | axis: {}",
                    p.mu,
                    p.scale,
                    p.alpha(),
                    self.project.points().len(),
                    self.project.plot_scale().display_name()
                );
                if self.stale_fit {
                    s.push_str(" | points changed since fit (press f)");
                }
                s
            }
            None => format!(
                "not fitted (press f) | n = {} | axis: {}",
                self.project.points().len(),
                self.project.plot_scale().display_name()
            ),
        };
        let fit_color = if self.stale_fit { Color::Yellow } else { Color::Gray };
        lines.push(Line::from(Span::styled(fit_line, Style::default().fg(fit_color))));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(0)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(cols[0]);

        self.draw_points(frame, left[0]);
        self.draw_queries(frame, left[1]);
        self.draw_chart(frame, cols[1]);
    }

    fn draw_points(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::with_capacity(self.project.points().len() + 1);
        items.push(ListItem::new(Span::styled(
            format!("{:>3} {:>12} {:>12}", "#", "T (years)", "V (m/s)"),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (i, p) in self.project.points().iter().enumerate() {
            items.push(ListItem::new(format!(
                "{:>3} {:>12.2} {:>12.2}",
                i + 1,
                p.return_period,
                p.wind_speed
            )));
        }

        let list = List::new(items)
            .block(Block::default().title("Input points").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        if !self.project.points().is_empty() {
            // Row 0 is the header.
            state.select(Some(self.selected + 1));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_queries(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let queried = self.project.queried_points();
        let items: Vec<ListItem> = if queried.is_empty() {
            vec![ListItem::new(Span::styled(
                "No queried values.",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            queried
                .iter()
                .map(|q| {
                    let (marker, color) = query_style(q.kind);
                    let text = match q.kind {
                        QueryKind::FromPeriod => format!("T={:.1}y -> V={:.2} m/s", q.return_period, q.wind_speed),
                        QueryKind::FromSpeed => format!("V={:.1} m/s -> T={:.1}y", q.wind_speed, q.return_period),
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{marker} "), Style::default().fg(color)),
                        Span::raw(text),
                    ]))
                })
                .collect()
        };

        let list = List::new(items).block(Block::default().title("Queried values").borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Wind speed vs. return period")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if self.project.params().is_none() && self.project.points().is_empty() {
            let msg = Paragraph::new("No data yet.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let data = chart_data(&self.project);
        let fmt_x: fn(f64) -> String = match self.project.plot_scale() {
            PlotScale::Log => fmt_log_years,
            PlotScale::Linear => fmt_years,
        };

        let (chart_rect, insets) = chart_layout(inner);
        let widget = GumbelPlottersChart {
            curve: &data.curve,
            points: &data.points,
            period_queries: &data.period_queries,
            speed_queries: &data.speed_queries,
            x_bounds: data.x_bounds,
            y_bounds: data.y_bounds,
            x_label: "return period (years)",
            y_label: "wind speed (m/s)",
            fmt_x,
            fmt_y: fmt_speed,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, &data, fmt_x);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = match &self.input {
            Some(input) => Line::from(vec![
                Span::styled(
                    format!("{}: ", input.prompt.label()),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{}_", input.buffer)),
                Span::styled("  (Enter apply, Esc cancel)", Style::default().fg(Color::Gray)),
            ]),
            None => {
                let help = "a add e edit d del f fit p T->V v V->T g curve l scale c clear s save r report q quit";
                let status_color = if self.status_is_error { Color::Red } else { Color::Yellow };
                Line::from(vec![
                    Span::styled(help, Style::default().fg(Color::Gray)),
                    Span::raw(" | "),
                    Span::styled(&self.status, Style::default().fg(status_color)),
                ])
            }
        };
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn parse_value(text: &str, what: &str) -> Result<f64, String> {
    let v = text
        .parse::<f64>()
        .map_err(|_| format!("Invalid {what} '{text}' (expected a number)."))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("The {what} must be finite."))
    }
}

fn query_style(kind: QueryKind) -> (char, Color) {
    match kind {
        QueryKind::FromPeriod => ('P', Color::Red),
        QueryKind::FromSpeed => ('S', Color::Green),
    }
}

/// Chart series already mapped to axis space (`log10(T)` on a log axis).
struct ChartData {
    curve: Vec<(f64, f64)>,
    points: Vec<(f64, f64)>,
    period_queries: Vec<(f64, f64)>,
    speed_queries: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

fn chart_data(project: &Project) -> ChartData {
    let scale = project.plot_scale();
    let to_x = |t: f64| match scale {
        PlotScale::Log => t.log10(),
        PlotScale::Linear => t,
    };

    let (t_min, t_max) = crate::plot::t_range(project.points(), project.queried_points(), scale);

    let curve: Vec<(f64, f64)> = project
        .params()
        .and_then(|p| sample_curve(p, t_min, t_max, CURVE_SAMPLES, scale).ok())
        .unwrap_or_default()
        .into_iter()
        .map(|(t, v)| (to_x(t), v))
        .collect();

    let points: Vec<(f64, f64)> = project
        .points()
        .iter()
        .map(|p| (to_x(p.return_period), p.wind_speed))
        .collect();

    let mut period_queries = Vec::new();
    let mut speed_queries = Vec::new();
    for q in project.queried_points() {
        let xy = (to_x(q.return_period), q.wind_speed);
        match q.kind {
            QueryKind::FromPeriod => period_queries.push(xy),
            QueryKind::FromSpeed => speed_queries.push(xy),
        }
    }

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in curve.iter().chain(&points).chain(&period_queries).chain(&speed_queries) {
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        let center = if y_min.is_finite() { y_min } else { 25.0 };
        y_min = center - 5.0;
        y_max = center + 5.0;
    }
    let pad = ((y_max - y_min) * 0.05).max(1e-9);

    ChartData {
        curve,
        points,
        period_queries,
        speed_queries,
        x_bounds: [to_x(t_min), to_x(t_max)],
        y_bounds: [y_min - pad, y_max + pad],
    }
}

fn fmt_years(t: f64) -> String {
    if t < 10.0 { format!("{t:.1}") } else { format!("{t:.0}") }
}

fn fmt_log_years(x: f64) -> String {
    fmt_years(10f64.powf(x))
}

fn fmt_speed(v: f64) -> String {
    format!("{v:.1}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10 || inner.height <= insets.top + insets.bottom + 5 {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    data: &ChartData,
    fmt_x: fn(f64) -> String,
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);
    let [x0, x1] = data.x_bounds;
    let [y0, y1] = data.y_bounds;

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let label = fmt_x(x0 + u * (x1 - x0));
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        let width = label.len() as u16;
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let label = fmt_speed(y0 + u * (y1 - y0));
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        let width = label.len() as u16;
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("return period (years)")
        .alignment(Alignment::Center)
        .style(style);
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("V (m/s)").style(style.add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
