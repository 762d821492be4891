//! ASCII/Unicode plotting for terminal output and text reports.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - fitted curve: `-` line
//! - input data points: `o`
//! - period queries (T -> V): `P`
//! - speed queries (V -> T): `S`
//!
//! The x axis is the return period, either linear or log10 depending on the
//! plot scale.

use crate::domain::{DataPoint, GumbelParameters, PlotScale, QueriedPoint, QueryKind};
use crate::models::{DEFAULT_T_MAX, DEFAULT_T_MIN, sample_curve};

/// Return-period range shown for a linear axis when the data is small.
const LINEAR_T_MAX_FLOOR: f64 = 100.0;

/// Render the fitted curve with input points and query markers.
pub fn render_ascii_plot(
    params: &GumbelParameters,
    points: &[DataPoint],
    queried: &[QueriedPoint],
    scale: PlotScale,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (t_min, t_max) = t_range(points, queried, scale);
    let curve = sample_curve(params, t_min, t_max, width * 2, scale).unwrap_or_default();

    let (v_min, v_max) = v_range(points, queried, &curve).unwrap_or((0.0, 50.0));
    let (v_min, v_max) = pad_range(v_min, v_max, 0.05);

    let axis = Axis { t_min, t_max, scale };
    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    draw_curve(&mut grid, &curve, &axis, v_min, v_max);

    for p in points {
        let x = axis.map(p.return_period, width);
        let y = map_y(p.wind_speed, v_min, v_max, height);
        grid[y][x] = 'o';
    }
    for q in queried {
        let x = axis.map(q.return_period, width);
        let y = map_y(q.wind_speed, v_min, v_max, height);
        grid[y][x] = match q.kind {
            QueryKind::FromPeriod => 'P',
            QueryKind::FromSpeed => 'S',
        };
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: T=[{t_min:.2}, {t_max:.0}] years ({}) | V=[{v_min:.2}, {v_max:.2}] m/s\n",
        scale.display_name()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Return-period range for plotting: starts at the default minimum and
/// extends past every input and query.
pub fn t_range(points: &[DataPoint], queried: &[QueriedPoint], scale: PlotScale) -> (f64, f64) {
    let data_max = points
        .iter()
        .map(|p| p.return_period)
        .chain(queried.iter().map(|q| q.return_period))
        .filter(|t| t.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);

    let t_max = match scale {
        PlotScale::Log => DEFAULT_T_MAX.max(data_max * 1.5),
        PlotScale::Linear => LINEAR_T_MAX_FLOOR.max(data_max * 1.2),
    };
    (DEFAULT_T_MIN, t_max)
}

struct Axis {
    t_min: f64,
    t_max: f64,
    scale: PlotScale,
}

impl Axis {
    fn map(&self, t: f64, width: usize) -> usize {
        match self.scale {
            PlotScale::Linear => map_x(t, self.t_min, self.t_max, width),
            PlotScale::Log => map_x(t.max(self.t_min).log10(), self.t_min.log10(), self.t_max.log10(), width),
        }
    }
}

fn v_range(points: &[DataPoint], queried: &[QueriedPoint], curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;

    let values = points
        .iter()
        .map(|p| p.wind_speed)
        .chain(queried.iter().map(|q| q.wind_speed))
        .chain(curve.iter().map(|&(_, v)| v));
    for v in values.filter(|v| v.is_finite()) {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }

    if min_v.is_finite() && max_v.is_finite() && max_v > min_v {
        Some((min_v, max_v))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, v_min: f64, v_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((v - v_min) / (v_max - v_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], axis: &Axis, v_min: f64, v_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, v) in curve {
        let x = axis.map(t, width);
        let yy = map_y(v, v_min, v_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, '-');
        } else {
            grid[yy][x] = '-';
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: GumbelParameters = GumbelParameters { mu: 20.0, scale: 4.0 };

    fn body(plot: &str) -> Vec<&str> {
        plot.lines().skip(1).collect()
    }

    #[test]
    fn plot_has_requested_dimensions() {
        let txt = render_ascii_plot(&PARAMS, &[], &[], PlotScale::Log, 40, 12);
        let rows = body(&txt);
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.chars().count() == 40));
        assert!(txt.starts_with("Plot: T=[1.01, 10000] years (logarithmic)"), "{txt}");
    }

    #[test]
    fn curve_rises_left_to_right() {
        let txt = render_ascii_plot(&PARAMS, &[], &[], PlotScale::Log, 30, 10);
        let rows = body(&txt);
        // Leftmost column: curve at the bottom; rightmost column: curve at the top.
        let first_col_row = rows.iter().position(|r| r.starts_with('-')).unwrap();
        let last_col_row = rows.iter().position(|r| r.ends_with('-')).unwrap();
        assert!(last_col_row < first_col_row);
    }

    #[test]
    fn markers_for_points_and_queries() {
        let points = [DataPoint::new(29.0, 10.0), DataPoint::new(36.0, 50.0)];
        let queried = [
            QueriedPoint::from_period(100.0, 38.4),
            QueriedPoint::from_speed(45.0, 520.0),
        ];
        let txt = render_ascii_plot(&PARAMS, &points, &queried, PlotScale::Linear, 60, 20);
        let grid: String = body(&txt).concat();
        assert_eq!(grid.matches('o').count(), 2);
        assert_eq!(grid.matches('P').count(), 1);
        assert_eq!(grid.matches('S').count(), 1);
        assert!(txt.contains("(linear)"));
    }

    #[test]
    fn t_range_extends_past_data() {
        let queried = [QueriedPoint::from_speed(80.0, 50_000.0)];
        let (lo, hi) = t_range(&[], &queried, PlotScale::Log);
        assert_eq!(lo, DEFAULT_T_MIN);
        assert!(hi >= 75_000.0);
        let (_, hi) = t_range(&[], &[], PlotScale::Linear);
        assert_eq!(hi, LINEAR_T_MAX_FLOOR);
    }
}
