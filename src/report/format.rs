//! Formatted terminal output and the full text report.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! The report mirrors the sections of a printed estimation report: parameters,
//! input data, queried values, the derivation, and a plot. It only reads the
//! project; nothing here feeds back into the fit.

use chrono::{DateTime, Utc};

use crate::domain::{FitQuality, GumbelParameters, PointResidual, QueriedPoint, QueryKind};
use crate::engine::Project;
use crate::error::GumbelError;
use crate::plot::render_ascii_plot;
use crate::report::{compute_residuals, fit_quality};

/// Plot size used inside reports.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub plot_width: usize,
    pub plot_height: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            plot_width: 72,
            plot_height: 20,
        }
    }
}

/// Short fit summary printed by `gw fit`.
pub fn format_fit_summary(params: &GumbelParameters, residuals: &[PointResidual], quality: &FitQuality) -> String {
    let mut out = String::new();
    out.push_str("=== gw - Gumbel Wind Speed Fit ===\n");
    out.push_str(&format!("Location (mu)   : {:.3} m/s\n", params.mu));
    out.push_str(&format!("Scale (1/alpha) : {:.3} m/s\n", params.scale));
    out.push_str(&format!(
        "Fit: n={} | SSE={:.4} | RMSE={:.4} m/s | R^2={:.4}\n",
        quality.n, quality.sse, quality.rmse, quality.r_squared
    ));
    out.push('\n');
    out.push_str(&format_input_table(residuals));
    out
}

/// Table of answered queries, or a one-line note when there are none.
pub fn format_queries(queried: &[QueriedPoint]) -> String {
    if queried.is_empty() {
        return "No queried values.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(format!("{:<4} {:<20} {:>16} {:>18}", "#", "query", "input", "calculated").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<4} {:-<20} {:-<16} {:-<18}", "", "", "", "").trim_end());
    out.push('\n');

    for (i, q) in queried.iter().enumerate() {
        let (label, input, calculated) = describe_query(q);
        out.push_str(format!("{:<4} {:<20} {:>16} {:>18}", i + 1, label, input, calculated).trim_end());
        out.push('\n');
    }
    out
}

/// One-line description of a single query result (for status lines/logs).
pub fn format_query_line(q: &QueriedPoint) -> String {
    match q.kind {
        QueryKind::FromPeriod => format!(
            "For T = {:.1} years, estimated wind speed = {:.2} m/s",
            q.return_period, q.wind_speed
        ),
        QueryKind::FromSpeed => format!(
            "For V = {:.1} m/s, estimated return period = {:.1} years",
            q.wind_speed, q.return_period
        ),
    }
}

fn describe_query(q: &QueriedPoint) -> (String, String, String) {
    match q.kind {
        QueryKind::FromPeriod => (
            format!("T={:.1}y -> V", q.input_value),
            format!("{:.1} years", q.input_value),
            format!("{:.2} m/s", q.derived_value),
        ),
        QueryKind::FromSpeed => (
            format!("V={:.1}m/s -> T", q.input_value),
            format!("{:.1} m/s", q.input_value),
            format!("{:.1} years", q.derived_value),
        ),
    }
}

fn format_input_table(residuals: &[PointResidual]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "T (years)", "V (m/s)", "y", "V_fit", "residual"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:->12} {:->10} {:->10} {:->10} {:->10}", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in residuals {
        out.push_str(
            format!(
                "{:>12.1} {:>10.2} {:>10.4} {:>10.2} {:>10.3}",
                r.point.return_period, r.point.wind_speed, r.reduced_variate, r.fitted_speed, r.residual
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

/// Full estimation report for a fitted project.
///
/// Fails with `NoModel` when the project has not been fitted.
pub fn format_report(project: &Project, opts: &ReportOptions, generated: DateTime<Utc>) -> Result<String, GumbelError> {
    let params = project.params().ok_or(GumbelError::NoModel)?;
    let residuals = compute_residuals(project.points(), params)?;
    let quality = fit_quality(&residuals);
    let queried = project.queried_points();

    let mut out = String::new();
    out.push_str("# Gumbel Wind Speed Estimation Report\n\n");
    out.push_str(&format!("Generated: {}\n\n", generated.format("%Y-%m-%d %H:%M:%S UTC")));

    out.push_str("## 1. Fitted Gumbel Parameters\n\n");
    out.push_str(&format!("- Location parameter (mu): {:.4} m/s\n", params.mu));
    out.push_str(&format!("- Scale parameter (1/alpha): {:.4} m/s\n", params.scale));
    out.push_str(&format!("- Dispersion (alpha): {:.6} s/m\n", params.alpha()));
    out.push_str(&format!(
        "- Fit quality: n={}, SSE={:.4}, RMSE={:.4} m/s, R^2={:.4}\n\n",
        quality.n, quality.sse, quality.rmse, quality.r_squared
    ));

    out.push_str("## 2. Input Data Points\n\n");
    if residuals.is_empty() {
        out.push_str("No valid input data provided for this report.\n\n");
    } else {
        out.push_str(&indent_block(&format_input_table(&residuals)));
        out.push('\n');
    }

    let mut section = 3;
    if !queried.is_empty() {
        out.push_str(&format!("## {section}. Specific Queried Values\n\n"));
        out.push_str(&indent_block(&format_queries(queried)));
        out.push('\n');
        section += 1;
    }

    out.push_str(&format!("## {section}. Theoretical Background and Derivation\n\n"));
    out.push_str(&derivation_text(params));
    out.push('\n');
    section += 1;

    out.push_str(&format!("## {section}. Plot: Wind Speed vs. Return Period\n\n"));
    let plot = render_ascii_plot(
        params,
        project.points(),
        queried,
        project.plot_scale(),
        opts.plot_width,
        opts.plot_height,
    );
    out.push_str(&indent_block(&plot));
    out.push_str("\n    legend: - fitted curve, o input data, P period query (T -> V), S speed query (V -> T)\n");

    Ok(out)
}

fn indent_block(text: &str) -> String {
    text.lines().map(|l| format!("    {l}\n")).collect()
}

fn derivation_text(params: &GumbelParameters) -> String {
    let mut out = String::new();
    out.push_str(
        "Annual maximum wind speeds are modelled with the Gumbel (Type I extreme value)\n\
         distribution, the limit of the Generalized Extreme Value family as its shape\n\
         parameter tends to zero. Its cumulative distribution function is\n\n\
         \x20   F(V) = exp(-exp(-(V - mu) / s)),    s = 1/alpha > 0\n\n\
         The return period T of a speed V_T is the mean recurrence interval of\n\
         exceeding it, T = 1 / (1 - F(V_T)), so F(V_T) = 1 - 1/T. Taking logarithms\n\
         twice gives the reduced variate\n\n\
         \x20   y_T = -ln(-ln(1 - 1/T))\n\n\
         and the linear relationship\n\n\
         \x20   V_T = mu + s * y_T\n\n\
         The parameters are estimated by ordinary least squares of the observed\n\
         speeds against y_T: the scale s is the slope and the location mu the\n\
         intercept of the fitted line. Inverting the same relationship gives the\n\
         return period of a speed, T = 1 / (1 - exp(-exp(-(V - mu) / s))).\n\n",
    );
    out.push_str(&format!(
        "With the current fit: V_T = {:.4} + {:.4} * y_T  (m/s).\n",
        params.mu, params.scale
    ));
    out.push_str(
        "Estimates outside the range of the input return periods are linear\n\
         extrapolations in y_T and become less reliable with distance from the data.\n",
    );
    out
}
