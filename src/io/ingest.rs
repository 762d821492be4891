//! CSV ingest of calibration pairs.
//!
//! Expected layout: a header row plus one `(return period, wind speed)` pair per
//! row. Column names are matched case-insensitively against a few aliases so
//! spreadsheets exported with slightly different headers still load.
//!
//! Rules:
//! - blank rows (both cells empty) are skipped
//! - a row with a non-numeric cell, `T <= 1` or `V <= 0` rejects the whole
//!   file with its line number; no partial data set is returned

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::DataPoint;
use crate::error::AppError;

const PERIOD_ALIASES: &[&str] = &["return_period", "return_period_years", "t", "years", "period"];
const SPEED_ALIASES: &[&str] = &["wind_speed", "wind_speed_ms", "v", "speed"];

/// Points loaded from a CSV file plus a little bookkeeping for logs.
#[derive(Debug, Clone)]
pub struct IngestedPoints {
    pub points: Vec<DataPoint>,
    pub rows_read: usize,
    pub blank_rows: usize,
}

/// Load calibration pairs from a CSV file.
pub fn load_points_csv(path: &Path) -> Result<IngestedPoints, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_points_csv(file)
}

/// Load calibration pairs from any CSV reader.
pub fn read_points_csv<R: Read>(input: R) -> Result<IngestedPoints, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let t_col = find_column(&header_map, PERIOD_ALIASES).ok_or_else(|| {
        AppError::new(2, format!("CSV is missing a return period column (one of: {}).", PERIOD_ALIASES.join(", ")))
    })?;
    let v_col = find_column(&header_map, SPEED_ALIASES).ok_or_else(|| {
        AppError::new(2, format!("CSV is missing a wind speed column (one of: {}).", SPEED_ALIASES.join(", ")))
    })?;

    let mut points = Vec::new();
    let mut rows_read = 0usize;
    let mut blank_rows = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header and lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;
        let t_raw = record.get(t_col).unwrap_or("");
        let v_raw = record.get(v_col).unwrap_or("");

        if t_raw.is_empty() && v_raw.is_empty() {
            blank_rows += 1;
            continue;
        }

        let point = parse_pair(t_raw, v_raw).map_err(|msg| AppError::new(2, format!("Line {line}: {msg}")))?;
        points.push(point);
    }

    Ok(IngestedPoints {
        points,
        rows_read,
        blank_rows,
    })
}

/// Parse one `(T, V)` pair from raw text and check the physical ranges.
///
/// Shared with the CLI `--point T:V` flag and the TUI editor.
pub fn parse_pair(t_raw: &str, v_raw: &str) -> Result<DataPoint, String> {
    let t = parse_number(t_raw, "return period")?;
    let v = parse_number(v_raw, "wind speed")?;
    let point = DataPoint::new(v, t);
    match point.validation_error() {
        Some(reason) => Err(format!("{reason} (T={t}, V={v}).")),
        None => Ok(point),
    }
}

/// Parse a `T:V` (or `T,V`) argument.
pub fn parse_point_arg(s: &str) -> Result<DataPoint, String> {
    let (t_raw, v_raw) = s
        .split_once(':')
        .or_else(|| s.split_once(','))
        .ok_or_else(|| format!("Expected RETURN_PERIOD:WIND_SPEED, got '{s}'."))?;
    parse_pair(t_raw.trim(), v_raw.trim())
}

fn parse_number(raw: &str, what: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("missing {what}."));
    }
    let v = raw
        .parse::<f64>()
        .map_err(|_| format!("invalid {what} '{raw}' (expected a number)."))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("{what} must be finite, got '{raw}'."))
    }
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_ascii_lowercase().replace([' ', '-'], "_"), i))
        .collect()
}

fn find_column(header_map: &HashMap<String, usize>, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|a| header_map.get(*a).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_points_and_skips_blank_rows() {
        let csv = "Return Period,Wind Speed\n10,30\n,\n50,35.5\n100,40\n";
        let data = read_points_csv(csv.as_bytes()).unwrap();
        assert_eq!(data.points.len(), 3);
        assert_eq!(data.rows_read, 4);
        assert_eq!(data.blank_rows, 1);
        assert_eq!(data.points[1], DataPoint::new(35.5, 50.0));
    }

    #[test]
    fn column_order_and_aliases() {
        let csv = "V,T\n30,10\n35,50\n";
        let data = read_points_csv(csv.as_bytes()).unwrap();
        assert_eq!(data.points[0], DataPoint::new(30.0, 10.0));
    }

    #[test]
    fn bad_row_rejects_file_with_line_number() {
        let csv = "return_period,wind_speed\n10,30\n1,35\n";
        let err = read_points_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Line 3:"), "{err}");

        let csv = "return_period,wind_speed\nabc,30\n";
        let err = read_points_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid return period"), "{err}");
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "years,gust\n10,30\n";
        let err = read_points_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("wind speed column"), "{err}");
    }

    #[test]
    fn point_arg_parsing() {
        assert_eq!(parse_point_arg("50:35").unwrap(), DataPoint::new(35.0, 50.0));
        assert_eq!(parse_point_arg("50, 35").unwrap(), DataPoint::new(35.0, 50.0));
        assert!(parse_point_arg("50").is_err());
        assert!(parse_point_arg("0.5:35").is_err());
        assert!(parse_point_arg("50:-1").is_err());
    }
}
