//! CSV exports of answered queries and calibration points.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! Point files use the same header `gw fit -f` reads, so they load back as-is.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{DataPoint, QueriedPoint};
use crate::error::AppError;

/// Write queried points to a CSV file, in query order.
pub fn write_queries_csv(path: &Path, queried: &[QueriedPoint]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_queries(file, queried)?;
    tracing::info!(path = %path.display(), rows = queried.len(), "exported queried points");
    Ok(())
}

pub fn write_queries<W: Write>(out: W, queried: &[QueriedPoint]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["kind", "input_value", "derived_value", "return_period_years", "wind_speed_ms"])
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for q in queried {
        writer
            .write_record([
                q.kind.as_str().to_string(),
                format!("{:.6}", q.input_value),
                format!("{:.6}", q.derived_value),
                format!("{:.6}", q.return_period),
                format!("{:.6}", q.wind_speed),
            ])
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))
}

/// Write calibration pairs to a CSV file readable by the ingest module.
pub fn write_points_csv(path: &Path, points: &[DataPoint]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create points CSV '{}': {e}", path.display())))?;
    write_points(file, points)?;
    tracing::info!(path = %path.display(), rows = points.len(), "wrote calibration points");
    Ok(())
}

pub fn write_points<W: Write>(out: W, points: &[DataPoint]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["return_period", "wind_speed"])
        .map_err(|e| AppError::new(2, format!("Failed to write points CSV header: {e}")))?;

    for p in points {
        writer
            .write_record([p.return_period.to_string(), p.wind_speed.to_string()])
            .map_err(|e| AppError::new(2, format!("Failed to write points CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush points CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_points_csv;

    #[test]
    fn points_csv_reads_back() {
        let pts = vec![DataPoint::new(30.0, 10.0), DataPoint::new(35.5, 50.25)];
        let mut buf = Vec::new();
        write_points(&mut buf, &pts).unwrap();
        let back = read_points_csv(buf.as_slice()).unwrap();
        assert_eq!(back.points, pts);
    }

    #[test]
    fn points_csv_keeps_full_precision() {
        let pts = vec![DataPoint::new(27.123456789, 31.0 / 3.0), DataPoint::new(12.5, 1.0000001)];
        let mut buf = Vec::new();
        write_points(&mut buf, &pts).unwrap();
        let back = read_points_csv(buf.as_slice()).unwrap();
        assert_eq!(back.points, pts);
    }

    #[test]
    fn queries_csv_layout() {
        let rows = vec![
            QueriedPoint::from_period(100.0, 41.5),
            QueriedPoint::from_speed(35.0, 42.25),
        ];
        let mut buf = Vec::new();
        write_queries(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "kind,input_value,derived_value,return_period_years,wind_speed_ms");
        assert_eq!(lines[1], "from_period,100.000000,41.500000,100.000000,41.500000");
        assert_eq!(lines[2], "from_speed,35.000000,42.250000,42.250000,35.000000");
    }
}
