//! Date utilities: parsing the historic FECHA column and formatting
//! destination-side date strings.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Accepted layouts for the FECHA column. The historic workbook mixes ISO
/// dates, Spanish day-first dates, and datetime cells that picked up a time
/// part when the sheet was exported.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parse a FECHA cell. A date that matches none of the known layouts aborts
/// the run: silently defaulting a booking date would corrupt the upload.
pub fn parse_fecha(s: &str) -> AppResult<NaiveDate> {
    let t = s.trim();

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Ok(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Ok(dt.date());
        }
    }

    Err(AppError::InvalidDate(t.to_string()))
}

/// Render a date the way T_ANOTACIONES expects it (`FAnotacion`).
pub fn format_fanotacion(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Timestamp of the current run, used for FCREA/FMODIFI and the output
/// directory name. Captured once per run so both columns carry the same
/// instant.
pub fn run_timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
