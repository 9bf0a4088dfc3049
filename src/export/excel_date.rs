// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Seriale Excel + formato numerico per una data di lettura.
/// Midnight timestamps (date-only entries) get a date-only format.
pub(crate) fn to_excel_date(dt: &NaiveDateTime) -> (&'static str, f64) {
    let format = if dt.num_seconds_from_midnight() == 0 {
        "yyyy-mm-dd"
    } else {
        "yyyy-mm-dd hh:mm:ss"
    };
    (format, naive_datetime_to_excel_serial(dt))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
