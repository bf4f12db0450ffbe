//! Timestamp utilities: RFC 3339 validation and "now" stamping.
//!
//! Timestamps are kept as text everywhere (models, database), the same
//! way they travel on the wire; parsing is only used to validate.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat};

pub fn is_valid_rfc3339(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
}

pub fn ensure_rfc3339(s: &str) -> AppResult<()> {
    if is_valid_rfc3339(s) {
        Ok(())
    } else {
        Err(AppError::InvalidTimestamp(s.to_string()))
    }
}

/// `None` is accepted: an unset end is valid.
pub fn ensure_optional_rfc3339(s: Option<&str>) -> AppResult<()> {
    match s {
        Some(v) => ensure_rfc3339(v),
        None => Ok(()),
    }
}

/// Range bounds only matter up to the day, so a plain `YYYY-MM-DD` is accepted too.
pub fn ensure_day_bound(s: &str) -> AppResult<()> {
    if is_valid_rfc3339(s) || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(AppError::InvalidTimestamp(s.to_string()))
    }
}

/// Current local time, second precision, e.g. `2023-05-09T07:00:00+02:00`.
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `HH:MM` portion of a stored timestamp, for compact listings.
pub fn short_time(s: &str) -> String {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| s.to_string())
}

/// Minutes between two stored timestamps, if both parse.
pub fn minutes_between(start: &str, end: &str) -> Option<i64> {
    let s = DateTime::parse_from_rfc3339(start).ok()?;
    let e = DateTime::parse_from_rfc3339(end).ok()?;
    Some((e - s).num_minutes())
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
