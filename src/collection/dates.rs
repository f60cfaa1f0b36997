//! Date fields accept both native TOML dates and quoted strings.
//!
//! `date_added = 2024-03-01T10:00:00Z` and `date_added = "2024-03-01T10:00:00Z"`
//! mean the same thing. Local date-times and bare dates are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{Deserializer, Error};
use serde::Deserialize;

fn raw_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match toml::Value::deserialize(deserializer)? {
        toml::Value::Datetime(dt) => Ok(dt.to_string()),
        toml::Value::String(s) => Ok(s),
        other => Err(D::Error::custom(format!(
            "expected a date or date-time, found {}",
            other.type_str()
        ))),
    }
}

pub(super) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(super) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(s).map(|t| t.date_naive()))
}

pub(super) fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let text = raw_text(deserializer)?;
    parse_timestamp(&text).ok_or_else(|| D::Error::custom(format!("invalid date-time `{text}`")))
}

pub(super) fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let text = raw_text(deserializer)?;
    parse_date(&text).ok_or_else(|| D::Error::custom(format!("invalid date `{text}`")))
}
