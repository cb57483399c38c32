//! Creation/update timestamps as the API sends them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt;

/// A point in time without zone information, as displayed by the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

impl Timestamp {
    /// Reads any of the timestamp encodings the backend produces:
    ///
    /// - RFC 3339 (`2024-05-01T10:00:00Z`, offsets are dropped after conversion to UTC)
    /// - naive ISO, with `T` or a space, optional fractional seconds
    /// - a bare date (`2024-05-01`, midnight)
    /// - epoch milliseconds
    /// - a Jackson `LocalDateTime` array `[y, m, d, h, mi, s, nanos?]`
    ///
    /// Anything else is treated as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| Self(dt.naive_utc())),
            Value::Array(parts) => Self::from_parts(parts),
            _ => None,
        }
    }

    /// Parses a textual timestamp.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.naive_utc()));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self(dt));
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
    }

    fn from_parts(parts: &[Value]) -> Option<Self> {
        let num = |i: usize| parts.get(i).and_then(Value::as_i64).unwrap_or(0);
        if parts.len() < 3 {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(
            i32::try_from(num(0)).ok()?,
            u32::try_from(num(1)).ok()?,
            u32::try_from(num(2)).ok()?,
        )?;
        let time = date.and_hms_nano_opt(
            u32::try_from(num(3)).ok()?,
            u32::try_from(num(4)).ok()?,
            u32::try_from(num(5)).ok()?,
            u32::try_from(num(6)).ok()?,
        )?;
        Some(Self(time))
    }

    /// `dd/mm/yyyy hh:mm`, the admin table format.
    #[must_use]
    pub fn display(&self) -> String {
        self.0.format("%d/%m/%Y %H:%M").to_string()
    }

    /// `dd/mm/yyyy`, the storefront card format.
    #[must_use]
    pub fn date(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Reads the first present alias as a timestamp.
#[must_use]
pub fn read(candidates: &[Option<&Value>]) -> Option<Timestamp> {
    super::fields::first(candidates).and_then(Timestamp::from_value)
}
