//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings with a fixed microsecond
//! fraction. Status and severity enums are stored as their wire labels.
//! Attendee lists are stored as compact JSON. UUIDs are stored as hyphenated
//! lowercase strings.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Value;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn decode_opt_dt(s: Option<&str>) -> Result<Option<DateTime<Utc>>> {
  s.map(decode_dt).transpose()
}

// ─── Labels ──────────────────────────────────────────────────────────────────

/// Parse a stored enum label (status, severity) back into its enum.
pub fn decode_label<T: FromStr>(column: &'static str, s: &str) -> Result<T> {
  s.parse().map_err(|_| Error::UnknownValue {
    column,
    value: s.to_owned(),
  })
}

// ─── Integers ────────────────────────────────────────────────────────────────

pub fn decode_int<T: TryFrom<i64>>(column: &'static str, n: i64) -> Result<T> {
  T::try_from(n).map_err(|_| Error::UnknownValue {
    column,
    value: n.to_string(),
  })
}

// ─── Bind values ─────────────────────────────────────────────────────────────

pub fn text(s: &str) -> Value { Value::Text(s.to_owned()) }

pub fn opt_text(s: Option<&str>) -> Value { s.map_or(Value::Null, text) }

pub fn dt(at: DateTime<Utc>) -> Value { Value::Text(encode_dt(at)) }

pub fn opt_dt(at: Option<DateTime<Utc>>) -> Value { at.map_or(Value::Null, dt) }

pub fn int(n: impl Into<i64>) -> Value { Value::Integer(n.into()) }
