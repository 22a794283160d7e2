//! Parsing of client-supplied date strings.
//!
//! Browser forms submit `date` inputs as `YYYY-MM-DD` and `datetime-local`
//! inputs as `YYYY-MM-DDTHH:MM`, neither with an offset. Both are read as
//! UTC. Full RFC 3339 strings keep their offset and are converted to UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};

use crate::{Error, Result};

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Timestamps are stored as four-digit-year RFC 3339 text.
const MAX_YEAR: i32 = 9999;

/// Parse a timestamp in any of the accepted forms.
///
/// The result is truncated to [`stored_precision`]. Instants whose UTC year
/// falls outside `0..=9999` are rejected.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
  let invalid = || Error::InvalidTimestamp(input.to_owned());

  let parsed = parse_any(input.trim()).ok_or_else(invalid)?;
  if !(0..=MAX_YEAR).contains(&parsed.year()) {
    return Err(invalid());
  }
  Ok(stored_precision(parsed))
}

fn parse_any(s: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }

  for format in NAIVE_DATETIME_FORMATS {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
      return Some(naive.and_utc());
    }
  }

  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .ok()
    .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Truncate `at` to whole microseconds, the precision records are stored
/// with.
pub fn stored_precision(at: DateTime<Utc>) -> DateTime<Utc> { at.trunc_subsecs(6) }

/// Like [`parse_timestamp`], but a missing or blank input yields `None`.
pub fn parse_optional_timestamp(input: Option<&str>) -> Result<Option<DateTime<Utc>>> {
  match input.map(str::trim) {
    None | Some("") => Ok(None),
    Some(s) => parse_timestamp(s).map(Some),
  }
}

/// Treat an empty or whitespace-only optional string as absent.
pub fn non_blank(input: Option<String>) -> Option<String> {
  input.filter(|s| !s.trim().is_empty())
}
