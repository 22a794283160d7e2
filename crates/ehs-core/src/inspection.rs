//! Inspections: scheduled safety and compliance checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{
  Error, Result,
  record::{Record, RecordKind},
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum InspectionStatus {
  Scheduled,
  #[serde(rename = "In Progress")]
  #[strum(serialize = "In Progress")]
  InProgress,
  Completed,
  Overdue,
}

/// Highest score an inspection can be awarded.
pub const MAX_SCORE: u8 = 100;

/// Validate a client-supplied score, which must fall within `0..=100`.
pub fn checked_score(score: Option<u32>) -> Result<Option<u8>> {
  match score {
    None => Ok(None),
    Some(s) if s <= u32::from(MAX_SCORE) => Ok(Some(s as u8)),
    Some(s) => Err(Error::ScoreOutOfRange(s)),
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
  pub title:        String,
  #[serde(rename = "type")]
  pub kind:         String,
  pub location:     String,
  pub inspector:    String,
  pub status:       InspectionStatus,
  pub score:        Option<u8>,
  pub findings:     Option<String>,
  pub due_date:     DateTime<Utc>,
  pub completed_at: Option<DateTime<Utc>>,
}

impl Record for Inspection {
  const KIND: RecordKind = RecordKind::Inspection;

  fn search_fields(&self) -> Vec<&str> { vec![self.title.as_str(), self.location.as_str()] }
}
