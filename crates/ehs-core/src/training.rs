//! Training sessions and their attendee lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::record::{Record, RecordKind};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum TrainingStatus {
  Scheduled,
  #[serde(rename = "Open for Registration")]
  #[strum(serialize = "Open for Registration")]
  OpenForRegistration,
  /// Counted towards training compliance on the dashboard.
  Completed,
  Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
  pub title:         String,
  pub description:   String,
  #[serde(rename = "type")]
  pub kind:          String,
  pub instructor:    String,
  pub location:      String,
  pub start_date:    DateTime<Utc>,
  pub end_date:      DateTime<Utc>,
  pub max_attendees: u32,
  /// Registered attendee names. Serialised as a JSON-encoded string, e.g.
  /// `"[\"Alice Brown\"]"`, which is what the dashboard expects.
  #[serde(with = "attendee_list")]
  pub attendees:     Vec<String>,
  pub status:        TrainingStatus,
}

impl Record for Training {
  const KIND: RecordKind = RecordKind::Training;

  fn search_fields(&self) -> Vec<&str> { vec![self.title.as_str(), self.kind.as_str()] }
}

/// Encodes a name list as a string holding its JSON array form.
pub mod attendee_list {
  use serde::{Deserialize, Deserializer, Serializer, de, ser};

  pub fn encode(names: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(names)
  }

  pub fn decode(text: &str) -> serde_json::Result<Vec<String>> {
    if text.trim().is_empty() {
      return Ok(Vec::new());
    }
    serde_json::from_str(text)
  }

  pub fn serialize<S: Serializer>(names: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    let text = encode(names).map_err(ser::Error::custom)?;
    serializer.serialize_str(&text)
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let text = String::deserialize(deserializer)?;
    decode(&text).map_err(de::Error::custom)
  }
}
