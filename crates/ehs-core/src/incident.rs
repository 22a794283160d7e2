//! Incidents: reported injuries, spills and near misses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::record::{Record, RecordKind};

/// How serious an incident is.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum Severity {
  Low,
  Medium,
  High,
}

/// Where an incident is in its investigation.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum IncidentStatus {
  /// Every newly reported incident starts here.
  Open,
  #[serde(rename = "Under Investigation")]
  #[strum(serialize = "Under Investigation")]
  UnderInvestigation,
  Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
  pub title:       String,
  pub description: String,
  pub severity:    Severity,
  pub status:      IncidentStatus,
  /// Free text, e.g. "Injury", "Environmental", "Near Miss".
  pub category:    String,
  pub location:    String,
  pub reported_by: String,
  pub reported_at: DateTime<Utc>,
}

impl Record for Incident {
  const KIND: RecordKind = RecordKind::Incident;

  fn search_fields(&self) -> Vec<&str> { vec![self.title.as_str(), self.location.as_str()] }
}
