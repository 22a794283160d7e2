//! Work permits (hot work, confined space entry, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::record::{Record, RecordKind};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, AsRefStr,
)]
pub enum PermitStatus {
  #[serde(rename = "Pending Approval")]
  #[strum(serialize = "Pending Approval")]
  PendingApproval,
  Approved,
  Rejected,
  Expired,
  Active,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permit {
  pub title:        String,
  #[serde(rename = "type")]
  pub kind:         String,
  pub location:     String,
  pub requested_by: String,
  pub approved_by:  Option<String>,
  pub status:       PermitStatus,
  pub start_date:   DateTime<Utc>,
  pub end_date:     DateTime<Utc>,
  /// Free text, comma separated in practice.
  pub hazards:      String,
  pub controls:     String,
}

impl Record for Permit {
  const KIND: RecordKind = RecordKind::Permit;

  fn search_fields(&self) -> Vec<&str> { vec![self.title.as_str(), self.kind.as_str()] }
}
