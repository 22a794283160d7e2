//! Chemical inventory entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chemical {
  pub name:           String,
  /// CAS registry number, e.g. `67-64-1`.
  pub cas_number:     Option<String>,
  pub location:       String,
  /// Kept as entered; the unit lives in `unit`.
  pub quantity:       String,
  pub unit:           String,
  pub hazard_class:   String,
  /// Link to the safety data sheet.
  pub sds_url:        Option<String>,
  pub expiry_date:    Option<DateTime<Utc>>,
  pub last_inspected: DateTime<Utc>,
}

impl Record for Chemical {
  const KIND: RecordKind = RecordKind::Chemical;

  fn search_fields(&self) -> Vec<&str> {
    let mut fields = vec![self.name.as_str(), self.location.as_str()];
    fields.extend(self.cas_number.as_deref());
    fields
  }
}
