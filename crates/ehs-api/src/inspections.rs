//! Inspection endpoints: `GET /inspections`, `POST /inspections`.

use std::future::Future;

use chrono::{DateTime, Utc};
use ehs_core::{
  Stored,
  inspection::{Inspection, InspectionStatus, checked_score},
  store::EhsStore,
  time::{non_blank, parse_optional_timestamp, parse_timestamp},
};
use serde::Deserialize;

use crate::resource::Resource;

/// Body for `POST /inspections`. Every new inspection starts `Scheduled`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionBody {
  pub title:        String,
  #[serde(rename = "type")]
  pub kind:         String,
  pub location:     String,
  pub inspector:    String,
  pub due_date:     String,
  #[serde(default)]
  pub score:        Option<u32>,
  #[serde(default)]
  pub findings:     Option<String>,
  #[serde(default)]
  pub completed_at: Option<String>,
}

impl Resource for Inspection {
  type Body = InspectionBody;

  fn from_body(body: InspectionBody, _now: DateTime<Utc>) -> ehs_core::Result<Self> {
    Ok(Inspection {
      title: body.title,
      kind: body.kind,
      location: body.location,
      inspector: body.inspector,
      status: InspectionStatus::Scheduled,
      score: checked_score(body.score)?,
      findings: non_blank(body.findings),
      due_date: parse_timestamp(&body.due_date)?,
      completed_at: parse_optional_timestamp(body.completed_at.as_deref())?,
    })
  }

  fn list<S: EhsStore>(
    store: &S,
  ) -> impl Future<Output = Result<Vec<Stored<Self>>, S::Error>> + Send + '_ {
    store.list_inspections()
  }

  fn create<S: EhsStore>(
    store: &S,
    record: Self,
  ) -> impl Future<Output = Result<Stored<Self>, S::Error>> + Send + '_ {
    store.create_inspection(record)
  }
}
