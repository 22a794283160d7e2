//! Permit endpoints: `GET /permits`, `POST /permits`.

use std::future::Future;

use chrono::{DateTime, Utc};
use ehs_core::{
  Stored,
  permit::{Permit, PermitStatus},
  store::EhsStore,
  time::{non_blank, parse_timestamp},
};
use serde::Deserialize;

use crate::resource::Resource;

/// Body for `POST /permits`. Every new permit awaits approval.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitBody {
  pub title:        String,
  #[serde(rename = "type")]
  pub kind:         String,
  pub location:     String,
  pub requested_by: String,
  #[serde(default)]
  pub approved_by:  Option<String>,
  pub start_date:   String,
  pub end_date:     String,
  pub hazards:      String,
  pub controls:     String,
}

impl Resource for Permit {
  type Body = PermitBody;

  fn from_body(body: PermitBody, _now: DateTime<Utc>) -> ehs_core::Result<Self> {
    Ok(Permit {
      title: body.title,
      kind: body.kind,
      location: body.location,
      requested_by: body.requested_by,
      approved_by: non_blank(body.approved_by),
      status: PermitStatus::PendingApproval,
      start_date: parse_timestamp(&body.start_date)?,
      end_date: parse_timestamp(&body.end_date)?,
      hazards: body.hazards,
      controls: body.controls,
    })
  }

  fn list<S: EhsStore>(
    store: &S,
  ) -> impl Future<Output = Result<Vec<Stored<Self>>, S::Error>> + Send + '_ {
    store.list_permits()
  }

  fn create<S: EhsStore>(
    store: &S,
    record: Self,
  ) -> impl Future<Output = Result<Stored<Self>, S::Error>> + Send + '_ {
    store.create_permit(record)
  }
}
