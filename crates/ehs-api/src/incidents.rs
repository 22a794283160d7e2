//! Incident endpoints: `GET /incidents`, `POST /incidents`.

use std::future::Future;

use chrono::{DateTime, Utc};
use ehs_core::{
  Stored,
  incident::{Incident, IncidentStatus, Severity},
  store::EhsStore,
  time::parse_optional_timestamp,
};
use serde::Deserialize;

use crate::resource::Resource;

/// Body for `POST /incidents`. Every new incident starts `Open`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentBody {
  pub title:       String,
  pub description: String,
  pub severity:    Severity,
  pub category:    String,
  pub location:    String,
  pub reported_by: String,
  /// Defaults to the time of the request.
  #[serde(default)]
  pub reported_at: Option<String>,
}

impl Resource for Incident {
  type Body = IncidentBody;

  fn from_body(body: IncidentBody, now: DateTime<Utc>) -> ehs_core::Result<Self> {
    let reported_at = parse_optional_timestamp(body.reported_at.as_deref())?.unwrap_or(now);
    Ok(Incident {
      title: body.title,
      description: body.description,
      severity: body.severity,
      status: IncidentStatus::Open,
      category: body.category,
      location: body.location,
      reported_by: body.reported_by,
      reported_at,
    })
  }

  fn list<S: EhsStore>(
    store: &S,
  ) -> impl Future<Output = Result<Vec<Stored<Self>>, S::Error>> + Send + '_ {
    store.list_incidents()
  }

  fn create<S: EhsStore>(
    store: &S,
    record: Self,
  ) -> impl Future<Output = Result<Stored<Self>, S::Error>> + Send + '_ {
    store.create_incident(record)
  }
}
