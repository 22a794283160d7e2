//! Training endpoints: `GET /trainings`, `POST /trainings`.

use std::future::Future;

use chrono::{DateTime, Utc};
use ehs_core::{
  Stored,
  store::EhsStore,
  time::parse_timestamp,
  training::{Training, TrainingStatus},
};
use serde::Deserialize;

use crate::resource::Resource;

/// Body for `POST /trainings`. New sessions open for registration with
/// nobody signed up.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingBody {
  pub title:         String,
  pub description:   String,
  #[serde(rename = "type")]
  pub kind:          String,
  pub instructor:    String,
  pub location:      String,
  pub start_date:    String,
  pub end_date:      String,
  pub max_attendees: u32,
}

impl Resource for Training {
  type Body = TrainingBody;

  fn from_body(body: TrainingBody, _now: DateTime<Utc>) -> ehs_core::Result<Self> {
    Ok(Training {
      title: body.title,
      description: body.description,
      kind: body.kind,
      instructor: body.instructor,
      location: body.location,
      start_date: parse_timestamp(&body.start_date)?,
      end_date: parse_timestamp(&body.end_date)?,
      max_attendees: body.max_attendees,
      attendees: Vec::new(),
      status: TrainingStatus::OpenForRegistration,
    })
  }

  fn list<S: EhsStore>(
    store: &S,
  ) -> impl Future<Output = Result<Vec<Stored<Self>>, S::Error>> + Send + '_ {
    store.list_trainings()
  }

  fn create<S: EhsStore>(
    store: &S,
    record: Self,
  ) -> impl Future<Output = Result<Stored<Self>, S::Error>> + Send + '_ {
    store.create_training(record)
  }
}
