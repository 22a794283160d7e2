//! `POST /seed`: replace every record with the demonstration fixture set.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use ehs_core::{RecordKind, fixture, store::EhsStore};
use serde_json::{Value, json};

use crate::{error::ApiError, resource::Resource};

/// Rows inserted per kind by [`reseed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
  pub incidents:   usize,
  pub inspections: usize,
  pub trainings:   usize,
  pub permits:     usize,
  pub chemicals:   usize,
}

/// Delete every row of every kind, then insert the fixtures dated relative
/// to `now`.
///
/// Not transactional: a failure part-way leaves whatever was reached.
pub async fn reseed<S: EhsStore>(store: &S, now: DateTime<Utc>) -> Result<SeedReport, S::Error> {
  for kind in RecordKind::ALL {
    let removed = store.clear(kind).await?;
    tracing::debug!(%kind, removed, "cleared");
  }

  let report = SeedReport {
    incidents:   insert_all(store, fixture::incidents(now)).await?,
    inspections: insert_all(store, fixture::inspections(now)).await?,
    trainings:   insert_all(store, fixture::trainings(now)).await?,
    permits:     insert_all(store, fixture::permits(now)).await?,
    chemicals:   insert_all(store, fixture::chemicals(now)).await?,
  };

  tracing::info!(
    incidents = report.incidents,
    inspections = report.inspections,
    trainings = report.trainings,
    permits = report.permits,
    chemicals = report.chemicals,
    "database seeded"
  );
  Ok(report)
}

async fn insert_all<S: EhsStore, R: Resource>(store: &S, records: Vec<R>) -> Result<usize, S::Error> {
  let count = records.len();
  for record in records {
    R::create(store, record).await?;
  }
  Ok(count)
}

pub async fn handler<S: EhsStore>(State(store): State<Arc<S>>) -> Result<Json<Value>, ApiError> {
  reseed(store.as_ref(), Utc::now())
    .await
    .map_err(|e| ApiError::store("seed database", e))?;
  Ok(Json(json!({ "message": "Database seeded successfully" })))
}
