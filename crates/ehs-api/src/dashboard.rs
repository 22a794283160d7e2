//! `GET /dashboard`: six headline counts across every record kind.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use ehs_core::{
  RecordKind,
  store::{CountFilter, EhsStore},
  summary::{self, DashboardSummary},
};

/// Compute the summary as of `now`. The counts are issued concurrently; the
/// first failure aborts the rest.
pub async fn summarize<S: EhsStore>(
  store: &S,
  now: DateTime<Utc>,
) -> Result<DashboardSummary, S::Error> {
  let (
    total_incidents,
    open_incidents,
    inspections_due,
    trainings,
    completed_trainings,
    pending_permits,
    chemical_inventory,
  ) = tokio::try_join!(
    store.count(RecordKind::Incident, summary::recent_incidents(now)),
    store.count(RecordKind::Incident, summary::open_incidents()),
    store.count(RecordKind::Inspection, summary::inspections_due(now)),
    store.count(RecordKind::Training, CountFilter::all()),
    store.count(RecordKind::Training, summary::completed_trainings()),
    store.count(RecordKind::Permit, summary::pending_permits()),
    store.count(RecordKind::Chemical, CountFilter::all()),
  )?;

  Ok(DashboardSummary {
    total_incidents,
    open_incidents,
    inspections_due,
    training_compliance: summary::compliance_percent(completed_trainings, trainings),
    pending_permits,
    chemical_inventory,
  })
}

/// Always answers 200; an unreadable store yields the all-zero summary.
pub async fn handler<S: EhsStore>(State(store): State<Arc<S>>) -> Json<DashboardSummary> {
  match summarize(store.as_ref(), Utc::now()).await {
    Ok(summary) => Json(summary),
    Err(e) => {
      tracing::error!(error = %e, "failed to compute dashboard summary");
      Json(DashboardSummary::default())
    }
  }
}
