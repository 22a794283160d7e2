//! The dashboard summary and the count filters it is computed from.
//!
//! Every filter takes the same `now` so that the counts of one summary share a
//! single reference instant.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  incident::IncidentStatus, inspection::InspectionStatus, permit::PermitStatus,
  store::CountFilter, training::TrainingStatus,
};

/// How far back `totalIncidents` looks.
pub const INCIDENT_WINDOW_DAYS: i64 = 30;

/// How far ahead `inspectionsDue` looks.
pub const INSPECTION_HORIZON_DAYS: i64 = 7;

/// Six headline figures for the dashboard. `Default` is the all-zero summary
/// served when the store cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
  pub total_incidents:     u64,
  pub open_incidents:      u64,
  pub inspections_due:     u64,
  /// Whole percent, `0..=100`.
  pub training_compliance: u64,
  pub pending_permits:     u64,
  pub chemical_inventory:  u64,
}

/// Incidents reported within the last [`INCIDENT_WINDOW_DAYS`].
pub fn recent_incidents(now: DateTime<Utc>) -> CountFilter {
  CountFilter::all().since(now - Duration::days(INCIDENT_WINDOW_DAYS))
}

/// Incidents in any status but `Resolved`, regardless of age.
pub fn open_incidents() -> CountFilter {
  CountFilter::all().status_is_not(IncidentStatus::Resolved)
}

/// Scheduled inspections due within [`INSPECTION_HORIZON_DAYS`], including
/// those already past due.
pub fn inspections_due(now: DateTime<Utc>) -> CountFilter {
  CountFilter::all()
    .status_is(InspectionStatus::Scheduled)
    .until(now + Duration::days(INSPECTION_HORIZON_DAYS))
}

pub fn completed_trainings() -> CountFilter {
  CountFilter::all().status_is(TrainingStatus::Completed)
}

pub fn pending_permits() -> CountFilter {
  CountFilter::all().status_is(PermitStatus::PendingApproval)
}

/// `completed / total` as a whole percentage, rounding halves up.
/// Zero when there is nothing to complete.
pub fn compliance_percent(completed: u64, total: u64) -> u64 {
  if total == 0 {
    return 0;
  }
  (completed * 200 + total) / (total * 2)
}
