//! The `EhsStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `ehs-store-sqlite`).
//! Higher layers (`ehs-api`, `ehs-server`) depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::{
  chemical::Chemical,
  incident::Incident,
  inspection::Inspection,
  permit::Permit,
  record::{RecordKind, Stored},
  training::Training,
};

// ─── Count filters ───────────────────────────────────────────────────────────

/// A match on the wire label of a record's `status` attribute.
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
  Is(String),
  IsNot(String),
}

/// Parameters for [`EhsStore::count`]. The default counts every row.
///
/// The date bounds apply to the kind's dated attribute: `reportedAt` for
/// incidents, `dueDate` for inspections, `startDate` for trainings and
/// permits, and `lastInspected` for chemicals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountFilter {
  pub status: Option<StatusFilter>,
  /// Inclusive lower bound.
  pub since:  Option<DateTime<Utc>>,
  /// Inclusive upper bound.
  pub until:  Option<DateTime<Utc>>,
}

impl CountFilter {
  pub fn all() -> Self { Self::default() }

  pub fn status_is(mut self, status: impl AsRef<str>) -> Self {
    self.status = Some(StatusFilter::Is(status.as_ref().to_owned()));
    self
  }

  pub fn status_is_not(mut self, status: impl AsRef<str>) -> Self {
    self.status = Some(StatusFilter::IsNot(status.as_ref().to_owned()));
    self
  }

  pub fn since(mut self, at: DateTime<Utc>) -> Self {
    self.since = Some(at);
    self
  }

  pub fn until(mut self, at: DateTime<Utc>) -> Self {
    self.until = Some(at);
    self
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an EHS record store backend.
///
/// Records are created once and never updated. Identifiers are assigned by
/// the store on creation. `list_*` methods return rows in each kind's fixed
/// order:
///
/// | Kind | Order |
/// |------|-------|
/// | incidents | `reportedAt` descending |
/// | inspections | `dueDate` ascending |
/// | trainings | `startDate` ascending |
/// | permits | `startDate` descending |
/// | chemicals | `name` ascending |
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EhsStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Incidents ─────────────────────────────────────────────────────────

  fn list_incidents(
    &self,
  ) -> impl Future<Output = Result<Vec<Stored<Incident>>, Self::Error>> + Send + '_;

  fn create_incident(
    &self,
    incident: Incident,
  ) -> impl Future<Output = Result<Stored<Incident>, Self::Error>> + Send + '_;

  // ── Inspections ───────────────────────────────────────────────────────

  fn list_inspections(
    &self,
  ) -> impl Future<Output = Result<Vec<Stored<Inspection>>, Self::Error>> + Send + '_;

  fn create_inspection(
    &self,
    inspection: Inspection,
  ) -> impl Future<Output = Result<Stored<Inspection>, Self::Error>> + Send + '_;

  // ── Trainings ─────────────────────────────────────────────────────────

  fn list_trainings(
    &self,
  ) -> impl Future<Output = Result<Vec<Stored<Training>>, Self::Error>> + Send + '_;

  fn create_training(
    &self,
    training: Training,
  ) -> impl Future<Output = Result<Stored<Training>, Self::Error>> + Send + '_;

  // ── Permits ───────────────────────────────────────────────────────────

  fn list_permits(
    &self,
  ) -> impl Future<Output = Result<Vec<Stored<Permit>>, Self::Error>> + Send + '_;

  fn create_permit(
    &self,
    permit: Permit,
  ) -> impl Future<Output = Result<Stored<Permit>, Self::Error>> + Send + '_;

  // ── Chemicals ─────────────────────────────────────────────────────────

  fn list_chemicals(
    &self,
  ) -> impl Future<Output = Result<Vec<Stored<Chemical>>, Self::Error>> + Send + '_;

  fn create_chemical(
    &self,
    chemical: Chemical,
  ) -> impl Future<Output = Result<Stored<Chemical>, Self::Error>> + Send + '_;

  // ── Any kind ──────────────────────────────────────────────────────────

  /// Count the rows of `kind` matching `filter`.
  ///
  /// Returns an error if `filter` names a status and `kind` has none.
  fn count(
    &self,
    kind: RecordKind,
    filter: CountFilter,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Delete every row of `kind`, returning how many were removed.
  fn clear(
    &self,
    kind: RecordKind,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
