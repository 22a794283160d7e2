//! The record abstraction shared by all five entity types.
//!
//! A record body (e.g. [`Incident`](crate::incident::Incident)) carries every
//! attribute except the identifier. Once persisted it is wrapped in
//! [`Stored`], which adds the store-assigned id and flattens both into one
//! JSON object on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// Discriminant for the five independently stored record types.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
  strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
  Incident,
  Inspection,
  Training,
  Permit,
  Chemical,
}

impl RecordKind {
  /// Every kind, in the order the seed operation clears and repopulates them.
  pub const ALL: [RecordKind; 5] = [
    RecordKind::Incident,
    RecordKind::Inspection,
    RecordKind::Training,
    RecordKind::Permit,
    RecordKind::Chemical,
  ];

  /// Whether records of this kind carry a `status` attribute.
  pub fn has_status(self) -> bool { !matches!(self, Self::Chemical) }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// Implemented by each record body type.
pub trait Record: Clone + Send + Sync + Serialize + 'static {
  const KIND: RecordKind;

  /// The attributes a free-text search looks at.
  fn search_fields(&self) -> Vec<&str>;

  /// Case-insensitive substring match over [`Record::search_fields`].
  /// A blank needle matches everything.
  fn matches(&self, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
      return true;
    }
    self
      .search_fields()
      .iter()
      .any(|field| field.to_lowercase().contains(&needle))
  }
}

// ─── Stored ──────────────────────────────────────────────────────────────────

/// A persisted record: the store-assigned identifier plus the record body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
  pub id:     Uuid,
  #[serde(flatten)]
  pub record: T,
}

impl<T> Stored<T> {
  pub fn new(id: Uuid, record: T) -> Self { Self { id, record } }
}
