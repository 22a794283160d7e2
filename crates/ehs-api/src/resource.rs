//! The generic resource behind every entity endpoint.
//!
//! Each record type implements [`Resource`] once, naming its create body, the
//! defaults the server stamps on create, and which store methods read and
//! write it. The [`list`] and [`create`] handlers are then instantiated per
//! type in the router.

use std::{future::Future, sync::Arc};

use axum::{
  Json,
  extract::{Query, State, rejection::JsonRejection},
  http::StatusCode,
};
use chrono::{DateTime, Utc};
use ehs_core::{Record, Stored, store::EhsStore, time::stored_precision};
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::ApiError;

// ─── Trait ───────────────────────────────────────────────────────────────────

pub trait Resource: Record {
  /// JSON body accepted by `POST`. Fields the server assigns are absent, so
  /// client-supplied values for them are ignored.
  type Body: DeserializeOwned + Send + 'static;

  /// Build the record to persist from a create body, stamping the
  /// server-assigned defaults.
  fn from_body(body: Self::Body, now: DateTime<Utc>) -> ehs_core::Result<Self>;

  fn list<S: EhsStore>(
    store: &S,
  ) -> impl Future<Output = Result<Vec<Stored<Self>>, S::Error>> + Send + '_;

  fn create<S: EhsStore>(
    store: &S,
    record: Self,
  ) -> impl Future<Output = Result<Stored<Self>, S::Error>> + Send + '_;
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// Case-insensitive substring filter over the kind's search fields.
  pub search: Option<String>,
}

/// `GET /<kind>s[?search=...]`
///
/// Always answers 200. If the store cannot be read the error is logged and an
/// empty list is returned.
pub async fn list<S, R>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Json<Vec<Stored<R>>>
where
  S: EhsStore,
  R: Resource,
{
  let mut records = match R::list(store.as_ref()).await {
    Ok(records) => records,
    Err(e) => {
      tracing::error!(kind = %R::KIND, error = %e, "failed to list records");
      return Json(Vec::new());
    }
  };

  if let Some(needle) = params.search.as_deref() {
    records.retain(|stored| stored.record.matches(needle));
  }

  Json(records)
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /<kind>s`, returning 201 and the stored record.
///
/// Server-stamped times carry stored precision, so the response matches what
/// a later list returns. A malformed body is a 400; a store failure is a 500.
pub async fn create<S, R>(
  State(store): State<Arc<S>>,
  body: Result<Json<R::Body>, JsonRejection>,
) -> Result<(StatusCode, Json<Stored<R>>), ApiError>
where
  S: EhsStore,
  R: Resource,
{
  let Json(body) = body?;
  let record = R::from_body(body, stored_precision(Utc::now()))?;

  let stored = R::create(store.as_ref(), record)
    .await
    .map_err(|e| ApiError::store(format!("create {}", R::KIND), e))?;

  tracing::info!(kind = %R::KIND, id = %stored.id, "record created");
  Ok((StatusCode::CREATED, Json(stored)))
}
