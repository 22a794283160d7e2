//! JSON REST API for the EHS record store.
//!
//! Exposes an axum [`Router`] backed by any [`ehs_core::store::EhsStore`].
//! Binding, tracing middleware, and configuration are the caller's
//! responsibility.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET`/`POST` | `/incidents` | [`resource::list`] / [`resource::create`] |
//! | `GET`/`POST` | `/inspections` | 〃 |
//! | `GET`/`POST` | `/trainings` | 〃 |
//! | `GET`/`POST` | `/permits` | 〃 |
//! | `GET`/`POST` | `/chemicals` | 〃 |
//! | `GET` | `/dashboard` | [`dashboard::handler`] |
//! | `POST` | `/seed` | [`seed::handler`] |
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", ehs_api::api_router(store.clone()))
//! ```

pub mod chemicals;
pub mod dashboard;
pub mod error;
pub mod incidents;
pub mod inspections;
pub mod permits;
pub mod resource;
pub mod seed;
pub mod trainings;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use ehs_core::{
  chemical::Chemical, incident::Incident, inspection::Inspection, permit::Permit,
  store::EhsStore, training::Training,
};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EhsStore + 'static,
{
  Router::new()
    .route(
      "/incidents",
      get(resource::list::<S, Incident>).post(resource::create::<S, Incident>),
    )
    .route(
      "/inspections",
      get(resource::list::<S, Inspection>).post(resource::create::<S, Inspection>),
    )
    .route(
      "/trainings",
      get(resource::list::<S, Training>).post(resource::create::<S, Training>),
    )
    .route(
      "/permits",
      get(resource::list::<S, Permit>).post(resource::create::<S, Permit>),
    )
    .route(
      "/chemicals",
      get(resource::list::<S, Chemical>).post(resource::create::<S, Chemical>),
    )
    .route("/dashboard", get(dashboard::handler::<S>))
    .route("/seed", post(seed::handler::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use chrono::{DateTime, Duration, TimeZone, Utc};
  use ehs_core::{
    RecordKind, Stored,
    incident::{IncidentStatus, Severity},
    inspection::InspectionStatus,
    store::CountFilter,
    summary::DashboardSummary,
    time::stored_precision,
    training::TrainingStatus,
  };
  use ehs_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn sqlite() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn send<S: EhsStore + 'static>(
    store:  Arc<S>,
    method: &str,
    uri:    &str,
    body:   Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(json) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(json.to_string())
      }
      None => Body::empty(),
    };
    let resp   = api_router(store).oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes  = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  fn titles(list: &Value, field: &str) -> Vec<String> {
    list
      .as_array()
      .unwrap()
      .iter()
      .map(|r| r[field].as_str().unwrap().to_owned())
      .collect()
  }

  fn incident_body(title: &str, reported_at: &str) -> Value {
    json!({
      "title": title,
      "description": "Wet floor",
      "severity": "Medium",
      "category": "Injury",
      "location": "Warehouse A",
      "reportedBy": "John Smith",
      "reportedAt": reported_at,
    })
  }

  fn inspection_body(due_date: &str) -> Value {
    json!({
      "title": "Fire Safety",
      "type": "Safety",
      "location": "Building A",
      "inspector": "Fire Marshal",
      "dueDate": due_date,
    })
  }

  fn fixed_now() -> DateTime<Utc> { Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap() }

  // ── Create defaults ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_incident_is_always_open_with_fresh_id() {
    let mut body = incident_body("Slip", "2025-05-01T08:30");
    body["status"] = json!("Resolved");
    body["id"] = json!("client-chosen");

    let (status, created) = send(sqlite().await, "POST", "/incidents", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Open");
    assert_eq!(created["severity"], "Medium");
    assert_ne!(created["id"], "client-chosen");
    assert!(created["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert_eq!(created["reportedAt"], "2025-05-01T08:30:00Z");
  }

  #[tokio::test]
  async fn create_incident_without_date_is_reported_now() {
    let mut body = incident_body("Slip", "");
    body.as_object_mut().unwrap().remove("reportedAt");

    let before = stored_precision(Utc::now());
    let (status, created) = send(sqlite().await, "POST", "/incidents", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let reported: DateTime<Utc> = created["reportedAt"].as_str().unwrap().parse().unwrap();
    assert!(reported >= before);
  }

  #[tokio::test]
  async fn create_training_opens_registration_with_no_attendees() {
    let body = json!({
      "title": "Forklift Safety",
      "description": "Operator certification",
      "type": "Safety",
      "instructor": "Dr. Emily Watson",
      "location": "Training Room 1",
      "startDate": "2025-07-01T09:00",
      "endDate": "2025-07-01T13:00",
      "maxAttendees": 12,
      "status": "Completed",
      "attendees": "[\"Alice Brown\"]",
    });

    let (status, created) = send(sqlite().await, "POST", "/trainings", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Open for Registration");
    assert_eq!(created["attendees"], "[]");
    assert_eq!(created["maxAttendees"], 12);
  }

  #[tokio::test]
  async fn create_permit_awaits_approval() {
    let body = json!({
      "title": "Hot Work",
      "type": "Hot Work",
      "location": "Section C",
      "requestedBy": "David Martinez",
      "approvedBy": "",
      "status": "Approved",
      "startDate": "2025-07-01",
      "endDate": "2025-07-02",
      "hazards": "Fire",
      "controls": "Fire watch",
    });

    let (status, created) = send(sqlite().await, "POST", "/permits", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Pending Approval");
    assert_eq!(created["approvedBy"], Value::Null);
    assert_eq!(created["startDate"], "2025-07-01T00:00:00Z");
  }

  #[tokio::test]
  async fn create_chemical_stamps_last_inspected() {
    let body = json!({
      "name": "Acetone",
      "casNumber": "",
      "location": "Storage Room A",
      "quantity": "50",
      "unit": "L",
      "hazardClass": "Flammable Liquid",
      "expiryDate": "",
      "lastInspected": "2001-01-01T00:00:00Z",
    });

    let before = stored_precision(Utc::now());
    let (status, created) = send(sqlite().await, "POST", "/chemicals", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["casNumber"], Value::Null);
    assert_eq!(created["expiryDate"], Value::Null);

    let inspected: DateTime<Utc> = created["lastInspected"].as_str().unwrap().parse().unwrap();
    assert!(inspected >= before);
  }

  #[tokio::test]
  async fn create_inspection_is_scheduled_and_listed() {
    let store = sqlite().await;
    let mut body = inspection_body("2025-06-10");
    body["status"] = json!("Completed");
    body["findings"] = json!("");

    let (status, created) = send(store.clone(), "POST", "/inspections", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Scheduled");
    assert_eq!(created["type"], "Safety");
    assert_eq!(created["findings"], Value::Null);

    let (_, list) = send(store, "GET", "/inspections", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], created["id"]);
  }

  #[tokio::test]
  async fn create_response_equals_the_listed_record() {
    let store = sqlite().await;
    let body = json!({
      "name": "Acetone",
      "location": "Storage Room A",
      "quantity": "50",
      "unit": "L",
      "hazardClass": "Flammable Liquid",
      "expiryDate": "2026-01-01T00:00:00.123456789Z",
    });

    let (status, created) = send(store.clone(), "POST", "/chemicals", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["expiryDate"], "2026-01-01T00:00:00.123456Z");

    let (_, list) = send(store.clone(), "GET", "/chemicals", None).await;
    assert_eq!(list[0], created);

    let mut body = incident_body("Slip", "");
    body.as_object_mut().unwrap().remove("reportedAt");
    let (_, created) = send(store.clone(), "POST", "/incidents", Some(body)).await;
    let (_, list) = send(store, "GET", "/incidents", None).await;
    assert_eq!(list[0], created);
  }

  // ── Malformed bodies ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unparseable_date_is_bad_request() {
    let (status, body) =
      send(sqlite().await, "POST", "/inspections", Some(inspection_body("next tuesday"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("next tuesday"));
  }

  #[tokio::test]
  async fn dates_beyond_year_9999_are_rejected_and_listing_survives() {
    let store = sqlite().await;
    let (status, _) =
      send(store.clone(), "POST", "/inspections", Some(inspection_body("2025-06-10"))).await;
    assert_eq!(status, StatusCode::CREATED);

    for due in ["+12025-06-10", "9999-12-31T23:00:00-05:00"] {
      let (status, body) =
        send(store.clone(), "POST", "/inspections", Some(inspection_body(due))).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "{due}");
      assert!(body["error"].is_string());
    }

    let (status, list) = send(store, "GET", "/inspections", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn score_above_hundred_is_bad_request() {
    let mut body = inspection_body("2025-06-10");
    body["score"] = json!(101);
    let (status, _) = send(sqlite().await, "POST", "/inspections", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn missing_field_is_bad_request_and_nothing_is_stored() {
    let store = sqlite().await;
    let mut body = incident_body("Slip", "2025-05-01");
    body.as_object_mut().unwrap().remove("title");

    let (status, err) = send(store.clone(), "POST", "/incidents", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].is_string());
    assert_eq!(store.count(RecordKind::Incident, CountFilter::all()).await.unwrap(), 0);
  }

  #[tokio::test]
  async fn unknown_severity_is_bad_request() {
    let mut body = incident_body("Slip", "2025-05-01");
    body["severity"] = json!("Critical");
    let (status, _) = send(sqlite().await, "POST", "/incidents", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  // ── List ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn incidents_list_newest_first() {
    let store = sqlite().await;
    for (title, at) in [
      ("middle", "2025-05-10"),
      ("newest", "2025-05-20"),
      ("oldest", "2025-05-01"),
    ] {
      let (status, _) = send(store.clone(), "POST", "/incidents", Some(incident_body(title, at))).await;
      assert_eq!(status, StatusCode::CREATED);
    }

    let (status, list) = send(store, "GET", "/incidents", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&list, "title"), ["newest", "middle", "oldest"]);
  }

  #[tokio::test]
  async fn search_filters_case_insensitively_and_keeps_order() {
    let store = sqlite().await;
    send(store.clone(), "POST", "/seed", None).await;

    let (status, list) = send(store.clone(), "GET", "/chemicals?search=STORAGE", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&list, "name"), ["Acetone", "Sulfuric Acid"]);

    let (_, list) = send(store.clone(), "GET", "/chemicals?search=1310-73", None).await;
    assert_eq!(titles(&list, "name"), ["Sodium Hydroxide"]);

    let (_, list) = send(store.clone(), "GET", "/trainings?search=health", None).await;
    assert_eq!(titles(&list, "title"), ["First Aid & CPR Certification"]);

    let (_, list) = send(store, "GET", "/permits?search=", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
  }

  // ── Seed ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn seeding_twice_leaves_exactly_the_fixtures() {
    let store = sqlite().await;
    send(store.clone(), "POST", "/incidents", Some(incident_body("extra", "2025-05-01"))).await;

    for _ in 0..2 {
      let (status, body) = send(store.clone(), "POST", "/seed", None).await;
      assert_eq!(status, StatusCode::OK);
      assert_eq!(body, json!({ "message": "Database seeded successfully" }));
    }

    for (kind, expected) in [
      (RecordKind::Incident, 3),
      (RecordKind::Inspection, 2),
      (RecordKind::Training, 2),
      (RecordKind::Permit, 2),
      (RecordKind::Chemical, 3),
    ] {
      assert_eq!(store.count(kind, CountFilter::all()).await.unwrap(), expected, "{kind}");
    }
  }

  #[tokio::test]
  async fn reseed_reports_inserted_rows() {
    let store  = sqlite().await;
    let report = seed::reseed(store.as_ref(), fixed_now()).await.unwrap();
    assert_eq!(report, seed::SeedReport {
      incidents:   3,
      inspections: 2,
      trainings:   2,
      permits:     2,
      chemicals:   3,
    });
  }

  // ── Dashboard ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn dashboard_of_empty_store_is_all_zero() {
    let (status, body) = send(sqlite().await, "GET", "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      serde_json::from_value::<DashboardSummary>(body).unwrap(),
      DashboardSummary::default()
    );
  }

  #[tokio::test]
  async fn dashboard_after_seed() {
    let store = sqlite().await;
    send(store.clone(), "POST", "/seed", None).await;

    let (status, body) = send(store, "GET", "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      body,
      json!({
        "totalIncidents": 3,
        "openIncidents": 2,
        "inspectionsDue": 1,
        "trainingCompliance": 0,
        "pendingPermits": 1,
        "chemicalInventory": 3,
      })
    );
  }

  #[tokio::test]
  async fn open_incidents_ignore_the_window() {
    let store = sqlite().await;
    let now   = fixed_now();
    for (status, days_ago) in [
      (IncidentStatus::Open, 60),
      (IncidentStatus::UnderInvestigation, 1),
      (IncidentStatus::Resolved, 2),
    ] {
      let mut incident = ehs_core::fixture::incidents(now).remove(0);
      incident.status = status;
      incident.severity = Severity::Low;
      incident.reported_at = now - Duration::days(days_ago);
      store.create_incident(incident).await.unwrap();
    }

    let summary = dashboard::summarize(store.as_ref(), now).await.unwrap();
    assert_eq!(summary.total_incidents, 2);
    assert_eq!(summary.open_incidents, 2);
  }

  #[tokio::test]
  async fn inspections_due_within_seven_days_inclusive() {
    let store = sqlite().await;
    let now   = fixed_now();
    for (status, due_in) in [
      (InspectionStatus::Scheduled, Duration::days(7)),
      (InspectionStatus::Scheduled, Duration::days(8)),
      (InspectionStatus::Scheduled, -Duration::days(3)),
      (InspectionStatus::Completed, Duration::days(1)),
    ] {
      let mut inspection = ehs_core::fixture::inspections(now).remove(0);
      inspection.status = status;
      inspection.due_date = now + due_in;
      store.create_inspection(inspection).await.unwrap();
    }

    let summary = dashboard::summarize(store.as_ref(), now).await.unwrap();
    assert_eq!(summary.inspections_due, 2);
  }

  #[tokio::test]
  async fn training_compliance_is_completed_share() {
    let store = sqlite().await;
    let now   = fixed_now();
    for status in [
      TrainingStatus::Completed,
      TrainingStatus::Completed,
      TrainingStatus::Completed,
      TrainingStatus::Cancelled,
    ] {
      let mut training = ehs_core::fixture::trainings(now).remove(0);
      training.status = status;
      store.create_training(training).await.unwrap();
    }

    let summary = dashboard::summarize(store.as_ref(), now).await.unwrap();
    assert_eq!(summary.training_compliance, 75);
  }

  // ── Failing store ────────────────────────────────────────────────────────────

  #[derive(Debug, thiserror::Error)]
  #[error("store unavailable")]
  struct Unavailable;

  struct FailingStore;

  impl EhsStore for FailingStore {
    type Error = Unavailable;

    async fn list_incidents(&self) -> Result<Vec<Stored<Incident>>, Unavailable> { Err(Unavailable) }

    async fn create_incident(&self, _: Incident) -> Result<Stored<Incident>, Unavailable> {
      Err(Unavailable)
    }

    async fn list_inspections(&self) -> Result<Vec<Stored<Inspection>>, Unavailable> {
      Err(Unavailable)
    }

    async fn create_inspection(&self, _: Inspection) -> Result<Stored<Inspection>, Unavailable> {
      Err(Unavailable)
    }

    async fn list_trainings(&self) -> Result<Vec<Stored<Training>>, Unavailable> { Err(Unavailable) }

    async fn create_training(&self, _: Training) -> Result<Stored<Training>, Unavailable> {
      Err(Unavailable)
    }

    async fn list_permits(&self) -> Result<Vec<Stored<Permit>>, Unavailable> { Err(Unavailable) }

    async fn create_permit(&self, _: Permit) -> Result<Stored<Permit>, Unavailable> {
      Err(Unavailable)
    }

    async fn list_chemicals(&self) -> Result<Vec<Stored<Chemical>>, Unavailable> { Err(Unavailable) }

    async fn create_chemical(&self, _: Chemical) -> Result<Stored<Chemical>, Unavailable> {
      Err(Unavailable)
    }

    async fn count(&self, _: RecordKind, _: CountFilter) -> Result<u64, Unavailable> {
      Err(Unavailable)
    }

    async fn clear(&self, _: RecordKind) -> Result<u64, Unavailable> { Err(Unavailable) }
  }

  #[tokio::test]
  async fn failing_store_lists_are_empty() {
    let store = Arc::new(FailingStore);
    for uri in ["/incidents", "/inspections", "/trainings", "/permits", "/chemicals"] {
      let (status, body) = send(store.clone(), "GET", uri, None).await;
      assert_eq!(status, StatusCode::OK, "{uri}");
      assert_eq!(body, json!([]), "{uri}");
    }
  }

  #[tokio::test]
  async fn failing_store_dashboard_is_all_zero() {
    let (status, body) = send(Arc::new(FailingStore), "GET", "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      serde_json::from_value::<DashboardSummary>(body).unwrap(),
      DashboardSummary::default()
    );
  }

  #[tokio::test]
  async fn failing_store_create_is_server_error() {
    let body = incident_body("Slip", "2025-05-01");
    let (status, body) = send(Arc::new(FailingStore), "POST", "/incidents", Some(body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create incident" }));
  }

  #[tokio::test]
  async fn failing_store_seed_is_server_error() {
    let (status, body) = send(Arc::new(FailingStore), "POST", "/seed", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to seed database" }));
  }
}
