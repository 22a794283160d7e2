//! The SQLite implementation of [`EhsStore`].

use std::path::Path;

use ehs_core::{
  RecordKind, Stored,
  chemical::Chemical,
  incident::Incident,
  inspection::Inspection,
  permit::Permit,
  store::{CountFilter, EhsStore, StatusFilter},
  training::Training,
};
use rusqlite::types::Value;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{encode_dt, encode_uuid},
  schema::SCHEMA,
  table::Table,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An EHS record store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// All rows of `T`'s table, in its fixed order.
  async fn list<T: Table>(&self) -> Result<Vec<Stored<T>>> {
    let rows: Vec<T::Row> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&T::select_sql())?;
        let rows = stmt
          .query_map([], |row| T::read(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    rows.into_iter().map(T::decode).collect()
  }

  /// Assign a fresh id to `record` and insert it.
  async fn insert<T: Table>(&self, record: T) -> Result<Stored<T>> {
    let id = Uuid::new_v4();
    let mut params = vec![Value::Text(encode_uuid(id))];
    params.extend(record.encode()?);

    self
      .conn
      .call(move |conn| {
        conn.execute(&T::insert_sql(), rusqlite::params_from_iter(params))?;
        Ok(())
      })
      .await?;

    Ok(Stored::new(id, record))
  }

  async fn count_rows<T: Table>(&self, filter: CountFilter) -> Result<u64> {
    let mut conds: Vec<String> = vec![];
    let mut params: Vec<Value> = vec![];

    if let Some(status) = filter.status {
      if !T::KIND.has_status() {
        return Err(Error::NoStatus(T::KIND));
      }
      let (op, label) = match status {
        StatusFilter::Is(label) => ("=", label),
        StatusFilter::IsNot(label) => ("!=", label),
      };
      params.push(Value::Text(label));
      conds.push(format!("status {op} ?{}", params.len()));
    }
    if let Some(since) = filter.since {
      params.push(Value::Text(encode_dt(since)));
      conds.push(format!("{} >= ?{}", T::TIMELINE_COLUMN, params.len()));
    }
    if let Some(until) = filter.until {
      params.push(Value::Text(encode_dt(until)));
      conds.push(format!("{} <= ?{}", T::TIMELINE_COLUMN, params.len()));
    }

    let where_clause = if conds.is_empty() {
      String::new()
    } else {
      format!(" WHERE {}", conds.join(" AND "))
    };
    let sql = format!("SELECT COUNT(*) FROM {}{where_clause}", T::NAME);

    let count: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(&sql, rusqlite::params_from_iter(params), |row| row.get(0))?)
      })
      .await?;

    Ok(count.unsigned_abs())
  }

  async fn clear_rows<T: Table>(&self) -> Result<u64> {
    let removed = self
      .conn
      .call(|conn| Ok(conn.execute(&format!("DELETE FROM {}", T::NAME), [])?))
      .await?;
    Ok(removed as u64)
  }
}

// ─── EhsStore impl ───────────────────────────────────────────────────────────

impl EhsStore for SqliteStore {
  type Error = Error;

  async fn list_incidents(&self) -> Result<Vec<Stored<Incident>>> { self.list().await }

  async fn create_incident(&self, incident: Incident) -> Result<Stored<Incident>> {
    self.insert(incident).await
  }

  async fn list_inspections(&self) -> Result<Vec<Stored<Inspection>>> { self.list().await }

  async fn create_inspection(&self, inspection: Inspection) -> Result<Stored<Inspection>> {
    self.insert(inspection).await
  }

  async fn list_trainings(&self) -> Result<Vec<Stored<Training>>> { self.list().await }

  async fn create_training(&self, training: Training) -> Result<Stored<Training>> {
    self.insert(training).await
  }

  async fn list_permits(&self) -> Result<Vec<Stored<Permit>>> { self.list().await }

  async fn create_permit(&self, permit: Permit) -> Result<Stored<Permit>> {
    self.insert(permit).await
  }

  async fn list_chemicals(&self) -> Result<Vec<Stored<Chemical>>> { self.list().await }

  async fn create_chemical(&self, chemical: Chemical) -> Result<Stored<Chemical>> {
    self.insert(chemical).await
  }

  async fn count(&self, kind: RecordKind, filter: CountFilter) -> Result<u64> {
    match kind {
      RecordKind::Incident => self.count_rows::<Incident>(filter).await,
      RecordKind::Inspection => self.count_rows::<Inspection>(filter).await,
      RecordKind::Training => self.count_rows::<Training>(filter).await,
      RecordKind::Permit => self.count_rows::<Permit>(filter).await,
      RecordKind::Chemical => self.count_rows::<Chemical>(filter).await,
    }
  }

  async fn clear(&self, kind: RecordKind) -> Result<u64> {
    match kind {
      RecordKind::Incident => self.clear_rows::<Incident>().await,
      RecordKind::Inspection => self.clear_rows::<Inspection>().await,
      RecordKind::Training => self.clear_rows::<Training>().await,
      RecordKind::Permit => self.clear_rows::<Permit>().await,
      RecordKind::Chemical => self.clear_rows::<Chemical>().await,
    }
  }
}
