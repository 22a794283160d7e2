//! Per-kind table mappings.
//!
//! Each record type knows its table name, column list, sort order and how to
//! move between its domain struct and raw column values.
//! [`SqliteStore`](crate::SqliteStore) is written once against [`Table`].

use ehs_core::{
  Record, Stored,
  chemical::Chemical,
  incident::Incident,
  inspection::Inspection,
  permit::Permit,
  training::{Training, attendee_list},
};
use rusqlite::{Row, types::Value};

use crate::{
  Result,
  encode::{
    decode_dt, decode_int, decode_label, decode_opt_dt, decode_uuid, dt, int, opt_dt, opt_text,
    text,
  },
};

pub trait Table: Record {
  const NAME: &'static str;
  /// Columns after `id`, in bind order.
  const COLUMNS: &'static [&'static str];
  const ORDER_BY: &'static str;
  /// Column bounded by [`CountFilter`](ehs_core::store::CountFilter) dates.
  const TIMELINE_COLUMN: &'static str;

  /// Raw column values, read on the database thread and decoded off it.
  type Row: Send + 'static;

  /// Read a row selected with [`Table::select_sql`]; column 0 is `id`.
  fn read(row: &Row<'_>) -> rusqlite::Result<Self::Row>;

  fn decode(row: Self::Row) -> Result<Stored<Self>>;

  /// Values for [`Table::COLUMNS`], in order.
  fn encode(&self) -> Result<Vec<Value>>;

  fn select_sql() -> String {
    format!(
      "SELECT id, {} FROM {} ORDER BY {}",
      Self::COLUMNS.join(", "),
      Self::NAME,
      Self::ORDER_BY
    )
  }

  fn insert_sql() -> String {
    let placeholders = (1..=Self::COLUMNS.len() + 1)
      .map(|i| format!("?{i}"))
      .collect::<Vec<_>>()
      .join(", ");
    format!(
      "INSERT INTO {} (id, {}) VALUES ({placeholders})",
      Self::NAME,
      Self::COLUMNS.join(", ")
    )
  }
}

// ─── Incidents ───────────────────────────────────────────────────────────────

pub struct IncidentRow {
  id:          String,
  title:       String,
  description: String,
  severity:    String,
  status:      String,
  category:    String,
  location:    String,
  reported_by: String,
  reported_at: String,
}

impl Table for Incident {
  const NAME: &'static str = "incidents";
  const COLUMNS: &'static [&'static str] = &[
    "title", "description", "severity", "status", "category", "location",
    "reported_by", "reported_at",
  ];
  const ORDER_BY: &'static str = "reported_at DESC";
  const TIMELINE_COLUMN: &'static str = "reported_at";

  type Row = IncidentRow;

  fn read(row: &Row<'_>) -> rusqlite::Result<IncidentRow> {
    Ok(IncidentRow {
      id:          row.get(0)?,
      title:       row.get(1)?,
      description: row.get(2)?,
      severity:    row.get(3)?,
      status:      row.get(4)?,
      category:    row.get(5)?,
      location:    row.get(6)?,
      reported_by: row.get(7)?,
      reported_at: row.get(8)?,
    })
  }

  fn decode(row: IncidentRow) -> Result<Stored<Self>> {
    Ok(Stored::new(decode_uuid(&row.id)?, Incident {
      title:       row.title,
      description: row.description,
      severity:    decode_label("severity", &row.severity)?,
      status:      decode_label("status", &row.status)?,
      category:    row.category,
      location:    row.location,
      reported_by: row.reported_by,
      reported_at: decode_dt(&row.reported_at)?,
    }))
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      text(&self.title),
      text(&self.description),
      text(self.severity.as_ref()),
      text(self.status.as_ref()),
      text(&self.category),
      text(&self.location),
      text(&self.reported_by),
      dt(self.reported_at),
    ])
  }
}

// ─── Inspections ─────────────────────────────────────────────────────────────

pub struct InspectionRow {
  id:           String,
  title:        String,
  kind:         String,
  location:     String,
  inspector:    String,
  status:       String,
  score:        Option<i64>,
  findings:     Option<String>,
  due_date:     String,
  completed_at: Option<String>,
}

impl Table for Inspection {
  const NAME: &'static str = "inspections";
  const COLUMNS: &'static [&'static str] = &[
    "title", "kind", "location", "inspector", "status", "score", "findings",
    "due_date", "completed_at",
  ];
  const ORDER_BY: &'static str = "due_date ASC";
  const TIMELINE_COLUMN: &'static str = "due_date";

  type Row = InspectionRow;

  fn read(row: &Row<'_>) -> rusqlite::Result<InspectionRow> {
    Ok(InspectionRow {
      id:           row.get(0)?,
      title:        row.get(1)?,
      kind:         row.get(2)?,
      location:     row.get(3)?,
      inspector:    row.get(4)?,
      status:       row.get(5)?,
      score:        row.get(6)?,
      findings:     row.get(7)?,
      due_date:     row.get(8)?,
      completed_at: row.get(9)?,
    })
  }

  fn decode(row: InspectionRow) -> Result<Stored<Self>> {
    Ok(Stored::new(decode_uuid(&row.id)?, Inspection {
      title:        row.title,
      kind:         row.kind,
      location:     row.location,
      inspector:    row.inspector,
      status:       decode_label("status", &row.status)?,
      score:        row.score.map(|s| decode_int("score", s)).transpose()?,
      findings:     row.findings,
      due_date:     decode_dt(&row.due_date)?,
      completed_at: decode_opt_dt(row.completed_at.as_deref())?,
    }))
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      text(&self.title),
      text(&self.kind),
      text(&self.location),
      text(&self.inspector),
      text(self.status.as_ref()),
      self.score.map_or(Value::Null, int),
      opt_text(self.findings.as_deref()),
      dt(self.due_date),
      opt_dt(self.completed_at),
    ])
  }
}

// ─── Trainings ───────────────────────────────────────────────────────────────

pub struct TrainingRow {
  id:            String,
  title:         String,
  description:   String,
  kind:          String,
  instructor:    String,
  location:      String,
  start_date:    String,
  end_date:      String,
  max_attendees: i64,
  attendees:     String,
  status:        String,
}

impl Table for Training {
  const NAME: &'static str = "trainings";
  const COLUMNS: &'static [&'static str] = &[
    "title", "description", "kind", "instructor", "location", "start_date",
    "end_date", "max_attendees", "attendees", "status",
  ];
  const ORDER_BY: &'static str = "start_date ASC";
  const TIMELINE_COLUMN: &'static str = "start_date";

  type Row = TrainingRow;

  fn read(row: &Row<'_>) -> rusqlite::Result<TrainingRow> {
    Ok(TrainingRow {
      id:            row.get(0)?,
      title:         row.get(1)?,
      description:   row.get(2)?,
      kind:          row.get(3)?,
      instructor:    row.get(4)?,
      location:      row.get(5)?,
      start_date:    row.get(6)?,
      end_date:      row.get(7)?,
      max_attendees: row.get(8)?,
      attendees:     row.get(9)?,
      status:        row.get(10)?,
    })
  }

  fn decode(row: TrainingRow) -> Result<Stored<Self>> {
    Ok(Stored::new(decode_uuid(&row.id)?, Training {
      title:         row.title,
      description:   row.description,
      kind:          row.kind,
      instructor:    row.instructor,
      location:      row.location,
      start_date:    decode_dt(&row.start_date)?,
      end_date:      decode_dt(&row.end_date)?,
      max_attendees: decode_int("max_attendees", row.max_attendees)?,
      attendees:     attendee_list::decode(&row.attendees)?,
      status:        decode_label("status", &row.status)?,
    }))
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      text(&self.title),
      text(&self.description),
      text(&self.kind),
      text(&self.instructor),
      text(&self.location),
      dt(self.start_date),
      dt(self.end_date),
      int(self.max_attendees),
      Value::Text(attendee_list::encode(&self.attendees)?),
      text(self.status.as_ref()),
    ])
  }
}

// ─── Permits ─────────────────────────────────────────────────────────────────

pub struct PermitRow {
  id:           String,
  title:        String,
  kind:         String,
  location:     String,
  requested_by: String,
  approved_by:  Option<String>,
  status:       String,
  start_date:   String,
  end_date:     String,
  hazards:      String,
  controls:     String,
}

impl Table for Permit {
  const NAME: &'static str = "permits";
  const COLUMNS: &'static [&'static str] = &[
    "title", "kind", "location", "requested_by", "approved_by", "status",
    "start_date", "end_date", "hazards", "controls",
  ];
  const ORDER_BY: &'static str = "start_date DESC";
  const TIMELINE_COLUMN: &'static str = "start_date";

  type Row = PermitRow;

  fn read(row: &Row<'_>) -> rusqlite::Result<PermitRow> {
    Ok(PermitRow {
      id:           row.get(0)?,
      title:        row.get(1)?,
      kind:         row.get(2)?,
      location:     row.get(3)?,
      requested_by: row.get(4)?,
      approved_by:  row.get(5)?,
      status:       row.get(6)?,
      start_date:   row.get(7)?,
      end_date:     row.get(8)?,
      hazards:      row.get(9)?,
      controls:     row.get(10)?,
    })
  }

  fn decode(row: PermitRow) -> Result<Stored<Self>> {
    Ok(Stored::new(decode_uuid(&row.id)?, Permit {
      title:        row.title,
      kind:         row.kind,
      location:     row.location,
      requested_by: row.requested_by,
      approved_by:  row.approved_by,
      status:       decode_label("status", &row.status)?,
      start_date:   decode_dt(&row.start_date)?,
      end_date:     decode_dt(&row.end_date)?,
      hazards:      row.hazards,
      controls:     row.controls,
    }))
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      text(&self.title),
      text(&self.kind),
      text(&self.location),
      text(&self.requested_by),
      opt_text(self.approved_by.as_deref()),
      text(self.status.as_ref()),
      dt(self.start_date),
      dt(self.end_date),
      text(&self.hazards),
      text(&self.controls),
    ])
  }
}

// ─── Chemicals ───────────────────────────────────────────────────────────────

pub struct ChemicalRow {
  id:             String,
  name:           String,
  cas_number:     Option<String>,
  location:       String,
  quantity:       String,
  unit:           String,
  hazard_class:   String,
  sds_url:        Option<String>,
  expiry_date:    Option<String>,
  last_inspected: String,
}

impl Table for Chemical {
  const NAME: &'static str = "chemicals";
  const COLUMNS: &'static [&'static str] = &[
    "name", "cas_number", "location", "quantity", "unit", "hazard_class",
    "sds_url", "expiry_date", "last_inspected",
  ];
  const ORDER_BY: &'static str = "name ASC";
  const TIMELINE_COLUMN: &'static str = "last_inspected";

  type Row = ChemicalRow;

  fn read(row: &Row<'_>) -> rusqlite::Result<ChemicalRow> {
    Ok(ChemicalRow {
      id:             row.get(0)?,
      name:           row.get(1)?,
      cas_number:     row.get(2)?,
      location:       row.get(3)?,
      quantity:       row.get(4)?,
      unit:           row.get(5)?,
      hazard_class:   row.get(6)?,
      sds_url:        row.get(7)?,
      expiry_date:    row.get(8)?,
      last_inspected: row.get(9)?,
    })
  }

  fn decode(row: ChemicalRow) -> Result<Stored<Self>> {
    Ok(Stored::new(decode_uuid(&row.id)?, Chemical {
      name:           row.name,
      cas_number:     row.cas_number,
      location:       row.location,
      quantity:       row.quantity,
      unit:           row.unit,
      hazard_class:   row.hazard_class,
      sds_url:        row.sds_url,
      expiry_date:    decode_opt_dt(row.expiry_date.as_deref())?,
      last_inspected: decode_dt(&row.last_inspected)?,
    }))
  }

  fn encode(&self) -> Result<Vec<Value>> {
    Ok(vec![
      text(&self.name),
      opt_text(self.cas_number.as_deref()),
      text(&self.location),
      text(&self.quantity),
      text(&self.unit),
      text(&self.hazard_class),
      opt_text(self.sds_url.as_deref()),
      opt_dt(self.expiry_date),
      dt(self.last_inspected),
    ])
  }
}
