//! SQL schema for the EHS SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Timestamps are fixed-width RFC 3339 UTC strings, so text comparison and
/// `ORDER BY` agree with chronological order.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS incidents (
    id           TEXT PRIMARY KEY,
    title        TEXT NOT NULL,
    description  TEXT NOT NULL,
    severity     TEXT NOT NULL,   -- 'Low' | 'Medium' | 'High'
    status       TEXT NOT NULL,
    category     TEXT NOT NULL,
    location     TEXT NOT NULL,
    reported_by  TEXT NOT NULL,
    reported_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS inspections (
    id           TEXT PRIMARY KEY,
    title        TEXT NOT NULL,
    kind         TEXT NOT NULL,
    location     TEXT NOT NULL,
    inspector    TEXT NOT NULL,
    status       TEXT NOT NULL,
    score        INTEGER CHECK (score BETWEEN 0 AND 100),
    findings     TEXT,
    due_date     TEXT NOT NULL,
    completed_at TEXT
);

CREATE TABLE IF NOT EXISTS trainings (
    id            TEXT PRIMARY KEY,
    title         TEXT NOT NULL,
    description   TEXT NOT NULL,
    kind          TEXT NOT NULL,
    instructor    TEXT NOT NULL,
    location      TEXT NOT NULL,
    start_date    TEXT NOT NULL,
    end_date      TEXT NOT NULL,
    max_attendees INTEGER NOT NULL,
    attendees     TEXT NOT NULL DEFAULT '[]',   -- JSON array of names
    status        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS permits (
    id           TEXT PRIMARY KEY,
    title        TEXT NOT NULL,
    kind         TEXT NOT NULL,
    location     TEXT NOT NULL,
    requested_by TEXT NOT NULL,
    approved_by  TEXT,
    status       TEXT NOT NULL,
    start_date   TEXT NOT NULL,
    end_date     TEXT NOT NULL,
    hazards      TEXT NOT NULL,
    controls     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS chemicals (
    id             TEXT PRIMARY KEY,
    name           TEXT NOT NULL,
    cas_number     TEXT,
    location       TEXT NOT NULL,
    quantity       TEXT NOT NULL,
    unit           TEXT NOT NULL,
    hazard_class   TEXT NOT NULL,
    sds_url        TEXT,
    expiry_date    TEXT,
    last_inspected TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS incidents_reported_idx ON incidents(reported_at);
CREATE INDEX IF NOT EXISTS inspections_due_idx    ON inspections(due_date);
CREATE INDEX IF NOT EXISTS trainings_start_idx    ON trainings(start_date);
CREATE INDEX IF NOT EXISTS permits_start_idx      ON permits(start_date);
CREATE INDEX IF NOT EXISTS chemicals_name_idx     ON chemicals(name);

PRAGMA user_version = 1;
";
