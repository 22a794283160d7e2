//! Record types, the store trait and the dashboard arithmetic for the EHS
//! record store.
//!
//! No HTTP or database dependencies live here.

pub mod chemical;
pub mod error;
pub mod fixture;
pub mod incident;
pub mod inspection;
pub mod permit;
pub mod record;
pub mod store;
pub mod summary;
pub mod time;
pub mod training;

pub use error::{Error, Result};
pub use record::{Record, RecordKind, Stored};
