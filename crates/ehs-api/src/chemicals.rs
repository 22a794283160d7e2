//! Chemical inventory endpoints: `GET /chemicals`, `POST /chemicals`.

use std::future::Future;

use chrono::{DateTime, Utc};
use ehs_core::{
  Stored,
  chemical::Chemical,
  store::EhsStore,
  time::{non_blank, parse_optional_timestamp},
};
use serde::Deserialize;

use crate::resource::Resource;

/// Body for `POST /chemicals`. `lastInspected` is stamped with the time of
/// the request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalBody {
  pub name:         String,
  #[serde(default)]
  pub cas_number:   Option<String>,
  pub location:     String,
  pub quantity:     String,
  pub unit:         String,
  pub hazard_class: String,
  #[serde(default)]
  pub sds_url:      Option<String>,
  #[serde(default)]
  pub expiry_date:  Option<String>,
}

impl Resource for Chemical {
  type Body = ChemicalBody;

  fn from_body(body: ChemicalBody, now: DateTime<Utc>) -> ehs_core::Result<Self> {
    Ok(Chemical {
      name: body.name,
      cas_number: non_blank(body.cas_number),
      location: body.location,
      quantity: body.quantity,
      unit: body.unit,
      hazard_class: body.hazard_class,
      sds_url: non_blank(body.sds_url),
      expiry_date: parse_optional_timestamp(body.expiry_date.as_deref())?,
      last_inspected: now,
    })
  }

  fn list<S: EhsStore>(
    store: &S,
  ) -> impl Future<Output = Result<Vec<Stored<Self>>, S::Error>> + Send + '_ {
    store.list_chemicals()
  }

  fn create<S: EhsStore>(
    store: &S,
    record: Self,
  ) -> impl Future<Output = Result<Stored<Self>, S::Error>> + Send + '_ {
    store.create_chemical(record)
  }
}
