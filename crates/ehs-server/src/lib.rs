//! HTTP server assembly for the EHS record store.
//!
//! Loads [`ServerConfig`] and wraps [`ehs_api::api_router`] in the outer
//! router the binary serves.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use config::{Config, ConfigError, Environment, File};
use ehs_core::store::EhsStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

/// Layer built-in defaults, the TOML file at `path` (if it exists), and
/// `EHS_*` environment variables, in increasing precedence.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
  Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 3000)?
    .set_default("database_path", "ehs.db")?
    .add_source(File::from(path).required(false))
    .add_source(Environment::with_prefix("EHS").try_parsing(true))
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the JSON API under `/api`, with request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: EhsStore + 'static,
{
  Router::new()
    .nest("/api", ehs_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use ehs_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ehs-server-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn missing_file_yields_defaults() {
    let dir = scratch_dir();
    let cfg = load_config(&dir.join("absent.toml")).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.database_path, PathBuf::from("ehs.db"));
    std::fs::remove_dir_all(&dir).ok();
  }

  #[test]
  fn file_overrides_defaults() {
    let dir  = scratch_dir();
    let path = dir.join("config.toml");
    std::fs::write(&path, "port = 8080\ndatabase_path = \"~/ehs/records.db\"\n").unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_path, PathBuf::from("~/ehs/records.db"));
    std::fs::remove_dir_all(&dir).ok();
  }

  #[test]
  fn tilde_expands_only_as_a_prefix() {
    assert_eq!(expand_tilde(Path::new("data/ehs.db")), PathBuf::from("data/ehs.db"));
    assert_eq!(expand_tilde(Path::new("/srv/~/ehs.db")), PathBuf::from("/srv/~/ehs.db"));
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(expand_tilde(Path::new("~/ehs.db")), PathBuf::from(home).join("ehs.db"));
    }
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());

    let req  = Request::get("/api/dashboard").body(Body::empty()).unwrap();
    let resp = app(store.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req  = Request::get("/dashboard").body(Body::empty()).unwrap();
    let resp = app(store).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
