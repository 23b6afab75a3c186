use std::time::Duration;

use super::AppConfig;

use crate::error::*;
use crate::session::{SessionManager, SessionStorage};
use crate::store::ContentService;

const DEFAULT_STORAGE: &str = ".eloquent/session.json";
const DEFAULT_LATENCY_MS: i64 = 1000;

/// The whole application state in one explicit object: the content
/// repository and the session manager, each the sole owner of its
/// collections.  Construction is the init lifecycle (seed load plus
/// session restore).
pub struct AppState {
  pub content: ContentService,
  pub session: SessionManager,
}

impl AppState {
  pub fn new(config: &AppConfig) -> Result<AppState> {
    let storage = config
      .get_path("session.storage")?
      .unwrap_or_else(|| DEFAULT_STORAGE.into());
    let session_latency = config
      .get_int("session.latency_ms")?
      .unwrap_or(DEFAULT_LATENCY_MS);
    let content_latency = config
      .get_int("content.latency_ms")?
      .unwrap_or(DEFAULT_LATENCY_MS);

    let session = SessionManager::new(
      SessionStorage::new(storage),
      Duration::from_millis(session_latency as u64),
    )?;
    let content = ContentService::new(Duration::from_millis(content_latency as u64));

    Ok(AppState { content, session })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_falls_back_to_defaults() {
    let state = AppState::new(&AppConfig::empty()).unwrap();
    assert!(!state.content.articles().is_empty());
    assert!(!state.content.comments().is_empty());
  }
}
