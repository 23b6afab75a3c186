use log::*;

use serde_json::Value as JsonValue;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("unauthorized: {0}")]
  Unauthorized(JsonValue),

  #[error("not found: {0}")]
  NotFound(JsonValue),

  #[error("validation failed: {0}")]
  Validation(JsonValue),

  #[error("bad request: {0}")]
  BadRequest(String),

  // Json error
  #[error("Json error: {source}")]
  JsonError {
    #[from]
    source: serde_json::Error,
  },

  #[error("std io error")]
  IOError {
    #[from]
    source: std::io::Error,
  },

  #[error("config error")]
  ConfigError {
    #[from]
    source: config::ConfigError,
  },

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl Error {
  /// Log internal errors, pass domain conditions through untouched.
  pub fn trace(self) -> Self {
    match self {
      Error::Unauthorized(_) | Error::NotFound(_) | Error::Validation(_) => (),
      ref err => {
        error!("internal error: {:?}", err);
      },
    }
    self
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
