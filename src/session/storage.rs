use log::*;

use std::fs;
use std::path::PathBuf;

use crate::error::*;
use crate::models::User;

/// The single durable storage slot: one JSON-serialized `User` at a
/// configured path.  Written on login/register, removed on logout, read
/// once at startup.
pub struct SessionStorage {
  path: PathBuf,
}

impl SessionStorage {
  pub fn new<P: Into<PathBuf>>(path: P) -> SessionStorage {
    SessionStorage { path: path.into() }
  }

  /// Restore the persisted identity.  An absent file is not an error.
  pub fn load(&self) -> Result<Option<User>> {
    if !self.path.exists() {
      return Ok(None);
    }
    let data = fs::read_to_string(&self.path)?;
    let user: User = serde_json::from_str(&data)?;
    debug!("session storage: restored user {}", user.username);
    Ok(Some(user))
  }

  pub fn store(&self, user: &User) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&self.path, serde_json::to_string(user)?)?;
    debug!("session storage: stored user {}", user.username);
    Ok(())
  }

  /// Drop the persisted identity.  An absent file is tolerated.
  pub fn clear(&self) -> Result<()> {
    if self.path.exists() {
      fs::remove_file(&self.path)?;
    }
    Ok(())
  }
}
