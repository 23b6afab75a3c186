use log::*;

use std::time::Duration;

use async_std::task;
use rand::Rng;
use slug::slugify;

use crate::error::*;
use crate::forms::user::*;
use crate::models::User;
use crate::store::seed;

mod storage;
pub use storage::*;

/// Tracks the current logged-in identity and mirrors it to durable
/// storage.  No credential verification happens anywhere here; every
/// login resolves to the fixed demo identity (explicit non-goal of the
/// mock system).
pub struct SessionManager {
  storage: SessionStorage,
  latency: Duration,
  current: Option<User>,
}

impl SessionManager {
  /// Restores a previously persisted identity, if any.  Absence of
  /// stored data just leaves the session unauthenticated.
  pub fn new(storage: SessionStorage, latency: Duration) -> Result<SessionManager> {
    let current = storage.load()?;
    match current {
      Some(ref user) => info!("session: restored {}", user.username),
      None => debug!("session: no stored identity"),
    }
    Ok(SessionManager {
      storage,
      latency,
      current,
    })
  }

  pub fn current_user(&self) -> Option<&User> {
    self.current.as_ref()
  }

  pub fn is_authenticated(&self) -> bool {
    self.current.is_some()
  }

  /// Always succeeds after the simulated latency, returning the demo
  /// identity and persisting it.
  pub async fn login(&mut self, form: &LoginForm) -> Result<User> {
    form.validate()?;
    self.simulate_latency().await;

    let user = seed::demo_user();
    self.storage.store(&user)?;
    info!("session: logged in as {}", user.username);
    self.current = Some(user.clone());
    Ok(user)
  }

  /// Always succeeds after the simulated latency.  The identity is the
  /// demo profile overwritten with the submitted name/email and a
  /// derived handle.
  pub async fn register(&mut self, form: &RegisterForm) -> Result<User> {
    form.validate()?;
    self.simulate_latency().await;

    let mut user = seed::demo_user();
    user.name = form.name.clone();
    user.email = form.email.clone();
    user.username = derive_username(&form.name);

    self.storage.store(&user)?;
    info!("session: registered {}", user.username);
    self.current = Some(user.clone());
    Ok(user)
  }

  /// Clears the in-memory identity and its durable storage entry.
  pub fn logout(&mut self) -> Result<()> {
    self.storage.clear()?;
    if let Some(user) = self.current.take() {
      info!("session: logged out {}", user.username);
    }
    Ok(())
  }

  async fn simulate_latency(&self) {
    if self.latency > Duration::from_millis(0) {
      debug!("session: simulating {:?} latency", self.latency);
      task::sleep(self.latency).await;
    }
  }
}

/// Unique-looking handle: slugified display name plus a random numeric
/// suffix.
fn derive_username(name: &str) -> String {
  let suffix: u32 = rand::thread_rng().gen_range(0..1000);
  format!("{}{}", slugify(name), suffix)
}
