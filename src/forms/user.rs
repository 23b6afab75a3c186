use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::*;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginForm {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterForm {
  pub name: String,
  pub email: String,
  pub password: String,
}

impl LoginForm {
  pub fn validate(&self) -> Result<()> {
    if self.email.trim().is_empty() || self.password.is_empty() {
      return Err(Error::Validation(json!({
        "error": "email and password are required",
      })));
    }
    Ok(())
  }
}

impl RegisterForm {
  pub fn validate(&self) -> Result<()> {
    let mut missing = Vec::new();
    if self.name.trim().is_empty() {
      missing.push("name");
    }
    if self.email.trim().is_empty() {
      missing.push("email");
    }
    if self.password.is_empty() {
      missing.push("password");
    }
    if missing.is_empty() {
      Ok(())
    } else {
      Err(Error::Validation(json!({
        "error": "missing required fields",
        "fields": missing,
      })))
    }
  }
}
