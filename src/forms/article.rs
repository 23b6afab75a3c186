use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::*;
use crate::models::Category;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
  pub title: String,
  pub body: String,
  /// Optional; derived from the body when absent.
  #[serde(default)]
  pub excerpt: Option<String>,
  pub cover_image: String,
  pub category: Category,
  #[serde(default)]
  pub tags: Vec<String>,
}

impl CreateArticle {
  /// Required-field check, run before the mutation is attempted.
  pub fn validate(&self) -> Result<()> {
    let mut missing = Vec::new();
    if self.title.trim().is_empty() {
      missing.push("title");
    }
    if self.body.trim().is_empty() {
      missing.push("body");
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
