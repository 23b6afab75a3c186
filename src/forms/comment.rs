use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddComment {
  pub article_id: i32,
  /// None attaches a root comment.
  #[serde(default)]
  pub parent_id: Option<i32>,
  pub content: String,
}

impl AddComment {
  pub fn validate(&self) -> Result<()> {
    if self.content.trim().is_empty() {
      return Err(Error::Validation(json!({
        "error": "comment content must not be empty",
      })));
    }
    Ok(())
  }
}
