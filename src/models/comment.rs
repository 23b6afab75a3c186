use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

use crate::models::*;

/// A threaded reply.  `parent_id = None` marks a root comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id: i32,
  pub article_id: i32,
  pub parent_id: Option<i32>,
  /// Author snapshot captured when the comment was written.
  pub author: User,
  pub content: String,
  pub created_at: NaiveDateTime,
  pub like_count: i64,
  pub liked: bool,
}

impl Comment {
  pub fn is_root(&self) -> bool {
    self.parent_id.is_none()
  }
}
