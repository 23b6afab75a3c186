use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

/// An identity as captured at login/registration time.
///
/// Users embedded in articles and comments are snapshots taken when the
/// content was authored; editing a profile later does not rewrite
/// previously authored content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
  pub id: i32,
  pub name: String,
  pub username: String,
  pub email: String,
  pub avatar: String,
  pub bio: String,
  pub joined_at: NaiveDateTime,
  pub followers: i64,
  pub following: i64,
}
