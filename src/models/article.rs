use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

use crate::models::*;

/// Closed category vocabulary.  Used both as a filter and as a
/// create-article constraint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Technology,
  Design,
  Business,
  Lifestyle,
  Health,
  Education,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Technology,
    Category::Design,
    Category::Business,
    Category::Lifestyle,
    Category::Health,
    Category::Education,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Technology => "technology",
      Category::Design => "design",
      Category::Business => "business",
      Category::Lifestyle => "lifestyle",
      Category::Health => "health",
      Category::Education => "education",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL
      .iter()
      .find(|c| c.as_str() == s)
      .copied()
      .ok_or(())
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub id: i32,
  pub title: String,
  pub body: String,
  pub excerpt: String,
  pub cover_image: String,
  pub published_at: NaiveDateTime,
  /// Minutes, derived from the body's word count at creation.
  pub read_time: u32,
  pub category: Category,
  pub tags: Vec<String>,
  /// Author snapshot captured at publish time.
  pub author: User,
  pub like_count: i64,
  pub comment_count: i64,
  pub liked: bool,
  pub bookmarked: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_round_trips_through_str() {
    for cat in Category::ALL.iter() {
      assert_eq!(cat.as_str().parse::<Category>(), Ok(*cat));
    }
  }

  #[test]
  fn unknown_category_does_not_parse() {
    assert!("sports".parse::<Category>().is_err());
    assert!("Technology".parse::<Category>().is_err());
  }
}
