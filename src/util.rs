// text helpers shared by article creation.

/// Words per minute assumed when deriving an article's read time.
const WORDS_PER_MINUTE: u32 = 200;

/// Characters kept when deriving an excerpt from the article body.
const EXCERPT_LEN: usize = 150;

pub fn word_count(text: &str) -> u32 {
  text.split_whitespace().count() as u32
}

/// Read time in whole minutes, rounded up.
pub fn read_time(body: &str) -> u32 {
  let words = word_count(body);
  (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE
}

/// Derive an excerpt from the body: the first 150 characters plus an
/// ellipsis marker.  Char-aware so multi-byte text can't split badly.
pub fn make_excerpt(body: &str) -> String {
  let mut excerpt: String = body.chars().take(EXCERPT_LEN).collect();
  excerpt.push_str("...");
  excerpt
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn read_time_rounds_up() {
    let body = vec!["word"; 400].join(" ");
    assert_eq!(read_time(&body), 2);

    let body = vec!["word"; 401].join(" ");
    assert_eq!(read_time(&body), 3);
  }

  #[test]
  fn read_time_single_word() {
    assert_eq!(read_time("hello"), 1);
  }

  #[test]
  fn excerpt_truncates_to_150_chars() {
    let body = "x".repeat(400);
    let excerpt = make_excerpt(&body);
    assert_eq!(excerpt.chars().count(), 153);
    assert!(excerpt.ends_with("..."));
  }

  #[test]
  fn excerpt_of_short_body_keeps_everything() {
    assert_eq!(make_excerpt("short body"), "short body...");
  }
}
