use log::*;

use std::time::Duration;

use async_std::task;

use crate::models::*;

use super::seed;

/// The Content Repository: exclusive owner of the article and comment
/// collections.  Both collections are newest-first (creation prepends).
///
/// Mutations take `&mut self`, so the single-writer property the mock
/// frontend only had by convention is enforced by the borrow checker.
pub struct ContentService {
  pub(super) articles: Vec<Article>,
  pub(super) comments: Vec<Comment>,
  pub(super) next_article_id: i32,
  pub(super) next_comment_id: i32,
  latency: Duration,
}

impl ContentService {
  /// Build a repository over the seed dataset.
  pub fn new(latency: Duration) -> ContentService {
    Self::from_parts(seed::articles(), seed::comments(), latency)
  }

  /// Build a repository over caller-supplied collections.
  ///
  /// Per-article comment counts are recomputed from the live comments so
  /// the count invariant holds by construction regardless of what the
  /// input claimed.
  pub fn from_parts(
    mut articles: Vec<Article>,
    comments: Vec<Comment>,
    latency: Duration,
  ) -> ContentService {
    for article in articles.iter_mut() {
      article.comment_count = comments
        .iter()
        .filter(|c| c.article_id == article.id)
        .count() as i64;
    }

    let next_article_id = articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
    let next_comment_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;

    info!(
      "ContentService: loaded {} articles, {} comments",
      articles.len(),
      comments.len()
    );

    ContentService {
      articles,
      comments,
      next_article_id,
      next_comment_id,
      latency,
    }
  }

  pub fn articles(&self) -> &[Article] {
    &self.articles
  }

  pub fn comments(&self) -> &[Comment] {
    &self.comments
  }

  pub(super) fn take_article_id(&mut self) -> i32 {
    let id = self.next_article_id;
    self.next_article_id += 1;
    id
  }

  pub(super) fn take_comment_id(&mut self) -> i32 {
    let id = self.next_comment_id;
    self.next_comment_id += 1;
    id
  }

  /// Stand-in for network latency.  No queueing, no cancellation; the
  /// single-threaded caller just waits it out.
  pub(super) async fn simulate_latency(&self) {
    if self.latency > Duration::from_millis(0) {
      debug!("simulating {:?} latency", self.latency);
      task::sleep(self.latency).await;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_comment_counts_are_derived_from_live_comments() {
    let service = ContentService::new(Duration::from_millis(0));
    for article in service.articles() {
      let live = service
        .comments()
        .iter()
        .filter(|c| c.article_id == article.id)
        .count() as i64;
      assert_eq!(article.comment_count, live, "article {}", article.id);
    }
  }

  #[test]
  fn fresh_ids_start_past_the_seed() {
    let mut service = ContentService::new(Duration::from_millis(0));
    let max_article = service.articles().iter().map(|a| a.id).max().unwrap();
    let max_comment = service.comments().iter().map(|c| c.id).max().unwrap();
    assert!(service.take_article_id() > max_article);
    assert!(service.take_comment_id() > max_comment);
  }
}
