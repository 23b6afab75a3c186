use log::*;

use std::collections::HashSet;

use serde_json::json;

use crate::error::*;
use crate::forms::comment::*;
use crate::models::*;

use super::ContentService;

impl ContentService {
  /// All live comments for one article, in storage order (newest first).
  pub fn comments_for_article(&self, article_id: i32) -> Vec<&Comment> {
    self
      .comments
      .iter()
      .filter(|c| c.article_id == article_id)
      .collect()
  }

  /// Attach a comment to an article, optionally under a parent comment.
  /// Requires an authenticated author; commits after the simulated
  /// latency and bumps the owning article's comment count.
  pub async fn add_comment(
    &mut self,
    form: &AddComment,
    author: Option<&User>,
  ) -> Result<Comment> {
    let author = author.ok_or_else(|| {
      Error::Unauthorized(json!({
        "error": "You must be logged in to add a comment",
      }))
    })?;
    form.validate()?;

    // The owning article must exist before anything commits.
    self.get_article_by_id(form.article_id)?;

    // A parent must exist and belong to the same article.  Fresh ids plus
    // an existing parent mean a parent chain can never form a cycle.
    if let Some(parent_id) = form.parent_id {
      let parent = self.comments.iter().find(|c| c.id == parent_id).ok_or_else(|| {
        Error::NotFound(json!({
          "error": format!("Parent comment {} not found", parent_id),
        }))
      })?;
      if parent.article_id != form.article_id {
        return Err(Error::Validation(json!({
          "error": "Parent comment belongs to a different article",
        })));
      }
    }

    self.simulate_latency().await;

    let comment = Comment {
      id: self.take_comment_id(),
      article_id: form.article_id,
      parent_id: form.parent_id,
      author: author.clone(),
      content: form.content.clone(),
      created_at: chrono::Utc::now().naive_utc(),
      like_count: 0,
      liked: false,
    };

    info!(
      "add_comment: id={} article={} parent={:?}",
      comment.id, comment.article_id, comment.parent_id
    );
    self.comments.insert(0, comment.clone());
    if let Some(article) = self.articles.iter_mut().find(|a| a.id == form.article_id) {
      article.comment_count += 1;
    }
    Ok(comment)
  }

  /// Toggle the viewer's like on a comment; unknown ids are swallowed.
  pub fn like_comment(&mut self, id: i32) {
    match self.comments.iter_mut().find(|c| c.id == id) {
      Some(comment) => {
        comment.liked = !comment.liked;
        if comment.liked {
          comment.like_count += 1;
        } else {
          comment.like_count -= 1;
        }
      },
      None => {
        warn!("like_comment: comment {} not found, ignoring", id);
      },
    }
  }

  /// Remove a comment and every comment transitively rooted under it in
  /// one pass, then decrement the owning article's comment count by the
  /// number removed (never below zero).  Returns the number removed.
  pub fn delete_comment(&mut self, id: i32) -> usize {
    let article_id = match self.comments.iter().find(|c| c.id == id) {
      Some(comment) => comment.article_id,
      None => {
        warn!("delete_comment: comment {} not found, ignoring", id);
        return 0;
      },
    };

    // Breadth-first closure over the flat collection, unbounded depth.
    let mut doomed: HashSet<i32> = HashSet::new();
    doomed.insert(id);
    let mut frontier = vec![id];
    while let Some(parent_id) = frontier.pop() {
      for child in self.comments.iter() {
        if child.parent_id == Some(parent_id) && doomed.insert(child.id) {
          frontier.push(child.id);
        }
      }
    }

    let before = self.comments.len();
    self.comments.retain(|c| !doomed.contains(&c.id));
    let removed = before - self.comments.len();

    if let Some(article) = self.articles.iter_mut().find(|a| a.id == article_id) {
      article.comment_count = (article.comment_count - removed as i64).max(0);
    }
    info!("delete_comment: id={} removed={}", id, removed);
    removed
  }

  /// Replace a comment's content in place.  No edit history is kept;
  /// unknown ids are swallowed.
  pub fn update_comment(&mut self, id: i32, content: &str) {
    match self.comments.iter_mut().find(|c| c.id == id) {
      Some(comment) => {
        comment.content = content.to_string();
      },
      None => {
        warn!("update_comment: comment {} not found, ignoring", id);
      },
    }
  }
}
