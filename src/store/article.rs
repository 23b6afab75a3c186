use log::*;

use serde_json::json;

use crate::error::*;
use crate::forms::article::*;
use crate::models::*;
use crate::util;

use super::ContentService;

impl ContentService {
  pub fn get_article_by_id(&self, id: i32) -> Result<&Article> {
    self.articles.iter().find(|a| a.id == id).ok_or_else(|| {
      Error::NotFound(json!({
        "error": format!("Article with id {} not found", id),
      }))
    })
  }

  /// Publish a new article.  Requires an authenticated author; commits
  /// after the simulated latency.  The new article is prepended so the
  /// collection stays newest-first.
  pub async fn create_article(
    &mut self,
    form: &CreateArticle,
    author: Option<&User>,
  ) -> Result<Article> {
    let author = author.ok_or_else(|| {
      Error::Unauthorized(json!({
        "error": "You must be logged in to create an article",
      }))
    })?;
    form.validate()?;

    self.simulate_latency().await;

    let excerpt = match form.excerpt {
      Some(ref excerpt) if !excerpt.trim().is_empty() => excerpt.clone(),
      _ => util::make_excerpt(&form.body),
    };

    let article = Article {
      id: self.take_article_id(),
      title: form.title.clone(),
      body: form.body.clone(),
      excerpt,
      cover_image: form.cover_image.clone(),
      published_at: chrono::Utc::now().naive_utc(),
      read_time: util::read_time(&form.body),
      category: form.category,
      tags: form.tags.clone(),
      author: author.clone(),
      like_count: 0,
      comment_count: 0,
      liked: false,
      bookmarked: false,
    };

    info!("create_article: id={} title={:?}", article.id, article.title);
    self.articles.insert(0, article.clone());
    Ok(article)
  }

  /// Toggle the viewer's like.  Flag and count always move together.
  /// An unknown id is logged and swallowed rather than surfaced.
  pub fn like_article(&mut self, id: i32) {
    match self.articles.iter_mut().find(|a| a.id == id) {
      Some(article) => {
        article.liked = !article.liked;
        if article.liked {
          article.like_count += 1;
        } else {
          article.like_count -= 1;
        }
      },
      None => {
        warn!("like_article: article {} not found, ignoring", id);
      },
    }
  }

  /// Toggle the viewer's bookmark.  No count side effect.
  pub fn bookmark_article(&mut self, id: i32) {
    match self.articles.iter_mut().find(|a| a.id == id) {
      Some(article) => {
        article.bookmarked = !article.bookmarked;
      },
      None => {
        warn!("bookmark_article: article {} not found, ignoring", id);
      },
    }
  }
}
