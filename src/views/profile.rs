use crate::models::*;

/// Articles authored by the given user, in storage order.
pub fn authored_articles(articles: &[Article], user_id: i32) -> Vec<&Article> {
  articles.iter().filter(|a| a.author.id == user_id).collect()
}

/// Articles the viewer has bookmarked, in storage order.
pub fn bookmarked_articles(articles: &[Article]) -> Vec<&Article> {
  articles.iter().filter(|a| a.bookmarked).collect()
}
