use std::str::FromStr;

use crate::models::*;

/// Render-time sort orders.  Never persisted back to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  Latest,
  Oldest,
  MostLiked,
  MostCommented,
}

impl Default for SortOrder {
  fn default() -> Self {
    SortOrder::Latest
  }
}

impl FromStr for SortOrder {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "latest" => Ok(SortOrder::Latest),
      "oldest" => Ok(SortOrder::Oldest),
      "most-liked" => Ok(SortOrder::MostLiked),
      "most-commented" => Ok(SortOrder::MostCommented),
      _ => Err(()),
    }
  }
}

/// Search-term and category filtering for the listing screen.
///
/// The search term is a case-insensitive substring match over title,
/// excerpt and author name.  The category filter compares the raw query
/// string against the closed vocabulary; a string outside the vocabulary
/// simply matches nothing (empty result, not an error).
pub fn filter_articles<'a>(
  articles: &'a [Article],
  search_term: Option<&str>,
  category: Option<&str>,
) -> Vec<&'a Article> {
  let term = search_term.map(|t| t.to_lowercase());

  articles
    .iter()
    .filter(|article| match category {
      Some(cat) => article.category.as_str() == cat,
      None => true,
    })
    .filter(|article| match term {
      Some(ref term) => {
        article.title.to_lowercase().contains(term)
          || article.excerpt.to_lowercase().contains(term)
          || article.author.name.to_lowercase().contains(term)
      },
      None => true,
    })
    .collect()
}

pub fn sort_articles<'a>(
  mut articles: Vec<&'a Article>,
  order: SortOrder,
) -> Vec<&'a Article> {
  match order {
    SortOrder::Latest => articles.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
    SortOrder::Oldest => articles.sort_by(|a, b| a.published_at.cmp(&b.published_at)),
    SortOrder::MostLiked => articles.sort_by(|a, b| b.like_count.cmp(&a.like_count)),
    SortOrder::MostCommented => {
      articles.sort_by(|a, b| b.comment_count.cmp(&a.comment_count))
    },
  }
  articles
}

/// Top-n articles by like count, for the featured section.
pub fn featured_articles(articles: &[Article], n: usize) -> Vec<&Article> {
  let mut sorted = sort_articles(articles.iter().collect(), SortOrder::MostLiked);
  sorted.truncate(n);
  sorted
}

/// Up to n other articles in the same category, in storage order.
pub fn related_articles<'a>(
  articles: &'a [Article],
  article: &Article,
  n: usize,
) -> Vec<&'a Article> {
  articles
    .iter()
    .filter(|a| a.id != article.id && a.category == article.category)
    .take(n)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::seed;

  #[test]
  fn sort_orders_parse_from_query_strings() {
    assert_eq!("latest".parse(), Ok(SortOrder::Latest));
    assert_eq!("most-liked".parse(), Ok(SortOrder::MostLiked));
    assert!("newest".parse::<SortOrder>().is_err());
  }

  #[test]
  fn search_matches_title_excerpt_and_author() {
    let articles = seed::articles();

    let by_title = filter_articles(&articles, Some("WEB DEVELOPMENT"), None);
    assert!(by_title.iter().any(|a| a.id == 1));

    let by_author = filter_articles(&articles, Some("jane"), None);
    assert!(!by_author.is_empty());
    assert!(by_author.iter().all(|a| a.author.name == "Jane Smith"));

    assert!(filter_articles(&articles, Some("zzzz-no-match"), None).is_empty());
  }

  #[test]
  fn category_filter_uses_the_closed_vocabulary() {
    let articles = seed::articles();

    let design: Vec<i32> = filter_articles(&articles, None, Some("design"))
      .iter()
      .map(|a| a.id)
      .collect();
    assert_eq!(design, vec![2, 6]);

    // Outside the vocabulary: empty set, not an error.
    assert!(filter_articles(&articles, None, Some("sports")).is_empty());
  }

  #[test]
  fn sort_orders_rank_the_seed_as_expected() {
    let articles = seed::articles();

    let latest = sort_articles(articles.iter().collect(), SortOrder::Latest);
    assert_eq!(latest[0].id, 1);

    let oldest = sort_articles(articles.iter().collect(), SortOrder::Oldest);
    assert_eq!(oldest[0].id, 6);

    let most_liked = sort_articles(articles.iter().collect(), SortOrder::MostLiked);
    assert_eq!(most_liked[0].like_count, 312);
  }

  #[test]
  fn featured_takes_the_top_n_by_likes() {
    let articles = seed::articles();
    let featured: Vec<i64> = featured_articles(&articles, 3)
      .iter()
      .map(|a| a.like_count)
      .collect();
    assert_eq!(featured, vec![312, 245, 208]);
  }

  #[test]
  fn related_excludes_self_and_other_categories() {
    let articles = seed::articles();
    let subject = articles.iter().find(|a| a.id == 2).unwrap();

    let related: Vec<i32> = related_articles(&articles, subject, 3)
      .iter()
      .map(|a| a.id)
      .collect();
    assert_eq!(related, vec![6]);
  }
}
