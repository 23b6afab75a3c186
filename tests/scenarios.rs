use std::time::Duration;

use eloquent::forms::{AddComment, CreateArticle, LoginForm};
use eloquent::models::Category;
use eloquent::session::{SessionManager, SessionStorage};
use eloquent::store::{seed, CommentThread, ContentService};
use eloquent::views;
use eloquent::Error;

fn no_latency() -> Duration {
  Duration::from_millis(0)
}

#[test]
fn three_most_liked_articles_rank_by_descending_likes() {
  // A1 likes=152, A2 likes=208, A3 likes=178.
  let mut articles = seed::articles();
  articles.truncate(3);
  let service = ContentService::from_parts(articles, Vec::new(), no_latency());

  let ids: Vec<i32> = views::featured_articles(service.articles(), 3)
    .iter()
    .map(|a| a.id)
    .collect();
  assert_eq!(ids, vec![2, 3, 1]);
}

#[async_std::test]
async fn root_comment_add_then_delete_restores_the_count() {
  let mut service = ContentService::new(no_latency());
  let author = seed::demo_user();
  let before = service.get_article_by_id(1).unwrap().comment_count;

  let comment = service
    .add_comment(
      &AddComment {
        article_id: 1,
        parent_id: None,
        content: "root comment".into(),
      },
      Some(&author),
    )
    .await
    .unwrap();
  assert_eq!(service.get_article_by_id(1).unwrap().comment_count, before + 1);

  service.delete_comment(comment.id);
  assert_eq!(service.get_article_by_id(1).unwrap().comment_count, before);
}

#[async_std::test]
async fn unauthorized_create_leaves_the_collection_unchanged() {
  let mut service = ContentService::new(no_latency());
  let snapshot: Vec<i32> = service.articles().iter().map(|a| a.id).collect();

  let form = CreateArticle {
    title: "Never published".into(),
    body: "body".into(),
    excerpt: None,
    cover_image: String::new(),
    category: Category::Business,
    tags: vec![],
  };
  match service.create_article(&form, None).await {
    Err(Error::Unauthorized(_)) => (),
    other => panic!("expected Unauthorized, got {:?}", other),
  }

  let after: Vec<i32> = service.articles().iter().map(|a| a.id).collect();
  assert_eq!(after, snapshot);
}

#[test]
fn filtering_by_an_unknown_category_is_empty_not_an_error() {
  let service = ContentService::new(no_latency());
  assert!(views::filter_articles(service.articles(), None, Some("astrology")).is_empty());
}

#[async_std::test]
async fn login_publish_and_discuss_end_to_end() {
  let dir = tempfile::tempdir().unwrap();
  let mut session = SessionManager::new(
    SessionStorage::new(dir.path().join("user.json")),
    no_latency(),
  )
  .unwrap();
  let mut content = ContentService::new(no_latency());

  let user = session
    .login(&LoginForm {
      email: "demo@example.com".into(),
      password: "pw".into(),
    })
    .await
    .unwrap();

  // Publish: 400 words reads in 2 minutes, excerpt derived from the body.
  let body = vec!["thoughtful"; 400].join(" ");
  let article = content
    .create_article(
      &CreateArticle {
        title: "On writing".into(),
        body,
        excerpt: None,
        cover_image: String::new(),
        category: Category::Education,
        tags: vec!["writing".into()],
      },
      Some(&user),
    )
    .await
    .unwrap();
  assert_eq!(article.read_time, 2);
  assert!(article.excerpt.ends_with("..."));
  assert_eq!(content.articles()[0].id, article.id);

  // Build a thread four levels deep; data accepts it, the view stops
  // offering replies at level 3.
  let mut parent_id = None;
  let mut last_id = 0;
  for i in 0..4 {
    let comment = content
      .add_comment(
        &AddComment {
          article_id: article.id,
          parent_id,
          content: format!("reply at level {}", i),
        },
        Some(&user),
      )
      .await
      .unwrap();
    parent_id = Some(comment.id);
    last_id = comment.id;
  }
  assert_eq!(content.get_article_by_id(article.id).unwrap().comment_count, 4);

  let comments = content.comments_for_article(article.id);
  let thread = CommentThread::build(&comments);
  let mut deepest = 0;
  thread.walk(|comment, level| {
    if comment.id == last_id {
      deepest = level;
    }
  });
  assert_eq!(deepest, 3);
  assert!(!CommentThread::can_reply(deepest));

  // Cascade: deleting the root removes the whole chain.
  let comments: Vec<i32> = content
    .comments_for_article(article.id)
    .iter()
    .map(|c| c.id)
    .collect();
  let root = *comments.last().unwrap();
  assert_eq!(content.delete_comment(root), 4);
  assert_eq!(content.get_article_by_id(article.id).unwrap().comment_count, 0);

  session.logout().unwrap();
  assert!(!session.is_authenticated());
}
