use log::*;

use async_std::task;

use crate::app::*;
use crate::error::*;
use crate::forms::comment::AddComment;
use crate::forms::user::LoginForm;
use crate::store::{CommentThread, ContentService};
use crate::views;

/// Terminal stand-in for the view layer: renders the seeded feeds and an
/// article detail with its nested comment thread, then exercises a couple
/// of mutations.
pub fn execute(config: AppConfig) -> Result<()> {
  task::block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
  let mut state = AppState::new(&config)?;

  // Any credential pair works in the mock.
  let user = state
    .session
    .login(&LoginForm {
      email: "demo@example.com".into(),
      password: "demo".into(),
    })
    .await
    .map_err(Error::trace)?;
  println!("signed in as {} (@{})", user.name, user.username);

  println!("\n== Featured ==");
  for article in views::featured_articles(state.content.articles(), 3) {
    println!("  {:>4} likes  {}", article.like_count, article.title);
  }

  println!("\n== Recent ==");
  let recent = views::sort_articles(
    state.content.articles().iter().collect(),
    views::SortOrder::Latest,
  );
  for article in recent {
    println!(
      "  {}  [{}] {} ({} min read, {} comments)",
      article.published_at.date(),
      article.category,
      article.title,
      article.read_time,
      article.comment_count,
    );
  }

  let article = state.content.get_article_by_id(1).map_err(Error::trace)?.clone();
  println!("\n== {} ==", article.title);
  println!("{}", article.excerpt);

  let related = views::related_articles(state.content.articles(), &article, 3);
  if !related.is_empty() {
    println!("\nRelated:");
    for rel in related {
      println!("  - {}", rel.title);
    }
  }

  println!("\nComments:");
  render_thread(&state.content, article.id);

  // Exercise the mutation side: reply to the top thread, then like it.
  info!("demo: adding a reply");
  let author = state.session.current_user().cloned();
  let reply = state
    .content
    .add_comment(
      &AddComment {
        article_id: article.id,
        parent_id: Some(1),
        content: "Joining the thread from the demo command.".into(),
      },
      author.as_ref(),
    )
    .await
    .map_err(Error::trace)?;
  state.content.like_comment(reply.id);
  state.content.like_article(article.id);

  println!("\nAfter replying and liking:");
  render_thread(&state.content, article.id);
  let article = state.content.get_article_by_id(article.id)?;
  println!(
    "\n{}: {} likes, {} comments",
    article.title, article.like_count, article.comment_count
  );

  Ok(())
}

fn render_thread(content: &ContentService, article_id: i32) {
  let comments = content.comments_for_article(article_id);
  let thread = CommentThread::build(&comments);
  thread.walk(|comment, level| {
    let reply_note = if CommentThread::can_reply(level) {
      ""
    } else {
      " (reply depth reached)"
    };
    println!(
      "{}{} [{} likes] {}{}",
      "  ".repeat(level + 1),
      comment.author.name,
      comment.like_count,
      comment.content,
      reply_note,
    );
  });
}
