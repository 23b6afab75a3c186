use std::collections::HashMap;

use crate::models::Comment;

/// Nesting level at which the reply affordance is suppressed.  Deeper
/// replies still attach in data; the view just stops offering the action.
pub const MAX_REPLY_LEVEL: usize = 3;

/// Read-side projection of one article's flat comment collection into a
/// parent -> children tree.  Built once per render pass; the index
/// replaces repeated linear scans over the collection.
pub struct CommentThread<'a> {
  children_by_parent: HashMap<Option<i32>, Vec<&'a Comment>>,
}

impl<'a> CommentThread<'a> {
  /// Index the given comments.  Ordering within a level follows the
  /// input order, so newest-first storage yields newest-first roots.
  pub fn build(comments: &[&'a Comment]) -> CommentThread<'a> {
    let mut children_by_parent: HashMap<Option<i32>, Vec<&'a Comment>> = HashMap::new();
    for &comment in comments.iter() {
      children_by_parent
        .entry(comment.parent_id)
        .or_insert_with(Vec::new)
        .push(comment);
    }
    CommentThread { children_by_parent }
  }

  pub fn roots(&self) -> &[&'a Comment] {
    self.level(None)
  }

  pub fn children(&self, parent_id: i32) -> &[&'a Comment] {
    self.level(Some(parent_id))
  }

  fn level(&self, parent_id: Option<i32>) -> &[&'a Comment] {
    self
      .children_by_parent
      .get(&parent_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Whether the view should offer a direct reply action at this level.
  pub fn can_reply(level: usize) -> bool {
    level < MAX_REPLY_LEVEL
  }

  /// Depth-first walk, calling the visitor with each comment and its
  /// nesting level (roots are level 0).
  pub fn walk<F>(&self, mut visit: F)
  where
    F: FnMut(&'a Comment, usize),
  {
    for &root in self.roots() {
      self.walk_from(root, 0, &mut visit);
    }
  }

  fn walk_from<F>(&self, comment: &'a Comment, level: usize, visit: &mut F)
  where
    F: FnMut(&'a Comment, usize),
  {
    visit(comment, level);
    for &child in self.children(comment.id) {
      self.walk_from(child, level + 1, visit);
    }
  }
}
