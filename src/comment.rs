use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Comment {
  pub(crate) author: Option<String>,
  pub(crate) depth: usize,
  pub(crate) id: u64,
  pub(crate) replies: Vec<Comment>,
  pub(crate) score: Option<i64>,
  pub(crate) text: Option<String>,
  pub(crate) time: Option<DateTime<Utc>>,
}

impl Comment {
  pub(crate) fn from_item(item: Item, depth: usize) -> Self {
    let time = item.posted_at();

    Self {
      author: item.by,
      depth,
      id: item.id,
      replies: Vec::new(),
      score: item.score,
      text: item.text,
      time,
    }
  }

  /// Score used for ranking and threshold checks, missing scores count as 0.
  pub(crate) fn rank(&self) -> i64 {
    self.score.unwrap_or(0)
  }

  /// Number of comments in this subtree, including this one.
  pub(crate) fn size(&self) -> usize {
    1 + self.replies.iter().map(Comment::size).sum::<usize>()
  }
}
