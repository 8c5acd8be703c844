use super::*;

/// Builds bounded comment trees from an [`ItemStore`].
///
/// Every level fetches at most [`CommentTree::FAN_OUT`] ids concurrently.
/// Lookups that fail, resolve to nothing, or resolve to something other than a
/// live comment are pruned without affecting their siblings.
pub(crate) struct CommentTree<'a, S: ItemStore> {
  max_depth: usize,
  min_score: i64,
  store: &'a S,
}

impl<'a, S: ItemStore> CommentTree<'a, S> {
  pub(crate) const FAN_OUT: usize = 10;

  pub(crate) async fn build(&self, ids: &[u64]) -> Vec<Comment> {
    self.level(ids, 0).await
  }

  async fn fetch(&self, id: u64, depth: usize) -> Option<Comment> {
    let item = match self.store.item(id).await {
      Ok(Some(item)) => item,
      Ok(None) => {
        debug!(id, "comment not found");
        return None;
      }
      Err(error) => {
        debug!(id, %error, "comment lookup failed");
        return None;
      }
    };

    if !item.is_live_comment() {
      debug!(id, kind = ?item.kind, "pruning item");
      return None;
    }

    if item.score.unwrap_or(0) < self.min_score {
      debug!(id, score = ?item.score, "comment below minimum score");
      return None;
    }

    let kids = item.kids.clone();

    let mut comment = Comment::from_item(item, depth);

    if !kids.is_empty() && depth + 1 < self.max_depth {
      comment.replies = self.level(&kids, depth + 1).await;
    }

    Some(comment)
  }

  fn level<'b>(
    &'b self,
    ids: &'b [u64],
    depth: usize,
  ) -> BoxFuture<'b, Vec<Comment>> {
    async move {
      if depth >= self.max_depth || ids.is_empty() {
        return Vec::new();
      }

      let ids = &ids[..ids.len().min(Self::FAN_OUT)];

      let mut comments = join_all(ids.iter().map(|&id| self.fetch(id, depth)))
        .await
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

      comments.sort_by_key(|comment| Reverse(comment.rank()));

      comments
    }
    .boxed()
  }

  pub(crate) fn new(store: &'a S, max_depth: usize, min_score: i64) -> Self {
    Self {
      max_depth,
      min_score,
      store,
    }
  }
}
