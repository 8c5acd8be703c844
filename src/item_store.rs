use super::*;

/// Source of Hacker News items.
///
/// `item` resolves `Ok(None)` when the id does not exist. Callers that build
/// comment trees treat an `Err` the same way.
#[async_trait]
pub(crate) trait ItemStore: Sync {
  async fn item(&self, id: u64) -> Result<Option<Item>>;

  async fn story_ids(&self, category: Category) -> Result<Vec<u64>>;
}
