use super::*;

#[allow(clippy::arbitrary_source_item_ordering)]
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ItemKind {
  Comment,
  Job,
  Poll,
  PollOpt,
  Story,
  /// Catch-all for unrecognized types, must stay last for serde.
  #[default]
  #[serde(other)]
  Other,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Item {
  pub(crate) by: Option<String>,
  #[serde(default)]
  pub(crate) dead: bool,
  #[serde(default)]
  pub(crate) deleted: bool,
  pub(crate) descendants: Option<u64>,
  pub(crate) id: u64,
  #[serde(default)]
  pub(crate) kids: Vec<u64>,
  #[serde(default, rename = "type")]
  pub(crate) kind: ItemKind,
  pub(crate) score: Option<i64>,
  pub(crate) text: Option<String>,
  pub(crate) time: Option<i64>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn is_live_comment(&self) -> bool {
    self.kind == ItemKind::Comment && !self.deleted && !self.dead
  }

  pub(crate) fn posted_at(&self) -> Option<DateTime<Utc>> {
    self.time.and_then(normalize_time)
  }
}
