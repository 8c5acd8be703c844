use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum FetchMode {
  Html,
  Json,
  #[default]
  Markdown,
  Text,
}
