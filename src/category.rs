use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Category {
  Ask,
  Best,
  Job,
  New,
  Show,
  #[default]
  Top,
}

impl Category {
  pub(crate) fn endpoint(self) -> &'static str {
    match self {
      Self::Ask => "askstories",
      Self::Best => "beststories",
      Self::Job => "jobstories",
      Self::New => "newstories",
      Self::Show => "showstories",
      Self::Top => "topstories",
    }
  }
}
