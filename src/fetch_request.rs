use super::*;

#[derive(Clone, Debug)]
pub(crate) struct FetchRequest {
  pub(crate) headers: Vec<(String, String)>,
  pub(crate) max_length: usize,
  pub(crate) start_index: usize,
  pub(crate) url: String,
}

impl FetchRequest {
  pub(crate) const DEFAULT_MAX_LENGTH: usize = 5000;

  pub(crate) fn new(url: impl Into<String>) -> Self {
    Self {
      headers: Vec::new(),
      max_length: Self::DEFAULT_MAX_LENGTH,
      start_index: 0,
      url: url.into(),
    }
  }

  pub(crate) fn window(&self, text: &str) -> String {
    window(text, self.start_index, self.max_length)
  }
}
