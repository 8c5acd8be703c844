use super::*;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("Extraction error: {0}")]
  Extraction(String),
  #[error("Invalid header {name:?}: {reason}")]
  InvalidHeader { name: String, reason: String },
  #[error("Invalid URL {url:?}: {reason}")]
  InvalidUrl { reason: String, url: String },
  #[error("Parse error: {0}")]
  Parse(String),
  #[error("Security error: {0}")]
  Security(String),
  #[error("HTTP error: {0}")]
  Status(reqwest::StatusCode),
  #[error("Failed to fetch {url}: {source}")]
  Transport {
    source: reqwest::Error,
    url: String,
  },
}
