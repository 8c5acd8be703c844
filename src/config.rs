use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) api_url: String,
  pub(crate) timeout: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_url: DEFAULT_API_URL.into(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }
}

impl Config {
  pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
    reqwest::Client::builder()
      .timeout(self.timeout)
      .build()
      .context("could not build HTTP client")
  }
}
