use super::*;

/// Fetches arbitrary web pages and renders them as bounded text.
///
/// Every entry point returns a [`ToolResult`]; failures never escape as
/// errors.
#[derive(Clone)]
pub(crate) struct ContentRetriever {
  allow_private_hosts: bool,
  client: reqwest::Client,
}

impl ContentRetriever {
  const MAX_REDIRECTS: usize = 5;

  const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

  /// Disables the private network checks, for talking to local test servers.
  #[cfg(test)]
  fn allowing_private_hosts(config: &Config) -> Result<Self> {
    Self::build(config, None)
  }

  /// Without a resolver every private network check is skipped.
  fn build(
    config: &Config,
    resolver: Option<GuardedResolver>,
  ) -> Result<Self> {
    let allow_private_hosts = resolver.is_none();

    let redirect = reqwest::redirect::Policy::custom(move |attempt| {
      if attempt.previous().len() >= Self::MAX_REDIRECTS {
        return attempt.error(format!(
          "stopped after {} redirects",
          Self::MAX_REDIRECTS
        ));
      }

      if allow_private_hosts {
        return attempt.follow();
      }

      match HostGuard::check_literal(attempt.url()) {
        Ok(()) => attempt.follow(),
        Err(error) => {
          warn!(url = %attempt.url(), "blocked redirect");
          attempt.error(error)
        }
      }
    });

    let mut builder = reqwest::Client::builder()
      .timeout(config.timeout)
      .redirect(redirect);

    if let Some(resolver) = resolver {
      builder = builder.dns_resolver(Arc::new(resolver));
    }

    let client = builder.build().context("could not build HTTP client")?;

    Ok(Self {
      allow_private_hosts,
      client,
    })
  }

  pub(crate) async fn fetch(
    &self,
    mode: FetchMode,
    request: &FetchRequest,
  ) -> ToolResult {
    let result = match mode {
      FetchMode::Html => self.fetch_html(request).await,
      FetchMode::Json => self.fetch_json(request).await,
      FetchMode::Markdown => self.fetch_markdown(request).await,
      FetchMode::Text => self.fetch_text(request).await,
    };

    if let Err(error) = &result {
      info!(url = %request.url, %error, "fetch failed");
    }

    ToolResult::from(result.map(|content| request.window(&content)))
  }

  async fn fetch_html(
    &self,
    request: &FetchRequest,
  ) -> Result<String, FetchError> {
    self.get(request).await
  }

  async fn fetch_json(
    &self,
    request: &FetchRequest,
  ) -> Result<String, FetchError> {
    let body = self.get(request).await?;

    let value = serde_json::from_str::<Value>(&body)
      .map_err(|error| FetchError::Parse(error.to_string()))?;

    Ok(value.to_string())
  }

  async fn fetch_markdown(
    &self,
    request: &FetchRequest,
  ) -> Result<String, FetchError> {
    markdown::convert(&self.get(request).await?)
  }

  async fn fetch_text(
    &self,
    request: &FetchRequest,
  ) -> Result<String, FetchError> {
    Ok(Document::parse(&self.get(request).await?).text())
  }

  async fn get(&self, request: &FetchRequest) -> Result<String, FetchError> {
    let url = if self.allow_private_hosts {
      Url::parse(&request.url).map_err(|error| FetchError::InvalidUrl {
        reason: error.to_string(),
        url: request.url.clone(),
      })?
    } else {
      HostGuard::check(&request.url).await.inspect_err(|error| {
        warn!(url = %request.url, %error, "refusing fetch target");
      })?
    };

    let headers = Self::headers(&request.headers)?;

    info!(%url, "fetching");

    let transport = |source| FetchError::Transport {
      source,
      url: request.url.clone(),
    };

    let response = self
      .client
      .get(url)
      .header(USER_AGENT, Self::USER_AGENT)
      .headers(headers)
      .send()
      .await
      .map_err(transport)?;

    let status = response.status();

    if !status.is_success() {
      return Err(FetchError::Status(status));
    }

    response.text().await.map_err(transport)
  }

  fn headers(headers: &[(String, String)]) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::new();

    for (name, value) in headers {
      let invalid = |reason: String| FetchError::InvalidHeader {
        name: name.clone(),
        reason,
      };

      map.insert(
        HeaderName::from_bytes(name.trim().as_bytes())
          .map_err(|error| invalid(error.to_string()))?,
        HeaderValue::from_str(value.trim())
          .map_err(|error| invalid(error.to_string()))?,
      );
    }

    Ok(map)
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    Self::build(config, Some(GuardedResolver::default()))
  }
}
