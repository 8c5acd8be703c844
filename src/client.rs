use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_url: String,
  client: reqwest::Client,
}

impl Client {
  const STORY_BUFFER: usize = 16;

  pub(crate) async fn fetch_stories(
    &self,
    category: Category,
    offset: usize,
    count: usize,
  ) -> Result<Vec<Story>> {
    let story_ids = self.story_ids(category).await.with_context(|| {
      format!("failed to load {} story ids", category.endpoint())
    })?;

    let story_ids = story_ids.into_iter().skip(offset).take(count);

    let responses = stream::iter(story_ids.map(|id| {
      let client = self.clone();

      async move { (id, client.item(id).await) }
    }))
    .buffered(Self::STORY_BUFFER)
    .collect::<Vec<_>>()
    .await;

    let mut stories = Vec::with_capacity(responses.len());

    for (id, response) in responses {
      match response {
        Ok(Some(item)) => stories.push(Story::from(item)),
        Ok(None) => debug!(id, "story not found"),
        Err(error) => debug!(id, %error, "story lookup failed"),
      }
    }

    Ok(stories)
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    Ok(Self {
      api_url: config.api_url.trim_end_matches('/').to_string(),
      client: config.http_client()?,
    })
  }
}

#[async_trait]
impl ItemStore for Client {
  async fn item(&self, id: u64) -> Result<Option<Item>> {
    Ok(
      self
        .client
        .get(format!("{}/item/{id}.json", self.api_url))
        .send()
        .await?
        .error_for_status()?
        .json::<Option<Item>>()
        .await?,
    )
  }

  async fn story_ids(&self, category: Category) -> Result<Vec<u64>> {
    Ok(
      self
        .client
        .get(format!("{}/{}.json", self.api_url, category.endpoint()))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<u64>>()
        .await?,
    )
  }
}
