use super::*;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  #[command(about = "Render a story's comment thread")]
  Comments {
    #[arg(help = "Story id")]
    id: u64,
    #[arg(
      long,
      default_value_t = 10,
      value_parser = clap::value_parser!(u8).range(1..=10),
      help = "Number of top-level comments to expand"
    )]
    limit: u8,
    #[arg(
      long,
      default_value_t = 3,
      value_parser = clap::value_parser!(u8).range(1..=10),
      help = "Maximum reply depth, counting top-level comments as 1"
    )]
    max_depth: u8,
    #[arg(
      long,
      default_value_t = 0,
      allow_negative_numbers = true,
      help = "Drop comments scoring below this"
    )]
    min_score: i64,
  },
  #[command(about = "Fetch a web page as markdown, text, JSON or raw HTML")]
  Fetch {
    #[arg(
      short = 'H',
      long = "header",
      value_parser = parse_header,
      help = "Extra request header, as 'Name: value'"
    )]
    headers: Vec<(String, String)>,
    #[arg(long, default_value_t = FetchRequest::DEFAULT_MAX_LENGTH)]
    max_length: usize,
    #[arg(long, value_enum, default_value_t)]
    mode: FetchMode,
    #[arg(long, default_value_t = 0)]
    start_index: usize,
    url: String,
  },
  #[command(about = "List stories from a category")]
  Stories {
    #[arg(long, value_enum, default_value_t)]
    category: Category,
    #[arg(
      long,
      default_value_t = 30,
      value_parser = clap::value_parser!(u16).range(1..=100)
    )]
    limit: u16,
  },
  #[command(about = "Show a single story")]
  Story {
    #[arg(help = "Story id")]
    id: u64,
  },
}

impl Subcommand {
  async fn comments(
    config: &Config,
    id: u64,
    limit: usize,
    max_depth: usize,
    min_score: i64,
  ) -> Result<ToolResult> {
    let client = Client::new(config)?;

    let story = Self::story_item(&client, id).await?;

    let roots = &story.kids[..story.kids.len().min(limit)];

    info!(
      id,
      roots = roots.len(),
      max_depth,
      min_score,
      "building comment tree"
    );

    let tree = CommentTree::new(&client, max_depth, min_score)
      .build(roots)
      .await;

    Ok(ToolResult::success(ThreadRenderer::render(
      &tree,
      &story.title,
      story.id,
      story.descendants,
    )))
  }

  pub(crate) async fn run(self, config: &Config) -> Result<ToolResult> {
    match self {
      Self::Comments {
        id,
        limit,
        max_depth,
        min_score,
      } => {
        Self::comments(
          config,
          id,
          limit.into(),
          max_depth.into(),
          min_score,
        )
        .await
      }
      Self::Fetch {
        headers,
        max_length,
        mode,
        start_index,
        url,
      } => {
        let request = FetchRequest {
          headers,
          max_length,
          start_index,
          url,
        };

        Ok(ContentRetriever::new(config)?.fetch(mode, &request).await)
      }
      Self::Stories { category, limit } => {
        let stories = Client::new(config)?
          .fetch_stories(category, 0, limit.into())
          .await?;

        Ok(ToolResult::success(
          stories
            .iter()
            .enumerate()
            .map(|(index, story)| story.summary(index + 1))
            .collect::<Vec<_>>()
            .join("\n"),
        ))
      }
      Self::Story { id } => {
        let story = Self::story_item(&Client::new(config)?, id).await?;

        Ok(ToolResult::success(story.render()))
      }
    }
  }

  async fn story_item(client: &Client, id: u64) -> Result<Story> {
    let item = client
      .item(id)
      .await
      .with_context(|| format!("failed to load item {id}"))?
      .with_context(|| format!("item {id} does not exist"))?;

    Ok(Story::from(item))
  }
}

fn parse_header(header: &str) -> Result<(String, String), String> {
  let (name, value) = header
    .split_once(':')
    .ok_or_else(|| format!("expected 'Name: value', got {header:?}"))?;

  let name = name.trim();

  if name.is_empty() {
    return Err(format!("header name is empty in {header:?}"));
  }

  Ok((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_header_splits_on_first_colon() {
    assert_eq!(
      parse_header("Referer: https://example.com:8080/"),
      Ok(("Referer".into(), "https://example.com:8080/".into()))
    );
  }

  #[test]
  fn parse_header_rejects_malformed_input() {
    assert!(parse_header("no-colon").is_err());
    assert!(parse_header(" : value").is_err());
  }
}
