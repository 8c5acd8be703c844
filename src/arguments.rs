use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn",
  version,
  about = "Read Hacker News stories, comment threads and linked pages"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    global = true,
    env = "HN_API_URL",
    default_value = DEFAULT_API_URL,
    help = "Base URL of the Hacker News item API"
  )]
  api_url: String,
  #[arg(
    long,
    global = true,
    help = "Print the result as a JSON object with `content` and `isError`"
  )]
  json: bool,
  #[command(subcommand)]
  subcommand: Subcommand,
  #[arg(
    long,
    global = true,
    env = "HN_TIMEOUT",
    default_value_t = DEFAULT_TIMEOUT_SECS,
    value_parser = clap::value_parser!(u64).range(1..),
    help = "Per-request timeout in seconds"
  )]
  timeout: u64,
}

impl Arguments {
  fn config(&self) -> Config {
    Config {
      api_url: self.api_url.clone(),
      timeout: Duration::from_secs(self.timeout),
    }
  }

  pub(crate) async fn run(self) -> Result {
    let config = self.config();

    let output = self.subcommand.run(&config).await?;

    if self.json {
      println!("{}", serde_json::to_string(&output)?);
    } else if !output.is_error {
      println!("{}", output.content);
    }

    if output.is_error {
      bail!(output.content);
    }

    Ok(())
  }
}
