use {
  anyhow::{Context, bail},
  arguments::Arguments,
  async_trait::async_trait,
  category::Category,
  chrono::{DateTime, Utc},
  clap::{Parser, ValueEnum},
  client::Client,
  comment::Comment,
  comment_tree::CommentTree,
  config::Config,
  content_retriever::ContentRetriever,
  crossterm::style::Stylize,
  document::Document,
  fetch_error::FetchError,
  fetch_mode::FetchMode,
  fetch_request::FetchRequest,
  futures::{
    future::{BoxFuture, FutureExt, join_all},
    stream::{self, StreamExt},
  },
  guarded_resolver::GuardedResolver,
  host_guard::HostGuard,
  htmd::{
    HtmlToMarkdown,
    options::{BulletListMarker, CodeBlockStyle, HeadingStyle, Options},
  },
  item::Item,
  item_store::ItemStore,
  regex::Regex,
  reqwest::{
    dns::{Addrs, Name, Resolve, Resolving},
    header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
  },
  scraper::{ElementRef, Html, Node, Selector},
  serde::{Deserialize, Serialize},
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    cmp::Reverse,
    collections::HashMap,
    io::{self, IsTerminal},
    iter,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    process,
    sync::{Arc, LazyLock},
    time::Duration,
  },
  story::Story,
  subcommand::Subcommand,
  thiserror::Error,
  thread_renderer::ThreadRenderer,
  tokio::net::lookup_host,
  tool_result::ToolResult,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  url::{Host, Url},
  utils::{format_points, normalize_time, permalink, sanitize_comment, window},
};

mod arguments;
mod category;
mod client;
mod comment;
mod comment_tree;
mod config;
mod content_retriever;
mod document;
mod fetch_error;
mod fetch_mode;
mod fetch_request;
mod guarded_resolver;
mod host_guard;
mod item;
mod item_store;
mod markdown;
mod story;
mod subcommand;
mod thread_renderer;
mod tool_result;
mod utils;

const DEFAULT_API_URL: &str = "https://hacker-news.firebaseio.com/v0";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

const UNKNOWN_STORY: &str = "Unknown Story";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .init();
}

#[tokio::main]
async fn main() {
  initialize_logging();

  if let Err(error) = Arguments::parse().run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
