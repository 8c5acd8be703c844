use super::*;

#[derive(Debug)]
pub(crate) struct Story {
  pub(crate) by: Option<String>,
  pub(crate) descendants: u64,
  pub(crate) id: u64,
  pub(crate) kids: Vec<u64>,
  pub(crate) score: Option<i64>,
  pub(crate) text: Option<String>,
  pub(crate) time: Option<DateTime<Utc>>,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl From<Item> for Story {
  fn from(item: Item) -> Self {
    let time = item.posted_at();

    Self {
      by: item.by,
      descendants: item.descendants.unwrap_or(0),
      id: item.id,
      kids: item.kids,
      score: item.score,
      text: item.text,
      time,
      title: item
        .title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_STORY.to_string()),
      url: item.url,
    }
  }
}

impl Story {
  pub(crate) fn detail(&self) -> Option<String> {
    match (self.score, self.by.as_deref()) {
      (Some(score), Some(by)) => {
        Some(format!("{} by {}", format_points(score), by))
      }
      (Some(score), None) => Some(format_points(score)),
      (None, Some(by)) => Some(format!("by {by}")),
      _ => None,
    }
  }

  pub(crate) fn link(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| permalink(self.id))
  }

  pub(crate) fn render(&self) -> String {
    let mut output = format!("{}\n{}\n", self.title, self.link());

    let mut meta = self.detail().into_iter().collect::<Vec<_>>();

    if let Some(time) = self.time {
      meta.push(format!("posted {}", time.format(TIME_FORMAT)));
    }

    meta.push(match self.descendants {
      1 => "1 comment".to_string(),
      count => format!("{count} comments"),
    });

    output.push_str(&meta.join(" • "));
    output.push('\n');

    let body = self
      .text
      .as_deref()
      .and_then(|html| html2text::from_read(html.as_bytes(), usize::MAX).ok())
      .map(|text| text.trim_end().to_owned())
      .filter(|text| !text.is_empty());

    if let Some(body) = body {
      output.push('\n');
      output.push_str(&body);
      output.push('\n');
    }

    output
  }

  pub(crate) fn summary(&self, rank: usize) -> String {
    let mut output = format!("{rank}. {}\n", self.title);

    if let Some(detail) = self.detail() {
      output.push_str(&format!(
        "   {detail} • {} comments\n",
        self.descendants
      ));
    }

    output.push_str(&format!("   {}\n", self.link()));

    output
  }
}
