use super::*;

pub(crate) fn format_points(score: i64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

pub(crate) fn normalize_time(seconds: i64) -> Option<DateTime<Utc>> {
  DateTime::from_timestamp(seconds, 0)
}

pub(crate) fn permalink(id: u64) -> String {
  format!("https://news.ycombinator.com/item?id={id}")
}

/// Converts comment HTML into plain lines.
///
/// Paragraph and line-break tags become line breaks, every other tag is
/// dropped, entities are decoded, whitespace inside a line is collapsed and
/// runs of blank lines shrink to a single blank line.
pub(crate) fn sanitize_comment(text: &str) -> Vec<String> {
  let mut cleaned = String::with_capacity(text.len());
  let mut inside_tag = false;
  let mut tag = String::new();

  for ch in text.chars() {
    match ch {
      '<' if !inside_tag => {
        inside_tag = true;
        tag.clear();
      }
      '>' if inside_tag => {
        inside_tag = false;

        let name = tag
          .trim_start_matches('/')
          .split(|c: char| c.is_whitespace() || c == '/')
          .next()
          .unwrap_or_default()
          .to_ascii_lowercase();

        match name.as_str() {
          "p" => cleaned.push_str("\n\n"),
          "br" | "div" | "li" | "pre" => cleaned.push('\n'),
          _ => {}
        }
      }
      _ if inside_tag => tag.push(ch),
      _ => cleaned.push(ch),
    }
  }

  let decoded = html_escape::decode_html_entities(&cleaned);

  let mut lines = Vec::new();

  for line in decoded.lines() {
    let line = line.split_whitespace().collect::<Vec<_>>().join(" ");

    if line.is_empty() && lines.last().is_none_or(String::is_empty) {
      continue;
    }

    lines.push(line);
  }

  while lines.last().is_some_and(String::is_empty) {
    lines.pop();
  }

  lines
}

/// Returns the characters of `text` in `[start, start + max_length)`.
pub(crate) fn window(text: &str, start: usize, max_length: usize) -> String {
  text.chars().skip(start).take(max_length).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_points_handles_singular_and_plural() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(2), "2 points");
    assert_eq!(format_points(0), "0 points");
    assert_eq!(format_points(-1), "-1 points");
  }

  #[test]
  fn normalize_time_converts_unix_seconds() {
    assert_eq!(
      normalize_time(0).unwrap().to_rfc3339(),
      "1970-01-01T00:00:00+00:00"
    );
    assert!(normalize_time(i64::MAX).is_none());
  }

  #[test]
  fn sanitize_comment_strips_tags_and_decodes_entities() {
    assert_eq!(
      sanitize_comment(
        "Hello &amp; <i>goodbye</i> <a href=\"https:&#x2F;&#x2F;x.com\">x.com</a>"
      ),
      ["Hello & goodbye x.com"]
    );
  }

  #[test]
  fn sanitize_comment_keeps_paragraphs() {
    assert_eq!(
      sanitize_comment("First   line.<p>Second<br>third<p><p><p>Last"),
      ["First line.", "", "Second", "third", "", "Last"]
    );
  }

  #[test]
  fn sanitize_comment_decodes_numeric_entities() {
    assert_eq!(
      sanitize_comment("https:&#x2F;&#x2F;example.com&#47;path"),
      ["https://example.com/path"]
    );
  }

  #[test]
  fn sanitize_comment_trims_trailing_blank_lines() {
    assert_eq!(sanitize_comment("<p>only<p>"), ["only"]);
    assert!(sanitize_comment("").is_empty());
  }

  #[test]
  fn window_slices_by_characters() {
    assert_eq!(window("abcdefghij", 6, 3), "ghi");
    assert_eq!(window("abc", 5, 10), "");
    assert_eq!(window("abc", 0, 10), "abc");
    assert_eq!(window("héllo", 1, 2), "él");
  }
}
