use super::*;

pub(crate) struct ThreadRenderer;

impl ThreadRenderer {
  const DIVIDER: &str =
    "────────────────────────────────────────────────────────────";
  const INDENT: &str = "  ";
  const REPLY_MARKER: &str = "›";
  const ROOT_MARKER: &str = "■";

  fn block(output: &mut String, comment: &Comment) {
    let indent = Self::INDENT.repeat(comment.depth);

    let marker = if comment.depth == 0 {
      Self::ROOT_MARKER.to_string()
    } else {
      Self::REPLY_MARKER.repeat(comment.depth)
    };

    let mut header = format!(
      "{indent}{marker} {}",
      comment
        .author
        .as_deref()
        .filter(|author| !author.is_empty())
        .unwrap_or("unknown")
    );

    if let Some(score) = comment.score {
      header.push_str(&format!(" ({})", format_points(score)));
    }

    if let Some(time) = comment.time {
      header.push_str(&format!(" • {}", time.format(TIME_FORMAT)));
    }

    output.push_str(&header);
    output.push('\n');

    let body = comment
      .text
      .as_deref()
      .map(sanitize_comment)
      .unwrap_or_default();

    for line in body {
      if line.is_empty() {
        output.push('\n');
      } else {
        output.push_str(&format!("{indent}{}{line}\n", Self::INDENT));
      }
    }

    output.push('\n');

    for reply in &comment.replies {
      Self::block(output, reply);
    }
  }

  pub(crate) fn render(
    tree: &[Comment],
    title: &str,
    story_id: u64,
    total_count: u64,
  ) -> String {
    let title = match title.trim() {
      "" => UNKNOWN_STORY,
      title => title,
    };

    let shown = tree.iter().map(Comment::size).sum::<usize>();

    let mut output = format!(
      "Story {story_id}: {title}\n{}\n",
      permalink(story_id)
    );

    output.push_str(&format!(
      "Comments: {total_count} total, {shown} shown\n\n"
    ));

    if tree.is_empty() {
      output.push_str("No comments found.\n");
      return output;
    }

    for root in tree {
      Self::block(&mut output, root);
      output.push_str(Self::DIVIDER);
      output.push_str("\n\n");
    }

    output
  }
}
