use super::*;

static BLANK_LINES: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());

static EMPTY_LINKS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"!?\[\s*\]\([^)]*\)").unwrap());

/// Converts the main content region of an HTML page to markdown.
pub(crate) fn convert(html: &str) -> Result<String, FetchError> {
  let document = Document::parse(html);

  let content = document.main_content_html()?;

  let mut skip_tags = vec!["script", "style", "noscript"];
  skip_tags.extend_from_slice(Document::CHROME_TAGS);

  let converter = HtmlToMarkdown::builder()
    .options(Options {
      bullet_list_marker: BulletListMarker::Dash,
      code_block_style: CodeBlockStyle::Fenced,
      heading_style: HeadingStyle::Atx,
      ..Default::default()
    })
    .skip_tags(skip_tags)
    .build();

  let markdown = converter
    .convert(&content)
    .map_err(|error| FetchError::Extraction(error.to_string()))?;

  Ok(tidy(&markdown))
}

fn tidy(markdown: &str) -> String {
  let markdown = EMPTY_LINKS.replace_all(markdown, "");
  let markdown = BLANK_LINES.replace_all(&markdown, "\n\n");

  markdown.trim().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tidy_collapses_blank_runs_and_drops_empty_links() {
    assert_eq!(
      tidy("\n\n# Title\n\n\n\n[](https://x.com/a)Body\n  \n\t\n\nEnd [ ](#top)\n\n"),
      "# Title\n\nBody\n\nEnd"
    );
  }

  #[test]
  fn tidy_drops_images_without_alt_text() {
    assert_eq!(tidy("Hi\n\n![](a.png)"), "Hi");
    assert_eq!(tidy("![diagram](a.png)"), "![diagram](a.png)");
  }

  #[test]
  fn tidy_keeps_single_blank_lines() {
    assert_eq!(tidy("a\n\nb\nc"), "a\n\nb\nc");
  }

  #[test]
  fn convert_uses_atx_dash_bullets_and_fences() {
    let markdown = convert(
      "<html><body><article>\
       <h2>Heading</h2>\
       <ul><li>one</li><li>two</li></ul>\
       <pre><code>let x = 1;</code></pre>\
       </article></body></html>",
    )
    .unwrap();

    assert!(markdown.starts_with("## Heading"), "{markdown}");
    assert!(
      markdown
        .lines()
        .any(|line| line.starts_with('-') && line.ends_with("one")),
      "{markdown}"
    );
    assert!(!markdown.contains("* one"), "{markdown}");
    assert!(markdown.contains("```"), "{markdown}");
    assert!(markdown.contains("let x = 1;"), "{markdown}");
  }

  #[test]
  fn convert_never_includes_navigation_chrome() {
    let markdown = convert(
      "<html><body>\
       <header>Masthead</header>\
       <nav><ul><li>Menu item</li></ul></nav>\
       <div class=\"content\">\
       <p>Body text</p>\
       <aside>Pull quote</aside>\
       <div class=\"widget\"><p>Widget text</p></div>\
       <footer>Footnotes</footer>\
       </div>\
       </body></html>",
    )
    .unwrap();

    assert_eq!(markdown, "Body text");
  }

  #[test]
  fn convert_falls_back_to_body() {
    let markdown =
      convert("<p>Hello <a href=\"https://example.com\">world</a></p>").unwrap();

    assert_eq!(markdown, "Hello [world](https://example.com)");
  }

  #[test]
  fn convert_leaves_no_stray_image_markers() {
    let markdown =
      convert("<article><p>Hi</p><img src=\"a.png\"></article>").unwrap();

    assert_eq!(markdown, "Hi");
  }

  #[test]
  fn convert_ignores_main_candidates_inside_chrome() {
    assert_eq!(
      convert(
        "<body><header><div class=\"main\">Site menu</div></header>\
         <p>Real body</p></body>"
      )
      .unwrap(),
      "Real body"
    );

    assert_eq!(
      convert("<body><main class=\"sidebar\"><p>x</p></main><p>Real</p></body>")
        .unwrap(),
      "Real"
    );
  }
}
