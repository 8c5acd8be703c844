use super::*;

/// How a parsed node is treated when extracting content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeClass {
  /// Navigation, header, footer, aside and sidebar-like containers.
  Chrome,
  Content,
  /// Comments, doctypes and processing instructions.
  Markup,
  NoScript,
  /// `script` and `style`.
  Script,
  Text,
}

pub(crate) struct Document {
  html: Html,
}

impl Document {
  const CHROME_CLASSES: &[&str] =
    &["nav", "navbar", "navigation", "sidebar", "widget"];

  pub(crate) const CHROME_TAGS: &[&str] = &["aside", "footer", "header", "nav"];

  const MAIN_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role=\"main\"]",
    "#content",
    ".content",
    "#main",
    ".main",
    ".post-content",
    ".entry-content",
    ".article-body",
  ];

  const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
  ];

  fn body(&self) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("body").ok()?;
    self.html.select(&selector).next()
  }

  pub(crate) fn classify(node: &Node) -> NodeClass {
    match node {
      Node::Text(_) => NodeClass::Text,
      Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => {
        NodeClass::Markup
      }
      Node::Element(element) => {
        let name = element.name();

        if matches!(name, "script" | "style") {
          NodeClass::Script
        } else if name == "noscript" {
          NodeClass::NoScript
        } else if Self::CHROME_TAGS.contains(&name)
          || element.attr("role") == Some("navigation")
          || element
            .classes()
            .any(|class| Self::CHROME_CLASSES.contains(&class))
        {
          NodeClass::Chrome
        } else {
          NodeClass::Content
        }
      }
      _ => NodeClass::Content,
    }
  }

  /// Serializes the main content region, leaving out everything that is not
  /// content or text.
  pub(crate) fn main_content_html(&self) -> Result<String, FetchError> {
    let region = self.main_region()?;

    debug!(tag = region.value().name(), "selected main content region");

    let mut html = String::new();
    Self::write_element(region, &mut html);

    Ok(html)
  }

  /// The first element matching the selector chain that is neither chrome
  /// nor inside chrome, falling back to `body`.
  pub(crate) fn main_region(&self) -> Result<ElementRef<'_>, FetchError> {
    Self::MAIN_SELECTORS
      .iter()
      .filter_map(|selector| Selector::parse(selector).ok())
      .find_map(|selector| {
        self
          .html
          .select(&selector)
          .find(|candidate| !Self::within_chrome(*candidate))
      })
      .or_else(|| self.body())
      .ok_or_else(|| {
        FetchError::Extraction("document has no body element".into())
      })
  }

  pub(crate) fn parse(html: &str) -> Self {
    Self {
      html: Html::parse_document(html),
    }
  }

  /// Visible text of the body with whitespace runs collapsed.
  pub(crate) fn text(&self) -> String {
    let root = self.body().unwrap_or_else(|| self.html.root_element());

    let mut text = String::new();
    Self::write_text(root, &mut text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
  }

  fn within_chrome(element: ElementRef) -> bool {
    iter::once(*element)
      .chain(element.ancestors())
      .any(|node| Self::classify(node.value()) == NodeClass::Chrome)
  }

  fn write_element(element: ElementRef, out: &mut String) {
    let name = element.value().name();

    out.push('<');
    out.push_str(name);

    for (attribute, value) in element.value().attrs() {
      out.push_str(&format!(
        " {attribute}=\"{}\"",
        html_escape::encode_double_quoted_attribute(value)
      ));
    }

    out.push('>');

    if Self::VOID_TAGS.contains(&name) {
      return;
    }

    for child in element.children() {
      match Self::classify(child.value()) {
        NodeClass::Text => {
          if let Some(text) = child.value().as_text() {
            out.push_str(&html_escape::encode_text(&**text));
          }
        }
        NodeClass::Content => {
          if let Some(child) = ElementRef::wrap(child) {
            Self::write_element(child, out);
          }
        }
        NodeClass::Chrome
        | NodeClass::Markup
        | NodeClass::NoScript
        | NodeClass::Script => {}
      }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
  }

  fn write_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
      match Self::classify(child.value()) {
        NodeClass::Text => {
          if let Some(text) = child.value().as_text() {
            out.push_str(text);
          }
        }
        NodeClass::Markup | NodeClass::Script => {}
        NodeClass::Chrome | NodeClass::Content | NodeClass::NoScript => {
          if let Some(child) = ElementRef::wrap(child) {
            Self::write_text(child, out);
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Title</title><style>body { color: red }</style></head>
  <body>
    <header><h1>Site header</h1></header>
    <nav><a href="/">Home</a></nav>
    <div class="sidebar widget">Related links</div>
    <main>
      <h1>Article &amp; heading</h1>
      <!-- hidden comment -->
      <p>First <b>paragraph</b>.</p>
      <script>console.log("tracking")</script>
      <noscript>Enable JavaScript</noscript>
      <img src="a.png" alt="diagram">
      <aside>Aside note</aside>
    </main>
    <footer>Copyright</footer>
  </body>
</html>"#;

  #[test]
  fn main_region_prefers_main_element() {
    let document = Document::parse(PAGE);

    assert_eq!(document.main_region().unwrap().value().name(), "main");
  }

  #[test]
  fn main_region_follows_selector_priority() {
    let document = Document::parse(
      r#"<body><div class="content">class</div><div id="content">id</div><div role="main">role</div></body>"#,
    );

    assert_eq!(
      document.main_region().unwrap().value().attr("role"),
      Some("main")
    );

    let document = Document::parse(
      r#"<body><div class="content">class</div><div id="content">id</div></body>"#,
    );

    assert_eq!(document.main_region().unwrap().value().id(), Some("content"));
  }

  #[test]
  fn main_region_skips_candidates_inside_chrome() {
    let document = Document::parse(
      r#"<body><header><div id="content">Menu</div></header><div class="content">Body</div></body>"#,
    );

    assert_eq!(
      document.main_region().unwrap().text().collect::<String>(),
      "Body"
    );

    let document = Document::parse(
      r#"<body><nav><article>Links</article></nav><p>Body</p></body>"#,
    );

    assert_eq!(document.main_region().unwrap().value().name(), "body");
  }

  #[test]
  fn main_region_skips_chrome_classed_candidates() {
    let document = Document::parse(
      r#"<body><main class="sidebar">Side</main><article>Story</article></body>"#,
    );

    assert_eq!(document.main_region().unwrap().value().name(), "article");
  }

  #[test]
  fn main_region_falls_back_to_body() {
    let document = Document::parse("<p>Just a paragraph</p>");

    assert_eq!(document.main_region().unwrap().value().name(), "body");
  }

  #[test]
  fn main_content_html_drops_non_content_nodes() {
    let html = Document::parse(PAGE).main_content_html().unwrap();

    assert!(html.starts_with("<main>"));
    assert!(html.ends_with("</main>"));
    assert!(html.contains("<h1>Article &amp; heading</h1>"));
    assert!(html.contains("<p>First <b>paragraph</b>.</p>"));
    assert!(html.contains(" src=\"a.png\""));
    assert!(html.contains(" alt=\"diagram\""));
    assert!(!html.contains("</img>"));

    for hidden in [
      "hidden comment",
      "tracking",
      "Enable JavaScript",
      "Aside note",
    ] {
      assert!(!html.contains(hidden), "{hidden} should be removed");
    }
  }

  #[test]
  fn classify_recognizes_chrome_containers() {
    let document = Document::parse(
      r#"<body><div role="navigation">a</div><ul class="menu navbar">b</ul><div class="navigational">c</div></body>"#,
    );

    let classes = document
      .body()
      .unwrap()
      .children()
      .map(|child| Document::classify(child.value()))
      .collect::<Vec<_>>();

    assert_eq!(
      classes,
      [NodeClass::Chrome, NodeClass::Chrome, NodeClass::Content]
    );
  }

  #[test]
  fn text_skips_scripts_and_styles() {
    let text = Document::parse(PAGE).text();

    assert!(text.starts_with("Site header Home Related links Article & heading"));
    assert!(text.contains("First paragraph."));
    assert!(!text.contains("tracking"));
    assert!(!text.contains("color: red"));
    assert!(!text.contains("hidden comment"));
    assert!(text.ends_with("Copyright"));
    assert!(!text.contains("  "));
  }
}
