use super::*;

/// Result handed back to the tool caller. Failures are carried as data.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolResult {
  pub(crate) content: String,
  pub(crate) is_error: bool,
}

impl ToolResult {
  pub(crate) fn error(message: impl Into<String>) -> Self {
    Self {
      content: message.into(),
      is_error: true,
    }
  }

  pub(crate) fn success(content: impl Into<String>) -> Self {
    Self {
      content: content.into(),
      is_error: false,
    }
  }
}

impl From<Result<String, FetchError>> for ToolResult {
  fn from(result: Result<String, FetchError>) -> Self {
    match result {
      Ok(content) => Self::success(content),
      Err(error) => Self::error(error.to_string()),
    }
  }
}
