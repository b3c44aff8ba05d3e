use std::fmt;

use serde::Deserialize;

use super::client::SuggestError;

/// Kind of item a suggestion points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Folder,
    File,
}

impl SuggestionKind {
    pub fn icon(self) -> &'static str {
        match self {
            SuggestionKind::Folder => "📁",
            SuggestionKind::File => "📄",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SuggestionKind::Folder => "folder",
            SuggestionKind::File => "file",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry returned by `GET /api/search/suggest`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub name: String,
    /// Server-relative link, e.g. `/folder/5`
    pub url: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
        }
    }
}

/// Decode a suggest endpoint body
///
/// Anything other than a JSON array of well-formed entries is a server error.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, SuggestError> {
    serde_json::from_str(body)
        .map_err(|e| SuggestError::Server(format!("malformed suggestion payload: {}", e)))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
