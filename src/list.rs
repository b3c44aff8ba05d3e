//! One-shot lookups for `--list`
//!
//! Same validation and endpoint as the interactive panel, printed as
//! tab-separated `kind name url` lines for scripting.

use crate::config::SearchConfig;
use crate::suggest::{SuggestClient, SuggestError, Suggestion, is_searchable};

/// Look up `query` once, honoring the minimum query length
///
/// Too-short queries return no suggestions without touching the network.
pub fn list_suggestions(
    client: &SuggestClient,
    search: &SearchConfig,
    query: &str,
) -> Result<Vec<Suggestion>, SuggestError> {
    if !is_searchable(query, search.min_query_chars) {
        return Ok(Vec::new());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SuggestError::Network(e.to_string()))?;

    runtime.block_on(client.suggest(query))
}

pub fn format_line(client: &SuggestClient, suggestion: &Suggestion) -> String {
    format!(
        "{}\t{}\t{}",
        suggestion.kind,
        suggestion.name,
        client.resolve(&suggestion.url)
    )
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod list_tests;
