//! Search-as-you-type suggestions
//!
//! Keystrokes are debounced into lookups against the server's suggest
//! endpoint. Lookups run on a background worker; every request carries a
//! sequence number and only the response to the most recently issued request
//! may reach the panel.

pub mod client;
pub mod debouncer;
pub mod suggest_render;
pub mod suggest_state;
pub mod types;
pub mod worker;

pub use client::{SuggestClient, SuggestError, parse_base_url, resolve_url};
pub use debouncer::Debouncer;
pub use suggest_state::{SuggestRequest, SuggestResponse, SuggestState, is_searchable};
pub use types::{Suggestion, SuggestionKind, parse_suggestions};
