//! Tests for the suggest endpoint client

use super::*;
use crate::suggest::types::SuggestionKind;
use crate::test_utils::test_helpers::{block_on, closed_port_url, spawn_http_responder};

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_new_rejects_relative_url() {
    let err = SuggestClient::new("vault.local", TIMEOUT).unwrap_err();
    assert!(matches!(err, VaultError::InvalidBaseUrl(_)));
}

#[test]
fn test_new_rejects_non_http_scheme() {
    assert!(SuggestClient::new("ftp://vault.local", TIMEOUT).is_err());
    assert!(SuggestClient::new("mailto:admin@studyvault.com", TIMEOUT).is_err());
}

#[test]
fn test_suggest_url_encodes_query() {
    let client = SuggestClient::new("http://vault.local:5000", TIMEOUT).unwrap();
    let url = client.suggest_url("c++ & data/structures");

    assert_eq!(url.path(), "/api/search/suggest");
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![("q".to_string(), "c++ & data/structures".to_string())]
    );
}

#[test]
fn test_suggest_url_keeps_path_prefix() {
    let client = SuggestClient::new("https://example.edu/vault", TIMEOUT).unwrap();
    let url = client.suggest_url("ph");
    assert_eq!(url.as_str(), "https://example.edu/vault/api/search/suggest?q=ph");
}

#[test]
fn test_resolve_server_relative_url() {
    let client = SuggestClient::new("http://vault.local:5000/", TIMEOUT).unwrap();
    assert_eq!(client.resolve("/folder/5"), "http://vault.local:5000/folder/5");
}

#[test]
fn test_resolve_keeps_absolute_url() {
    let client = SuggestClient::new("http://vault.local", TIMEOUT).unwrap();
    assert_eq!(
        client.resolve("https://cdn.example.com/f.pdf"),
        "https://cdn.example.com/f.pdf"
    );
}

#[test]
fn test_suggest_success() {
    let body = r#"[{"name":"Physics 101","url":"/folder/5","type":"folder"}]"#;
    let (base_url, seen) = spawn_http_responder(vec![(200, body.to_string())]);
    let client = SuggestClient::new(&base_url, TIMEOUT).unwrap();

    let suggestions = block_on(client.suggest("phys")).unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Physics 101");
    assert_eq!(suggestions[0].kind, SuggestionKind::Folder);
    let request_line = seen.recv().unwrap();
    assert!(request_line.starts_with("GET /api/search/suggest?q=phys "));
}

#[test]
fn test_suggest_empty_array_is_ok() {
    let (base_url, _seen) = spawn_http_responder(vec![(200, "[]".to_string())]);
    let client = SuggestClient::new(&base_url, TIMEOUT).unwrap();

    assert_eq!(block_on(client.suggest("zz")).unwrap(), Vec::new());
}

#[test]
fn test_suggest_non_2xx_is_server_error() {
    let (base_url, _seen) = spawn_http_responder(vec![(500, "oops".to_string())]);
    let client = SuggestClient::new(&base_url, TIMEOUT).unwrap();

    let err = block_on(client.suggest("phys")).unwrap_err();
    assert_eq!(err, SuggestError::Server("HTTP 500".to_string()));
}

#[test]
fn test_suggest_malformed_body_is_server_error() {
    let (base_url, _seen) = spawn_http_responder(vec![(200, "{not json".to_string())]);
    let client = SuggestClient::new(&base_url, TIMEOUT).unwrap();

    let err = block_on(client.suggest("phys")).unwrap_err();
    assert!(matches!(err, SuggestError::Server(_)));
}

#[test]
fn test_suggest_connection_refused_is_network_error() {
    let client = SuggestClient::new(&closed_port_url(), TIMEOUT).unwrap();

    let err = block_on(client.suggest("phys")).unwrap_err();
    assert!(matches!(err, SuggestError::Network(_)));
}
