use thiserror::Error;

use crate::suggest::SuggestError;

/// Startup errors for studyvault
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Invalid server URL '{0}': expected an absolute http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Suggest(#[from] SuggestError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
