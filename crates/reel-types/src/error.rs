//! Error types for reel.
//!
//! Only the configuration layer is fallible. Palette normalization and
//! style injection degrade to no-ops instead of returning errors.

use std::io;

/// Errors produced while loading skin configuration.
#[derive(Debug, thiserror::Error)]
pub enum ReelError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ReelError>;
