//! Error types for termfolio.
//!
//! The command interpreter never fails: an unknown command is an ordinary
//! response. These errors cover the host side (loading configuration).

use std::io;

/// Errors produced outside the command interpreter.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
