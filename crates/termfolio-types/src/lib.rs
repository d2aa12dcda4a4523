//! Foundation types for termfolio.
//!
//! Shared by the interpreter and the host application: the error type and
//! the TOML-backed session configuration (profile, theme, locale).

pub mod config;
pub mod error;
