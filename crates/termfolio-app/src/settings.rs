//! Configuration file and locale resolution for the console session.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use termfolio_terminal::DateLocale;
use termfolio_types::config::TermfolioConfig;
use termfolio_types::error::{Result, TermfolioError};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "TERMFOLIO_CONFIG";

/// Locale variables consulted for `date`, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Pick the configuration file: CLI argument first, then `TERMFOLIO_CONFIG`.
pub fn config_path(arg: Option<OsString>, env_value: Option<OsString>) -> Option<PathBuf> {
    arg.or(env_value)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Load the configuration, or the built-in defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<TermfolioConfig> {
    match path {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            TermfolioConfig::load(path)
        },
        None => {
            log::info!("No config file; using built-in profile");
            Ok(TermfolioConfig::default())
        },
    }
}

/// Decide the date locale.
///
/// An explicit `locale` in the config must be recognized. Otherwise the
/// first non-empty of `LC_ALL`, `LC_TIME`, `LANG` is used, falling back to
/// US formatting for anything unknown.
pub fn resolve_locale(
    config: &TermfolioConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<DateLocale> {
    if let Some(tag) = config.locale.as_deref() {
        return DateLocale::parse_tag(tag)
            .ok_or_else(|| TermfolioError::Config(format!("unknown locale: {tag}")));
    }
    let from_env = LOCALE_VARS
        .iter()
        .filter_map(|var| env(var))
        .find(|value| !value.is_empty());
    Ok(from_env
        .map(|tag| DateLocale::from_tag(&tag))
        .unwrap_or_default())
}
