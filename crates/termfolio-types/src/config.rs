//! Session configuration -- profile content, theme colors, date locale.
//!
//! Loaded from a TOML file. Every field has a default, so an empty file (or
//! no file at all) yields the built-in profile.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level configuration for a termfolio session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TermfolioConfig {
    /// Locale tag for `date` output (e.g. "en-US", "de_DE.UTF-8").
    /// `None` means: take it from the environment.
    #[serde(default)]
    pub locale: Option<String>,
    /// Content shown by `whoami`, `role`, `about`, and `links`.
    #[serde(default)]
    pub profile: Profile,
    /// Color per transcript entry style.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl TermfolioConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// The person the terminal introduces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_about")]
    pub about: String,
    /// Line printed above the link list.
    #[serde(default = "default_links_intro")]
    pub links_intro: String,
    #[serde(default = "default_links")]
    pub links: Vec<Link>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            role: default_role(),
            about: default_about(),
            links_intro: default_links_intro(),
            links: default_links(),
        }
    }
}

/// A labeled URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

fn default_name() -> String {
    "Abdullokh Saidakbarov".to_string()
}
fn default_role() -> String {
    "Frontend Developer".to_string()
}
fn default_about() -> String {
    "Aspiring Frontend Developer with a strong foundation in React.js and TypeScript. \
     Passionate about continuous learning and eager to explore backend development. \
     Committed to becoming a versatile full-stack developer. \u{1F680}"
        .to_string()
}
fn default_links_intro() -> String {
    "Here are my social media links:".to_string()
}
fn default_links() -> Vec<Link> {
    vec![
        Link::new("Telegram", "https://t.me/Saidakbarovv_A"),
        Link::new("Instagram", "https://www.instagram.com/abdullakh_bro"),
        Link::new("GitHub", "https://github.com/RevenBro"),
    ]
}

/// Color names for each transcript entry style.
///
/// Names are resolved by the renderer; anything it does not recognize
/// falls back to white.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_banner")]
    pub banner: String,
    #[serde(default = "default_help")]
    pub help: String,
    /// Echoed user input.
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_error")]
    pub error: String,
    /// `about` output.
    #[serde(default = "default_biography")]
    pub biography: String,
    #[serde(default = "default_links_color")]
    pub links: String,
    /// Everything else.
    #[serde(default = "default_text")]
    pub text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            help: default_help(),
            input: default_input(),
            error: default_error(),
            biography: default_biography(),
            links: default_links_color(),
            text: default_text(),
        }
    }
}

fn default_banner() -> String {
    "blue".to_string()
}
fn default_help() -> String {
    "yellow".to_string()
}
fn default_input() -> String {
    "green".to_string()
}
fn default_error() -> String {
    "red".to_string()
}
fn default_biography() -> String {
    "magenta".to_string()
}
fn default_links_color() -> String {
    "cyan".to_string()
}
fn default_text() -> String {
    "white".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TermfolioError;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = TermfolioConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, TermfolioConfig::default());
        assert_eq!(cfg.profile.role, "Frontend Developer");
        assert_eq!(cfg.profile.links.len(), 3);
        assert!(cfg.locale.is_none());
    }

    #[test]
    fn partial_profile_keeps_other_defaults() {
        let cfg = TermfolioConfig::from_toml_str(
            r#"
            locale = "de_DE.UTF-8"

            [profile]
            name = "Ada Lovelace"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.locale.as_deref(), Some("de_DE.UTF-8"));
        assert_eq!(cfg.profile.name, "Ada Lovelace");
        assert_eq!(cfg.profile.role, "Frontend Developer");
        assert_eq!(cfg.profile.links_intro, "Here are my social media links:");
    }

    #[test]
    fn links_replace_defaults_in_order() {
        let cfg = TermfolioConfig::from_toml_str(
            r#"
            [[profile.links]]
            label = "Blog"
            url = "https://example.org"

            [[profile.links]]
            label = "Mastodon"
            url = "https://example.social/@me"
            "#,
        )
        .unwrap();
        let labels: Vec<&str> = cfg.profile.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Blog", "Mastodon"]);
    }

    #[test]
    fn theme_override() {
        let cfg = TermfolioConfig::from_toml_str("[theme]\nerror = \"bright red\"").unwrap();
        assert_eq!(cfg.theme.error, "bright red");
        assert_eq!(cfg.theme.help, "yellow");
    }

    #[test]
    fn example_config_parses() {
        let text = include_str!("../../../termfolio.example.toml");
        let cfg = TermfolioConfig::from_toml_str(text).unwrap();
        assert_eq!(cfg.locale.as_deref(), Some("en-GB"));
        assert_eq!(cfg.profile.links.len(), 2);
        assert_eq!(cfg.theme, ThemeConfig::default());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = TermfolioConfig::from_toml_str("[profile\nname=").unwrap_err();
        assert!(matches!(err, TermfolioError::TomlParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TermfolioConfig::load(Path::new("/nonexistent/termfolio.toml")).unwrap_err();
        assert!(matches!(err, TermfolioError::Io(_)));
    }
}
