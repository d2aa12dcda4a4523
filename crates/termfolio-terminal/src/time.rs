//! Clock abstraction and locale-specific date rendering for `date`.

use chrono::{Local, NaiveDateTime};

/// Abstraction over the wall clock.
pub trait TimeService {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeService for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeService for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Human-readable date/time conventions, one per supported locale family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `10/17/2026, 3:04:05 PM`
    #[default]
    EnUs,
    /// `17/10/2026, 15:04:05`
    EnGb,
    /// `17.10.2026, 15:04:05`
    De,
    /// `17/10/2026 15:04:05`
    Fr,
    /// `2026/10/17 15:04:05`
    Ja,
    /// `2026-10-17 15:04:05`
    Iso,
}

impl DateLocale {
    /// Parse a POSIX (`de_DE.UTF-8`, `fr_FR@euro`) or BCP-47 (`en-GB`) tag.
    ///
    /// `C` and `POSIX` map to US formatting. Returns `None` for locales
    /// without a known pattern.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let base = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();
        let (lang, region) = match base.split_once('-') {
            Some((lang, region)) => (lang, Some(region)),
            None => (base.as_str(), None),
        };
        match (lang, region) {
            ("c" | "posix", None) => Some(Self::EnUs),
            ("en", None | Some("us")) => Some(Self::EnUs),
            ("en", Some("gb" | "ie")) => Some(Self::EnGb),
            ("de", _) => Some(Self::De),
            ("fr", None | Some("fr" | "be" | "ch")) => Some(Self::Fr),
            ("ja", _) => Some(Self::Ja),
            ("sv", _) | ("iso", None) => Some(Self::Iso),
            _ => None,
        }
    }

    /// Like [`parse_tag`](Self::parse_tag), falling back to US formatting.
    pub fn from_tag(tag: &str) -> Self {
        Self::parse_tag(tag).unwrap_or_default()
    }

    /// `chrono` format pattern for this locale.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::EnUs => "%-m/%-d/%Y, %-I:%M:%S %p",
            Self::EnGb => "%d/%m/%Y, %H:%M:%S",
            Self::De => "%-d.%-m.%Y, %H:%M:%S",
            Self::Fr => "%d/%m/%Y %H:%M:%S",
            Self::Ja => "%Y/%-m/%-d %-H:%M:%S",
            Self::Iso => "%Y-%m-%d %H:%M:%S",
        }
    }

    pub fn format(self, at: &NaiveDateTime) -> String {
        at.format(self.pattern()).to_string()
    }
}
