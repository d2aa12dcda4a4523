//! Command trait, registry, and dispatch logic.
//!
//! Matching is flat: the trimmed, lower-cased line is compared against the
//! registered keywords, then against `<keyword> ` prefixes for commands that
//! take an argument. Anything else becomes an `Error` response; dispatch
//! never returns a Rust error.

use std::collections::HashMap;

use serde::Serialize;
use termfolio_types::config::{Link, Profile};

use crate::time::{DateLocale, LocalClock, TimeService};

/// Semantic category of a response. Rendering is a function of this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Welcome text at session start and after `clear`.
    Banner,
    Help,
    /// `date` output.
    Timestamp,
    /// `whoami` output.
    Identity,
    Role,
    /// `about` output.
    Biography,
    Links,
    Echo,
    /// Unrecognized command.
    Error,
}

/// Response content. Never carries markup or styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    Text(String),
    Links { intro: String, links: Vec<Link> },
}

/// The result of interpreting one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    pub kind: ResponseKind,
    pub payload: Payload,
}

impl ResponseRecord {
    /// A record with a plain-text payload.
    pub fn text(kind: ResponseKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            payload: Payload::Text(text.into()),
        }
    }

    /// The text payload, if this record has one.
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            Payload::Links { .. } => None,
        }
    }
}

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A record to append to the transcript.
    Response(ResponseRecord),
    /// Signal to discard the transcript and show the banner again.
    Clear,
}

impl CommandOutput {
    /// The response record, unless this is the clear signal.
    pub fn record(&self) -> Option<&ResponseRecord> {
        match self {
            CommandOutput::Response(record) => Some(record),
            CommandOutput::Clear => None,
        }
    }
}

/// Read-only context passed to every command.
pub struct Environment<'a> {
    /// Content for the identity commands.
    pub profile: &'a Profile,
    /// Clock for `date`.
    pub time: &'a dyn TimeService,
    /// How `date` renders timestamps.
    pub locale: DateLocale,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string shown by `help` (e.g. "echo \[text\]").
    fn usage(&self) -> &str {
        self.name()
    }

    /// Whether the command is matched as `<name> <argument>` rather than
    /// as a bare keyword.
    fn takes_argument(&self) -> bool {
        false
    }

    /// Execute the command. `arg` is empty for keyword commands.
    fn execute(&self, arg: &str, env: &Environment<'_>) -> CommandOutput;
}

/// Registry of available commands, in registration order.
///
/// Names are stored lower-cased, so lookup is case-insensitive and names
/// are unique regardless of case.
pub struct CommandRegistry {
    commands: Vec<(String, Box<dyn Command>)>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping the original position in `help`.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().trim().to_lowercase();
        if let Some(&slot) = self.index.get(&key) {
            log::warn!("command '{key}' registered twice; replacing");
            self.commands[slot] = (key, cmd);
        } else {
            self.index.insert(key.clone(), self.commands.len());
            self.commands.push((key, cmd));
        }
    }

    /// Look up a command by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        let key = normalize(name);
        self.index
            .get(&key)
            .map(|&slot| self.commands[slot].1.as_ref())
    }

    /// Number of registered commands (not counting `help`).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Return (usage, description) pairs in registration order.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|(_, c)| (c.usage(), c.description()))
            .collect()
    }

    /// Text of the `help` response. `help` itself is listed first.
    pub fn help_text(&self) -> String {
        let mut out = String::from("Available commands:\n- help: Show this help message");
        for (usage, description) in self.list_commands() {
            out.push_str(&format!("\n- {usage}: {description}"));
        }
        out
    }

    /// Resolve an already-normalized line to a command and its argument.
    ///
    /// Exact keyword matches win over prefix matches. A prefix match needs
    /// the name followed by exactly one space; the argument is everything
    /// after that space.
    pub fn resolve<'a>(&'a self, normalized: &'a str) -> Option<(&'a dyn Command, &'a str)> {
        if let Some(cmd) = self.get(normalized)
            && !cmd.takes_argument()
        {
            return Some((cmd, ""));
        }
        self.commands
            .iter()
            .filter(|(_, cmd)| cmd.takes_argument())
            .find_map(|(name, cmd)| {
                normalized
                    .strip_prefix(name.as_str())
                    .and_then(|rest| rest.strip_prefix(' '))
                    .map(|arg| (cmd.as_ref(), arg))
            })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim and lower-case an input line for matching.
///
/// Trims Unicode white space and U+FEFF (byte order mark), but not U+0085
/// (next line).
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
        .to_lowercase()
}

/// Maps raw input lines to responses against a fixed command registry.
///
/// Holds no per-line state: interpreting the same line twice gives the
/// same result, except for `date`, which reads the clock.
pub struct Interpreter {
    registry: CommandRegistry,
    profile: Profile,
    time: Box<dyn TimeService>,
    locale: DateLocale,
}

impl Interpreter {
    /// Create an interpreter over `registry` with the default profile, the
    /// local clock, and US date formatting.
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            profile: Profile::default(),
            time: Box::new(LocalClock),
            locale: DateLocale::default(),
        }
    }

    /// Create an interpreter with all built-in commands registered.
    pub fn with_builtins() -> Self {
        let mut registry = CommandRegistry::new();
        crate::commands::register_builtins(&mut registry);
        Self::new(registry)
    }

    /// Replace the profile shown by the identity commands.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Replace the clock read by `date`.
    pub fn with_clock(mut self, time: Box<dyn TimeService>) -> Self {
        self.time = time;
        self
    }

    /// Replace the locale used to format `date`.
    pub fn with_locale(mut self, locale: DateLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Interpret one raw input line.
    ///
    /// The line is trimmed and lower-cased before matching, so the `echo`
    /// argument comes back lower-cased. The error message quotes `raw`
    /// unmodified.
    pub fn interpret(&self, raw: &str) -> CommandOutput {
        let normalized = normalize(raw);

        if normalized == "help" {
            return CommandOutput::Response(ResponseRecord::text(
                ResponseKind::Help,
                self.registry.help_text(),
            ));
        }

        match self.registry.resolve(&normalized) {
            Some((cmd, arg)) => {
                log::trace!("dispatch '{}' (arg {arg:?})", cmd.name());
                let env = Environment {
                    profile: &self.profile,
                    time: self.time.as_ref(),
                    locale: self.locale,
                };
                cmd.execute(arg, &env)
            },
            None => {
                log::debug!("unrecognized command: {raw:?}");
                CommandOutput::Response(ResponseRecord::text(
                    ResponseKind::Error,
                    format!("Command not found: {raw}. Type 'help' for available commands."),
                ))
            },
        }
    }
}
