//! Command interpreter and transcript store.
//!
//! The interpreter is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered by name. The interpreter
//! normalizes an input line, resolves it to a keyword or prefix command,
//! and returns a typed response. The transcript store records inputs and
//! responses for the host to render.

mod commands;
mod interpreter;
mod profile_commands;
mod system_commands;
pub mod time;
mod transcript;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (a response or the clear signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with lookup and prefix resolution.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Maps raw input lines to command output.
pub use interpreter::Interpreter;
/// Response content and its semantic kind.
pub use interpreter::{Payload, ResponseKind, ResponseRecord};
/// Register `whoami`, `role`, `about`, and `links`.
pub use profile_commands::{register_identity_commands, register_profile_commands};
/// Register `date`.
pub use system_commands::register_system_commands;
/// Clock and date formatting used by `date`.
pub use time::{DateLocale, FixedClock, LocalClock, TimeService};
/// Transcript entries and the session store.
pub use transcript::{BANNER, TranscriptEntry, TranscriptStore};
