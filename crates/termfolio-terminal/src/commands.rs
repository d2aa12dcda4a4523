//! Built-in commands for the termfolio terminal.

use crate::interpreter::{
    Command, CommandOutput, CommandRegistry, Environment, ResponseKind, ResponseRecord,
};

/// Register all built-in commands into a registry.
///
/// Registration order is the order `help` lists them in. `help` itself is
/// answered by the interpreter and always listed first.
pub fn register_builtins(reg: &mut CommandRegistry) {
    crate::profile_commands::register_identity_commands(reg);
    reg.register(Box::new(ClearCmd));
    crate::system_commands::register_system_commands(reg);
    reg.register(Box::new(EchoCmd));
    crate::profile_commands::register_profile_commands(reg);
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn execute(&self, _arg: &str, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Clear
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print the text"
    }
    fn usage(&self) -> &str {
        "echo [text]"
    }
    fn takes_argument(&self) -> bool {
        true
    }
    fn execute(&self, arg: &str, _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Response(ResponseRecord::text(ResponseKind::Echo, arg))
    }
}
