//! System commands: date.

use crate::interpreter::{
    Command, CommandOutput, CommandRegistry, Environment, ResponseKind, ResponseRecord,
};

/// Register system commands into a registry.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(DateCmd));
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn execute(&self, _arg: &str, env: &Environment<'_>) -> CommandOutput {
        let now = env.time.now();
        CommandOutput::Response(ResponseRecord::text(
            ResponseKind::Timestamp,
            env.locale.format(&now),
        ))
    }
}
