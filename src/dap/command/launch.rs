use serde_json::Value;

use crate::dap::command::{Command, CommandResult};
use crate::dap::document::{read_bool, read_str};
use crate::dap::session::DebuggerSession;

/// Arguments of `launch` and `attach` requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchArguments {
    /// True for `attach`, false for `launch`.
    pub attach: bool,
    pub program: String,
    pub cwd: String,
    pub stop_on_entry: bool,
    pub no_debug: bool,
}

impl LaunchArguments {
    pub fn parse(cmd: &Command) -> Self {
        let args = cmd.arguments();
        Self {
            attach: cmd.name() == "attach",
            program: read_str(args, "program", "").to_string(),
            cwd: read_str(args, "cwd", "").to_string(),
            stop_on_entry: read_bool(args, "stopOnEntry", false),
            no_debug: read_bool(args, "noDebug", false),
        }
    }
}

/// Start a new debuggee or attach to a running one.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        self.session.launch(&LaunchArguments::parse(cmd))?;
        Ok(None)
    }
}
