use serde_json::Value;

use crate::dap::command::{Command, CommandResult, EMPTY_ARGUMENTS};
use crate::dap::document::{read_int, read_object, read_str};
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;

#[derive(Debug, Clone, PartialEq)]
pub struct RunToLocationArguments {
    pub thread_id: Option<i64>,
    pub path: String,
    pub line: i64,
}

impl RunToLocationArguments {
    pub fn parse(cmd: &Command) -> CommandResult<Self> {
        let args = cmd.arguments();
        let source = read_object(args, "source", &EMPTY_ARGUMENTS);
        let path = read_str(source, "path", "");
        if path.is_empty() {
            return Err(Error::MissingArgument("source.path"));
        }
        let line = read_int(args, "line", -1);
        if line <= 0 {
            return Err(Error::MissingArgument("line"));
        }

        Ok(Self {
            thread_id: cmd.target_thread(),
            path: path.to_string(),
            line,
        })
    }
}

/// Resume the thread and stop it when the given source line is reached.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let args = RunToLocationArguments::parse(cmd)?;
        self.session.run_to_location(&args)?;
        Ok(None)
    }
}
