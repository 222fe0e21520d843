use std::str::FromStr;

use serde_json::Value;
use strum_macros::{Display, EnumString};

use crate::dap::command::{Command, CommandResult};
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;

/// Step direction, defined by the name of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum StepKind {
    /// Step over the current line.
    #[strum(serialize = "next")]
    Over,
    /// Step into a function call at the current line.
    #[strum(serialize = "stepIn")]
    Into,
    /// Step out of the current function.
    #[strum(serialize = "stepOut")]
    Out,
}

/// Single step of a thread. Without `threadId` the thread in focus is stepped.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let kind =
            StepKind::from_str(cmd.name()).map_err(|_| Error::MissingArgument("command"))?;
        self.session.step(cmd.target_thread(), kind)?;
        Ok(None)
    }
}
