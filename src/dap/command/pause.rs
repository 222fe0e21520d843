use serde_json::Value;

use crate::dap::command::{Command, CommandResult};
use crate::dap::session::DebuggerSession;

pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        self.session.pause(cmd.target_thread())?;
        Ok(None)
    }
}
