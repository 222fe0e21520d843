use serde_json::Value;

use crate::dap::command::CommandResult;
use crate::dap::session::DebuggerSession;

/// Client finished sending initial configuration (breakpoints, exception filters).
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self) -> CommandResult<Option<Value>> {
        self.session.configuration_done()?;
        Ok(None)
    }
}
