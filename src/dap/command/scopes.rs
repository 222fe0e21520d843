use serde::Serialize;
use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::document::read_int;
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;
use crate::dap::types::Scope;

#[derive(Serialize)]
struct ScopesBody {
    scopes: Vec<Scope>,
}

/// List variable scopes of a stack frame.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let frame_id = read_int(cmd.arguments(), "frameId", -1);
        if frame_id < 0 {
            return Err(Error::MissingArgument("frameId"));
        }
        let scopes = self.session.scopes(frame_id)?;
        body(ScopesBody { scopes })
    }
}
