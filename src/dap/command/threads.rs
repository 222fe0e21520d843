use serde::Serialize;
use serde_json::Value;

use crate::dap::command::{body, CommandResult};
use crate::dap::session::DebuggerSession;
use crate::dap::types::Thread;

#[derive(Serialize)]
struct ThreadsBody {
    threads: Vec<Thread>,
}

pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self) -> CommandResult<Option<Value>> {
        let threads = self.session.threads()?;
        body(ThreadsBody { threads })
    }
}
