use serde::Serialize;
use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::session::DebuggerSession;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContinueBody {
    all_threads_continued: bool,
}

/// Resume execution. Without `threadId` the thread in focus is resumed.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        self.session.resume(cmd.target_thread())?;
        body(ContinueBody {
            all_threads_continued: true,
        })
    }
}
