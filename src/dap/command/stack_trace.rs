use serde::Serialize;
use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::document::read_int;
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;
use crate::dap::types::StackFrame;

#[derive(Debug, Clone, PartialEq)]
pub struct StackTraceArguments {
    pub thread_id: i64,
    pub start_frame: i64,
    /// Maximum number of frames to return, `0` means all frames.
    pub levels: i64,
}

impl StackTraceArguments {
    pub fn parse(cmd: &Command) -> CommandResult<Self> {
        let thread_id = cmd.target_thread_id();
        if thread_id < 0 {
            return Err(Error::MissingArgument("threadId"));
        }
        let args = cmd.arguments();
        Ok(Self {
            thread_id,
            start_frame: read_int(args, "startFrame", 0).max(0),
            levels: read_int(args, "levels", 0).max(0),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StackTraceBody {
    stack_frames: Vec<StackFrame>,
    total_frames: usize,
}

pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let args = StackTraceArguments::parse(cmd)?;
        let (stack_frames, total_frames) = self.session.stack_trace(&args)?;
        body(StackTraceBody {
            stack_frames,
            total_frames,
        })
    }
}
