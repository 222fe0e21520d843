use serde::Serialize;
use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::document::{read_int, read_str, trim};
use crate::dap::session::DebuggerSession;
use crate::dap::types::CompletionItem;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionsArguments {
    /// Input text, without surrounding whitespaces.
    pub text: String,
    pub column: i64,
    pub frame_id: Option<i64>,
}

impl CompletionsArguments {
    pub fn parse(args: &Value) -> Self {
        let frame_id = read_int(args, "frameId", -1);
        Self {
            text: trim(read_str(args, "text", "")).to_string(),
            column: read_int(args, "column", 1),
            frame_id: (frame_id >= 0).then_some(frame_id),
        }
    }
}

#[derive(Serialize)]
struct CompletionsBody {
    targets: Vec<CompletionItem>,
}

/// Suggest completions for a partially typed expression.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let args = CompletionsArguments::parse(cmd.arguments());
        let targets = self.session.completions(&args)?;
        body(CompletionsBody { targets })
    }
}
