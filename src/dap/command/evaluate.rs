use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::document::{read_int, read_str, trim};
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateArguments {
    pub expression: String,
    /// Frame for evaluation, `None` means global scope.
    pub frame_id: Option<i64>,
    /// Evaluation context: `repl`, `watch` or `hover`.
    pub context: String,
}

impl EvaluateArguments {
    pub fn parse(args: &Value) -> CommandResult<Self> {
        let expression = trim(read_str(args, "expression", ""));
        if expression.is_empty() {
            return Err(Error::MissingArgument("expression"));
        }
        let frame_id = read_int(args, "frameId", -1);
        Ok(Self {
            expression: expression.to_string(),
            frame_id: (frame_id >= 0).then_some(frame_id),
            context: read_str(args, "context", "repl").to_string(),
        })
    }
}

pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let args = EvaluateArguments::parse(cmd.arguments())?;
        body(self.session.evaluate(&args)?)
    }
}
