use serde::Serialize;
use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::document::read_int;
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;
use crate::dap::types::Variable;

#[derive(Debug, Clone, PartialEq)]
pub struct VariablesArguments {
    pub variables_reference: i64,
    /// Index of the first child to return.
    pub start: i64,
    /// Number of children to return, `0` means all children.
    pub count: i64,
}

impl VariablesArguments {
    pub fn parse(args: &Value) -> CommandResult<Self> {
        let variables_reference = read_int(args, "variablesReference", -1);
        if variables_reference <= 0 {
            return Err(Error::MissingArgument("variablesReference"));
        }
        Ok(Self {
            variables_reference,
            start: read_int(args, "start", 0).max(0),
            count: read_int(args, "count", 0).max(0),
        })
    }
}

#[derive(Serialize)]
struct VariablesBody {
    variables: Vec<Variable>,
}

/// Children of a variables container (scope, array, object).
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let args = VariablesArguments::parse(cmd.arguments())?;
        let variables = self.session.variables(&args)?;
        body(VariablesBody { variables })
    }
}
