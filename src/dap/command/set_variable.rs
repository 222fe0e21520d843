use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::document::{read_int, read_str, strip_variable_sigil, trim};
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;

#[derive(Debug, Clone, PartialEq)]
pub struct SetVariableArguments {
    pub variables_reference: i64,
    /// Variable name without `$` or `::$` prefix.
    pub name: String,
    pub value: String,
}

impl SetVariableArguments {
    pub fn parse(args: &Value) -> CommandResult<Self> {
        let variables_reference = read_int(args, "variablesReference", -1);
        if variables_reference <= 0 {
            return Err(Error::MissingArgument("variablesReference"));
        }
        let name = strip_variable_sigil(read_str(args, "name", ""));
        if name.is_empty() {
            return Err(Error::MissingArgument("name"));
        }

        Ok(Self {
            variables_reference,
            name: name.to_string(),
            value: trim(read_str(args, "value", "")).to_string(),
        })
    }
}

/// Assign a new value to a variable in a variables container.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let args = SetVariableArguments::parse(cmd.arguments())?;
        let variable = self.session.set_variable(&args)?;
        body(variable)
    }
}
