use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult};
use crate::dap::document::{read_bool, read_str};
use crate::dap::session::DebuggerSession;
use crate::dap::types::Capabilities;

/// Client capabilities and conventions sent with the `initialize` request.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializeArguments {
    pub client_id: String,
    pub adapter_id: String,
    pub lines_start_at1: bool,
    pub columns_start_at1: bool,
    /// `path` or `uri`.
    pub path_format: String,
    pub supports_variable_type: bool,
}

impl InitializeArguments {
    pub fn parse(args: &Value) -> Self {
        Self {
            client_id: read_str(args, "clientID", "").to_string(),
            adapter_id: read_str(args, "adapterID", "").to_string(),
            lines_start_at1: read_bool(args, "linesStartAt1", true),
            columns_start_at1: read_bool(args, "columnsStartAt1", true),
            path_format: read_str(args, "pathFormat", "path").to_string(),
            supports_variable_type: read_bool(args, "supportsVariableType", false),
        }
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
        self.session
            .initialize(&InitializeArguments::parse(cmd.arguments()))?;
        body(Capabilities::default())
    }
}
