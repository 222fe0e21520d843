use serde::Serialize;
use serde_json::Value;

use crate::dap::command::{body, Command, CommandResult, EMPTY_ARGUMENTS};
use crate::dap::document::{read_array, read_int, read_object, read_str, trim};
use crate::dap::error::Error;
use crate::dap::session::DebuggerSession;
use crate::dap::types::Breakpoint;

#[derive(Debug, Clone, PartialEq)]
pub struct SourceBreakpoint {
    pub line: i64,
    pub column: Option<i64>,
    pub condition: Option<String>,
    pub hit_condition: Option<String>,
}

impl SourceBreakpoint {
    /// Parse a breakpoint description. Entries without a positive line number are skipped.
    fn parse(bp: &Value) -> Option<Self> {
        let line = read_int(bp, "line", -1);
        if line <= 0 {
            return None;
        }
        let column = read_int(bp, "column", -1);
        let non_empty = |key| {
            let value = trim(read_str(bp, key, ""));
            (!value.is_empty()).then(|| value.to_string())
        };

        Some(Self {
            line,
            column: (column > 0).then_some(column),
            condition: non_empty("condition"),
            hit_condition: non_empty("hitCondition"),
        })
    }
}

/// Full set of breakpoints for a single source file, previous breakpoints
/// in the file should be replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct SetBreakpointsArguments {
    pub path: String,
    pub breakpoints: Vec<SourceBreakpoint>,
}

impl SetBreakpointsArguments {
    pub fn parse(args: &Value) -> CommandResult<Self> {
        let source = read_object(args, "source", &EMPTY_ARGUMENTS);
        let path = read_str(source, "path", "");
        if path.is_empty() {
            return Err(Error::MissingArgument("source.path"));
        }

        Ok(Self {
            path: path.to_string(),
            breakpoints: read_array(args, "breakpoints", &[])
                .iter()
                .filter_map(SourceBreakpoint::parse)
                .collect(),
        })
    }
}

#[derive(Serialize)]
struct SetBreakpointsBody {
    breakpoints: Vec<Breakpoint>,
}

pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let args = SetBreakpointsArguments::parse(cmd.arguments())?;
        let breakpoints = self.session.set_breakpoints(&args)?;
        body(SetBreakpointsBody { breakpoints })
    }
}
