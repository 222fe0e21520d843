use serde_json::Value;

use crate::dap::command::{Command, CommandResult};
use crate::dap::document::read_array;
use crate::dap::session::DebuggerSession;

/// Exception filters of a request. Non-string filters are ignored.
pub fn parse_filters(args: &Value) -> Vec<String> {
    read_array(args, "filters", &[])
        .iter()
        .filter_map(Value::as_str)
        .map(ToOwned::to_owned)
        .collect()
}

/// Replace the set of active exception filters.
pub struct Handler<'a> {
    session: &'a mut dyn DebuggerSession,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a mut dyn DebuggerSession) -> Self {
        Self { session }
    }

    pub fn handle(&mut self, cmd: &Command) -> CommandResult<Option<Value>> {
        let filters = parse_filters(cmd.arguments());
        self.session.set_exception_breakpoints(&filters)?;
        Ok(None)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_filters() {
        struct TestCase {
            args: Value,
            expected: &'static [&'static str],
        }

        let cases = [
            TestCase {
                args: json!({"filters": ["uncaught", "all"]}),
                expected: &["uncaught", "all"],
            },
            TestCase {
                args: json!({"filters": ["all", 1, null, {"filterId": "uncaught"}, ["x"]]}),
                expected: &["all"],
            },
            TestCase {
                args: json!({"filters": "all"}),
                expected: &[],
            },
            TestCase {
                args: json!({}),
                expected: &[],
            },
        ];

        for tc in cases {
            assert_eq!(parse_filters(&tc.args), tc.expected);
        }
    }
}
