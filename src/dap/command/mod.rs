//! Client requests routing.
//!
//! A request document is validated (only `"request"` messages with a non-empty command
//! name are accepted) and mapped to one of the [`CommandKind`] variants. The resulting
//! [`Command`] keeps a copy of the document and a reference to the [`Debugger`] that will
//! execute it, so it can't outlive the debugger.
//!
//! Every variant lives in its own module, which contains argument parsing and a handler that
//! turns the arguments into a [`DebuggerSession`] call and a response body.

pub mod completions;
pub mod configuration_done;
pub mod r#continue;
pub mod evaluate;
pub mod initialize;
pub mod launch;
pub mod pause;
pub mod run_to_location;
pub mod scopes;
pub mod set_breakpoints;
pub mod set_exception_breakpoints;
pub mod set_variable;
pub mod stack_trace;
pub mod step;
pub mod threads;
pub mod variables;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use strum_macros::{EnumIter, EnumString};

use crate::config::RouterConfig;
use crate::dap::debugger::Debugger;
use crate::dap::document::{read_int, read_object, read_str};
use crate::dap::error::Error;
use crate::dap::protocol;
use crate::dap::session::DebuggerSession;
use crate::{dap_debug, dap_log, dap_warn};

pub type CommandResult<T> = Result<T, Error>;

/// Empty `arguments` object, used when a request has no (or malformed) arguments.
static EMPTY_ARGUMENTS: Lazy<Value> = Lazy::new(|| Value::Object(Map::new()));

/// All requests supported by the adapter. Names are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum CommandKind {
    #[strum(serialize = "attach", serialize = "launch")]
    LaunchAttach,
    #[strum(serialize = "completions")]
    Completions,
    #[strum(serialize = "configurationDone")]
    ConfigurationDone,
    #[strum(serialize = "continue")]
    Continue,
    #[strum(serialize = "evaluate")]
    Evaluate,
    /// Vendor extension, run until the given source line is reached.
    #[strum(serialize = "fb_continueToLocation")]
    RunToLocation,
    #[strum(serialize = "initialize")]
    Initialize,
    #[strum(serialize = "next", serialize = "stepIn", serialize = "stepOut")]
    Step,
    #[strum(serialize = "pause")]
    Pause,
    #[strum(serialize = "scopes")]
    Scopes,
    #[strum(serialize = "setBreakpoints")]
    SetBreakpoints,
    #[strum(serialize = "setExceptionBreakpoints")]
    SetExceptionBreakpoints,
    #[strum(serialize = "setVariable")]
    SetVariable,
    #[strum(serialize = "stackTrace")]
    StackTrace,
    #[strum(serialize = "threads")]
    Threads,
    #[strum(serialize = "variables")]
    Variables,
}

/// What a command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    /// Whole debuggee.
    Debuggee,
    /// Thread named by `arguments.threadId`.
    Thread,
}

impl CommandKind {
    /// Find a command by its protocol name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    pub fn is_vendor_extension(self) -> bool {
        matches!(self, CommandKind::RunToLocation)
    }

    pub fn target(self) -> CommandTarget {
        match self {
            CommandKind::Continue
            | CommandKind::RunToLocation
            | CommandKind::Step
            | CommandKind::Pause
            | CommandKind::StackTrace => CommandTarget::Thread,
            CommandKind::LaunchAttach
            | CommandKind::Completions
            | CommandKind::ConfigurationDone
            | CommandKind::Evaluate
            | CommandKind::Initialize
            | CommandKind::Scopes
            | CommandKind::SetBreakpoints
            | CommandKind::SetExceptionBreakpoints
            | CommandKind::SetVariable
            | CommandKind::Threads
            | CommandKind::Variables => CommandTarget::Debuggee,
        }
    }

    /// True if the command only makes sense when the debuggee is paused.
    pub fn requires_break(self) -> bool {
        match self {
            CommandKind::Continue
            | CommandKind::RunToLocation
            | CommandKind::Step
            | CommandKind::StackTrace
            | CommandKind::Scopes
            | CommandKind::Variables
            | CommandKind::SetVariable
            | CommandKind::Completions => true,
            CommandKind::LaunchAttach
            | CommandKind::ConfigurationDone
            | CommandKind::Evaluate
            | CommandKind::Initialize
            | CommandKind::Pause
            | CommandKind::SetBreakpoints
            | CommandKind::SetExceptionBreakpoints
            | CommandKind::Threads => false,
        }
    }
}

/// Client request bound to the debugger that executes it.
pub struct Command<'d> {
    kind: CommandKind,
    message: Value,
    debugger: &'d dyn Debugger,
}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<'d> Command<'d> {
    fn new(kind: CommandKind, debugger: &'d dyn Debugger, message: Value) -> Self {
        Self {
            kind,
            message,
            debugger,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Request document this command was created from.
    pub fn message(&self) -> &Value {
        &self.message
    }

    /// Command name as sent by the client, aliases of the same kind are distinguished by it.
    pub fn name(&self) -> &str {
        read_str(&self.message, "command", "")
    }

    /// Request sequence number, `0` if the client didn't send one.
    pub fn seq(&self) -> i64 {
        read_int(&self.message, "seq", 0)
    }

    /// Request `arguments` object, empty if absent.
    pub fn arguments(&self) -> &Value {
        read_object(&self.message, "arguments", &EMPTY_ARGUMENTS)
    }

    pub fn target(&self) -> CommandTarget {
        self.kind.target()
    }

    /// Thread the command applies to, `-1` means no thread.
    ///
    /// Commands targeting the whole debuggee always return `-1`, even if the request
    /// contains a `threadId` argument.
    pub fn target_thread_id(&self) -> i64 {
        if self.target() != CommandTarget::Thread {
            return -1;
        }
        read_int(self.arguments(), "threadId", -1)
    }

    /// Same as [`Command::target_thread_id`] but a negative id turns into `None`.
    pub(crate) fn target_thread(&self) -> Option<i64> {
        Some(self.target_thread_id()).filter(|&id| id >= 0)
    }

    /// Execute command against the debugger session. Return `true` on success.
    pub fn execute(&self) -> bool {
        self.debugger
            .execute_client_command(self, &mut |session, response| {
                self.execute_impl(session, response)
            })
    }

    fn execute_impl(&self, session: &mut dyn DebuggerSession, response: &mut Value) -> bool {
        dap_debug!("{}: {:?}", self.seq(), self.kind);

        let result = match self.kind {
            CommandKind::LaunchAttach => launch::Handler::new(session).handle(self),
            CommandKind::Completions => completions::Handler::new(session).handle(self),
            CommandKind::ConfigurationDone => configuration_done::Handler::new(session).handle(),
            CommandKind::Continue => r#continue::Handler::new(session).handle(self),
            CommandKind::Evaluate => evaluate::Handler::new(session).handle(self),
            CommandKind::RunToLocation => run_to_location::Handler::new(session).handle(self),
            CommandKind::Initialize => initialize::Handler::new(session).handle(self),
            CommandKind::Step => step::Handler::new(session).handle(self),
            CommandKind::Pause => pause::Handler::new(session).handle(self),
            CommandKind::Scopes => scopes::Handler::new(session).handle(self),
            CommandKind::SetBreakpoints => set_breakpoints::Handler::new(session).handle(self),
            CommandKind::SetExceptionBreakpoints => {
                set_exception_breakpoints::Handler::new(session).handle(self)
            }
            CommandKind::SetVariable => set_variable::Handler::new(session).handle(self),
            CommandKind::StackTrace => stack_trace::Handler::new(session).handle(self),
            CommandKind::Threads => threads::Handler::new(session).handle(),
            CommandKind::Variables => variables::Handler::new(session).handle(self),
        };

        match result {
            Ok(body) => {
                if let Some(body) = body {
                    fill(response, "body", body);
                }
                true
            }
            Err(e) => {
                dap_warn!("{} ({}) failed: {e:#}", self.name(), self.seq());
                fill(response, "message", Value::String(e.to_string()));
                false
            }
        }
    }
}

fn fill(response: &mut Value, key: &str, value: Value) {
    match response {
        Value::Object(map) => {
            map.insert(key.to_string(), value);
        }
        other => {
            *other = Value::Object(Map::from_iter([(key.to_string(), value)]));
        }
    }
}

/// Serialize a handler response body.
pub(crate) fn body(value: impl serde::Serialize) -> CommandResult<Option<Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

/// Maps request documents to commands.
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Create a command for a client request.
    ///
    /// Returns an error if the document is not a request or has no command name.
    /// An unknown command is not an error: it's logged and `Ok(None)` is returned.
    pub fn parse<'d>(
        &self,
        debugger: &'d dyn Debugger,
        message: &Value,
    ) -> CommandResult<Option<Command<'d>>> {
        let r#type = read_str(message, "type", "");
        if r#type != protocol::REQUEST {
            return Err(Error::InvalidMessageType(r#type.to_string()));
        }

        let name = read_str(message, "command", "");
        if name.is_empty() {
            return Err(Error::InvalidCommand);
        }

        let kind = CommandKind::from_name(name)
            .filter(|kind| self.config.vendor_extensions || !kind.is_vendor_extension());
        let Some(kind) = kind else {
            dap_log!(
                self.config.unknown_command_level.as_log_level(),
                "no command implemented to process message: {message}"
            );
            return Ok(None);
        };

        Ok(Some(Command::new(kind, debugger, message.clone())))
    }
}

/// Create a command for a client request using the default router configuration.
/// See [`Router::parse`].
pub fn parse_command<'d>(
    debugger: &'d dyn Debugger,
    message: &Value,
) -> CommandResult<Option<Command<'d>>> {
    Router::default().parse(debugger, message)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dap::debugger::Executor;
    use serde_json::json;
    use strum::IntoEnumIterator;

    pub(super) struct NoopDebugger;

    impl Debugger for NoopDebugger {
        fn execute_client_command(&self, _: &Command<'_>, _: &mut Executor<'_>) -> bool {
            false
        }
    }

    #[test]
    fn test_envelope_errors() {
        struct TestCase {
            message: Value,
            matcher: fn(&Error) -> bool,
        }

        let cases = [
            TestCase {
                message: json!({"command": "threads"}),
                matcher: |e| matches!(e, Error::InvalidMessageType(t) if t.is_empty()),
            },
            TestCase {
                message: json!({"type": "event", "command": "threads"}),
                matcher: |e| matches!(e, Error::InvalidMessageType(t) if t == "event"),
            },
            TestCase {
                message: json!({"type": "response", "command": "unknownCommand"}),
                matcher: |e| matches!(e, Error::InvalidMessageType(_)),
            },
            TestCase {
                message: json!({"type": "Request", "command": "threads"}),
                matcher: |e| matches!(e, Error::InvalidMessageType(_)),
            },
            TestCase {
                message: json!({"type": 1, "command": "threads"}),
                matcher: |e| matches!(e, Error::InvalidMessageType(_)),
            },
            TestCase {
                message: json!({"type": "request"}),
                matcher: |e| matches!(e, Error::InvalidCommand),
            },
            TestCase {
                message: json!({"type": "request", "command": ""}),
                matcher: |e| matches!(e, Error::InvalidCommand),
            },
            TestCase {
                message: json!({"type": "request", "command": 5}),
                matcher: |e| matches!(e, Error::InvalidCommand),
            },
            TestCase {
                message: json!(["request", "threads"]),
                matcher: |e| matches!(e, Error::InvalidMessageType(_)),
            },
        ];

        for tc in cases {
            let err = parse_command(&NoopDebugger, &tc.message).unwrap_err();
            assert!(err.is_envelope());
            assert!((tc.matcher)(&err), "unexpected error {err:?} for {}", tc.message);
        }
    }

    #[test]
    fn test_command_table() {
        let table = [
            ("attach", CommandKind::LaunchAttach),
            ("launch", CommandKind::LaunchAttach),
            ("completions", CommandKind::Completions),
            ("configurationDone", CommandKind::ConfigurationDone),
            ("continue", CommandKind::Continue),
            ("evaluate", CommandKind::Evaluate),
            ("fb_continueToLocation", CommandKind::RunToLocation),
            ("initialize", CommandKind::Initialize),
            ("next", CommandKind::Step),
            ("stepIn", CommandKind::Step),
            ("stepOut", CommandKind::Step),
            ("pause", CommandKind::Pause),
            ("scopes", CommandKind::Scopes),
            ("setBreakpoints", CommandKind::SetBreakpoints),
            ("setExceptionBreakpoints", CommandKind::SetExceptionBreakpoints),
            ("setVariable", CommandKind::SetVariable),
            ("stackTrace", CommandKind::StackTrace),
            ("threads", CommandKind::Threads),
            ("variables", CommandKind::Variables),
        ];

        for (name, kind) in table {
            let message = json!({"type": "request", "command": name});
            let cmd = parse_command(&NoopDebugger, &message).unwrap().unwrap();
            assert_eq!(cmd.kind(), kind);
            assert_eq!(cmd.name(), name);
        }

        // every variant is reachable from the table
        for kind in CommandKind::iter() {
            assert!(table.iter().any(|(_, k)| *k == kind), "{kind:?} unreachable");
        }
    }

    #[test]
    fn test_name_match_is_exact() {
        for name in ["Threads", "THREADS", "thread", "threads ", " threads", "step", "stepin"] {
            assert_eq!(CommandKind::from_name(name), None, "{name}");
        }
    }

    #[test]
    fn test_vendor_extensions_switch() {
        let message = json!({"type": "request", "command": "fb_continueToLocation"});
        let router = Router::new(RouterConfig {
            vendor_extensions: false,
            ..Default::default()
        });
        assert!(router.parse(&NoopDebugger, &message).unwrap().is_none());
        assert!(Router::default().parse(&NoopDebugger, &message).unwrap().is_some());
    }

    #[test]
    fn test_target_thread_id() {
        struct TestCase {
            message: Value,
            expected: i64,
        }

        let cases = [
            TestCase {
                message: json!({"type": "request", "command": "continue", "arguments": {"threadId": 3}}),
                expected: 3,
            },
            TestCase {
                message: json!({"type": "request", "command": "stepIn", "arguments": {"threadId": 0}}),
                expected: 0,
            },
            TestCase {
                message: json!({"type": "request", "command": "continue"}),
                expected: -1,
            },
            TestCase {
                message: json!({"type": "request", "command": "pause", "arguments": {"threadId": "3"}}),
                expected: -1,
            },
            TestCase {
                message: json!({"type": "request", "command": "pause", "arguments": [1, 2]}),
                expected: -1,
            },
            TestCase {
                message: json!({"type": "request", "command": "threads", "arguments": {"threadId": 3}}),
                expected: -1,
            },
            TestCase {
                message: json!({"type": "request", "command": "evaluate", "arguments": {"threadId": 9}}),
                expected: -1,
            },
        ];

        for tc in cases {
            let cmd = parse_command(&NoopDebugger, &tc.message).unwrap().unwrap();
            assert_eq!(cmd.target_thread_id(), tc.expected, "{}", tc.message);
        }
    }

    #[test]
    fn test_command_keeps_original_document() {
        let message = json!({
            "seq": 10,
            "type": "request",
            "command": "stepOut",
            "arguments": {"threadId": 1},
            "extra": "ignored",
        });
        let cmd = parse_command(&NoopDebugger, &message).unwrap().unwrap();
        assert_eq!(cmd.message(), &message);
        assert_eq!(cmd.seq(), 10);
        assert_eq!(cmd.arguments(), &json!({"threadId": 1}));
        assert!(!cmd.execute());
    }
}
