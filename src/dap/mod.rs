//! Request dispatch core of the debug adapter.
//!
//! Request documents are parsed into commands by [`command::Router`], commands are executed
//! through a [`debugger::Debugger`] which serializes access to a [`session::DebuggerSession`].

pub mod command;
pub mod debugger;
pub mod document;
pub mod error;
pub mod protocol;
pub mod session;
pub mod types;

pub use command::{parse_command, Command, CommandKind, CommandTarget, Router};
pub use debugger::{Debugger, SessionDebugger};
pub use error::Error;
pub use session::DebuggerSession;

use serde_json::Value;

/// What happened to a request passed to [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Command was executed, contains the execution result.
    Executed(bool),
    /// Command is unknown to the adapter.
    Ignored,
    /// Document is not a valid request, an error response was delivered by the debugger.
    Rejected,
}

/// Route a request document and execute the resulting command.
pub fn dispatch(router: &Router, debugger: &dyn Debugger, message: &Value) -> Dispatch {
    match router.parse(debugger, message) {
        Ok(Some(command)) => Dispatch::Executed(command.execute()),
        Ok(None) => Dispatch::Ignored,
        Err(e) => {
            debugger.reject(message, &e);
            Dispatch::Rejected
        }
    }
}
