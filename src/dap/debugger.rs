//! Execution gate between commands and a debugger session.

use std::sync::mpsc;
use std::sync::{Mutex, PoisonError};

use serde_json::{json, Map, Value};

use crate::dap::command::Command;
use crate::dap::error::Error;
use crate::dap::protocol::DapResponse;
use crate::dap::session::DebuggerSession;
use crate::{dap_debug, dap_error, dap_warn, weak_error};

/// Command continuation: runs the command against the session and fills the response slot.
/// Returns `true` if the command succeeded.
pub type Executor<'a> = dyn FnMut(&mut dyn DebuggerSession, &mut Value) -> bool + 'a;

/// Owner of a debugger session.
///
/// Implementations guarantee that at most one executor runs against a session at a time.
/// The exclusive access is acquired before the executor is called and released when it
/// returns or unwinds.
pub trait Debugger: Send + Sync {
    /// Run `executor` with exclusive access to the session and deliver the response
    /// for `command`. Returns the executor result.
    fn execute_client_command(&self, command: &Command<'_>, executor: &mut Executor<'_>) -> bool;

    /// Report a request that was refused before any command was constructed.
    fn reject(&self, request: &Value, error: &Error) {
        dap_warn!("request rejected: {error}, message: {request}");
    }
}

struct State<S> {
    session: S,
    next_seq: i64,
}

impl<S> State<S> {
    fn next_seq(&mut self) -> i64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

/// [`Debugger`] that serializes commands with a mutex around its session.
/// Response documents are sent to the receiver returned by [`SessionDebugger::new`]
/// in the order the commands were executed.
pub struct SessionDebugger<S: DebuggerSession> {
    state: Mutex<State<S>>,
    responses: mpsc::Sender<Value>,
}

impl<S: DebuggerSession> SessionDebugger<S> {
    pub fn new(session: S) -> (Self, mpsc::Receiver<Value>) {
        let (responses, receiver) = mpsc::channel();
        let debugger = Self {
            state: Mutex::new(State {
                session,
                next_seq: 1,
            }),
            responses,
        };
        (debugger, receiver)
    }

    fn send(&self, response: DapResponse) {
        let Some(document) = weak_error!(response.into_document(), "serialize response:") else {
            return;
        };
        if self.responses.send(document).is_err() {
            dap_error!("response receiver is closed");
        }
    }
}

fn take_field(slot: &mut Value, key: &str) -> Option<Value> {
    match slot {
        Value::Object(map) => map.remove(key),
        _ => None,
    }
}

impl<S: DebuggerSession> Debugger for SessionDebugger<S> {
    fn execute_client_command(&self, command: &Command<'_>, executor: &mut Executor<'_>) -> bool {
        // poisoned only if a previous executor panicked, the session itself is still usable
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let mut slot = Value::Object(Map::new());
        let success = if command.kind().requires_break() && !state.session.is_paused() {
            let err = Error::NotPaused(command.name().to_string());
            dap_debug!("{err}");
            slot = json!({"message": err.to_string()});
            false
        } else {
            executor(&mut state.session, &mut slot)
        };

        let message = take_field(&mut slot, "message").and_then(|m| m.as_str().map(String::from));
        let mut response = DapResponse::for_request(state.next_seq(), command.message(), success)
            .with_body(take_field(&mut slot, "body"));
        response.message = message;
        self.send(response);

        success
    }

    fn reject(&self, request: &Value, error: &Error) {
        dap_warn!("request rejected: {error}, message: {request}");
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let response = DapResponse::for_request(state.next_seq(), request, false).with_message(error);
        self.send(response);
    }
}
