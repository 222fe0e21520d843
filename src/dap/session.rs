//! Live debuggee state as seen by command handlers.
//!
//! Every command handler parses its arguments and then calls exactly one method of
//! [`DebuggerSession`]. All methods except [`DebuggerSession::is_paused`] have a default
//! implementation that rejects the request, so an implementation only provides what
//! its debugger can actually do.

use crate::dap::command::completions::CompletionsArguments;
use crate::dap::command::evaluate::EvaluateArguments;
use crate::dap::command::initialize::InitializeArguments;
use crate::dap::command::launch::LaunchArguments;
use crate::dap::command::run_to_location::RunToLocationArguments;
use crate::dap::command::set_breakpoints::SetBreakpointsArguments;
use crate::dap::command::set_variable::SetVariableArguments;
use crate::dap::command::stack_trace::StackTraceArguments;
use crate::dap::command::step::StepKind;
use crate::dap::command::variables::VariablesArguments;
use crate::dap::error::Error;
use crate::dap::types::{
    Breakpoint, CompletionItem, EvaluateResult, Scope, StackFrame, Thread, Variable,
};

pub type SessionResult<T> = Result<T, Error>;

/// A running or paused debuggee.
///
/// Thread arguments are `None` when the client didn't name a thread, an implementation
/// should use the thread in focus in that case.
pub trait DebuggerSession: Send {
    /// True if the debuggee is stopped and its state may be inspected.
    fn is_paused(&self) -> bool;

    fn initialize(&mut self, _args: &InitializeArguments) -> SessionResult<()> {
        Ok(())
    }

    fn launch(&mut self, _args: &LaunchArguments) -> SessionResult<()> {
        Err(Error::Unsupported("launch"))
    }

    fn configuration_done(&mut self) -> SessionResult<()> {
        Ok(())
    }

    fn resume(&mut self, _thread: Option<i64>) -> SessionResult<()> {
        Err(Error::Unsupported("continue"))
    }

    fn step(&mut self, _thread: Option<i64>, _kind: StepKind) -> SessionResult<()> {
        Err(Error::Unsupported("step"))
    }

    fn run_to_location(&mut self, _args: &RunToLocationArguments) -> SessionResult<()> {
        Err(Error::Unsupported("fb_continueToLocation"))
    }

    fn pause(&mut self, _thread: Option<i64>) -> SessionResult<()> {
        Err(Error::Unsupported("pause"))
    }

    fn threads(&mut self) -> SessionResult<Vec<Thread>> {
        Err(Error::Unsupported("threads"))
    }

    /// Frames of the requested page and the total depth of the thread stack.
    fn stack_trace(
        &mut self,
        _args: &StackTraceArguments,
    ) -> SessionResult<(Vec<StackFrame>, usize)> {
        Err(Error::Unsupported("stackTrace"))
    }

    fn scopes(&mut self, _frame_id: i64) -> SessionResult<Vec<Scope>> {
        Err(Error::Unsupported("scopes"))
    }

    fn variables(&mut self, _args: &VariablesArguments) -> SessionResult<Vec<Variable>> {
        Err(Error::Unsupported("variables"))
    }

    fn set_variable(&mut self, _args: &SetVariableArguments) -> SessionResult<Variable> {
        Err(Error::Unsupported("setVariable"))
    }

    fn evaluate(&mut self, _args: &EvaluateArguments) -> SessionResult<EvaluateResult> {
        Err(Error::Unsupported("evaluate"))
    }

    fn completions(&mut self, _args: &CompletionsArguments) -> SessionResult<Vec<CompletionItem>> {
        Err(Error::Unsupported("completions"))
    }

    fn set_breakpoints(&mut self, _args: &SetBreakpointsArguments) -> SessionResult<Vec<Breakpoint>> {
        Err(Error::Unsupported("setBreakpoints"))
    }

    fn set_exception_breakpoints(&mut self, _filters: &[String]) -> SessionResult<()> {
        Err(Error::Unsupported("setExceptionBreakpoints"))
    }
}
