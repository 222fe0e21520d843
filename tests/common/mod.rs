#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::thread;
use std::time::Duration;

use yadap::dap::command::launch::LaunchArguments;
use yadap::dap::command::set_breakpoints::SetBreakpointsArguments;
use yadap::dap::command::set_variable::SetVariableArguments;
use yadap::dap::command::stack_trace::StackTraceArguments;
use yadap::dap::command::step::StepKind;
use yadap::dap::session::SessionResult;
use yadap::dap::types::{Breakpoint, StackFrame, Thread, Variable};
use yadap::dap::{DebuggerSession, Error};

/// Log record captured by [`CaptureLogger`].
#[derive(Debug, Clone)]
pub struct Record {
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

pub struct CaptureLogger {
    records: Mutex<Vec<Record>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

impl CaptureLogger {
    /// Install the logger (once per test binary) and drop everything captured so far.
    pub fn install() -> &'static CaptureLogger {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger installed");
            log::set_max_level(log::LevelFilter::Trace);
        });
        LOGGER.records.lock().unwrap().clear();
        &LOGGER
    }

    /// Records with `dap` target at `level` or more severe.
    pub fn records(&self, level: log::Level) -> Vec<Record> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.target == "dap" && r.level <= level)
            .cloned()
            .collect()
    }
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records.lock().unwrap().push(Record {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

/// Session that records every call into a shared trace.
///
/// Each call leaves an `enter` and an `exit` entry, with a short sleep in between,
/// so overlapping calls from different threads become visible in the trace.
#[derive(Clone, Default)]
pub struct RecordingSession {
    pub paused: bool,
    pub trace: Arc<Mutex<Vec<String>>>,
    pub panic_on_pause: bool,
    /// Depth of the stack of thread 1, at least one frame.
    pub stack_depth: usize,
}

impl RecordingSession {
    pub fn paused() -> Self {
        Self {
            paused: true,
            ..Default::default()
        }
    }

    pub fn trace(&self) -> Vec<String> {
        self.trace.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.trace.lock().unwrap().push(format!("enter {call}"));
        thread::sleep(Duration::from_millis(2));
        self.trace.lock().unwrap().push(format!("exit {call}"));
    }
}

impl DebuggerSession for RecordingSession {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn launch(&mut self, args: &LaunchArguments) -> SessionResult<()> {
        self.record(format!("launch attach={} program={}", args.attach, args.program));
        Ok(())
    }

    fn resume(&mut self, thread: Option<i64>) -> SessionResult<()> {
        self.record(format!("resume {thread:?}"));
        self.paused = false;
        Ok(())
    }

    fn step(&mut self, thread: Option<i64>, kind: StepKind) -> SessionResult<()> {
        self.record(format!("step {kind} {thread:?}"));
        Ok(())
    }

    fn pause(&mut self, thread: Option<i64>) -> SessionResult<()> {
        if self.panic_on_pause {
            panic!("pause failed");
        }
        self.record(format!("pause {thread:?}"));
        self.paused = true;
        Ok(())
    }

    fn threads(&mut self) -> SessionResult<Vec<Thread>> {
        self.record("threads".to_string());
        Ok(vec![
            Thread {
                id: 1,
                name: "request 1".to_string(),
            },
            Thread {
                id: 2,
                name: "request 2".to_string(),
            },
        ])
    }

    fn stack_trace(
        &mut self,
        args: &StackTraceArguments,
    ) -> SessionResult<(Vec<StackFrame>, usize)> {
        self.record(format!("stackTrace {}", args.thread_id));
        if args.thread_id != 1 {
            return Err(Error::Session(anyhow::anyhow!(
                "thread {} not found",
                args.thread_id
            )));
        }
        let depth = self.stack_depth.max(1);
        let levels = match args.levels {
            0 => depth,
            levels => levels as usize,
        };
        let frames = (0..depth)
            .skip(args.start_frame as usize)
            .take(levels)
            .map(|id| StackFrame {
                id: id as i64,
                name: if id == 0 {
                    "main".to_string()
                } else {
                    format!("caller {id}")
                },
                line: 7,
                column: 1,
                ..Default::default()
            })
            .collect();
        Ok((frames, depth))
    }

    fn set_variable(&mut self, args: &SetVariableArguments) -> SessionResult<Variable> {
        self.record(format!(
            "setVariable {} {}={}",
            args.variables_reference, args.name, args.value
        ));
        Ok(Variable {
            name: args.name.clone(),
            value: args.value.clone(),
            type_name: Some("int".to_string()),
            variables_reference: 0,
        })
    }

    fn set_breakpoints(&mut self, args: &SetBreakpointsArguments) -> SessionResult<Vec<Breakpoint>> {
        self.record(format!("setBreakpoints {}", args.path));
        Ok(args
            .breakpoints
            .iter()
            .map(|bp| Breakpoint {
                verified: true,
                line: bp.line,
                ..Default::default()
            })
            .collect())
    }
}
