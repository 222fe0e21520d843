//! yadap-route - show how the adapter routes debug protocol requests.
//!
//! Reads a stream of JSON request documents from a file (or stdin) and prints, for each of
//! them, the command it is routed to. Commands are never executed.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use yadap::config::{DiagnosticLevel, RouterConfig};
use yadap::dap::debugger::Executor;
use yadap::dap::document::read_int;
use yadap::dap::{Command, CommandTarget, Debugger, Router};
use yadap::{dap_info, dap_warn};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Router configuration file (default: ~/.config/yadap/router.toml)
    #[clap(long, env = "YADAP_CONFIG")]
    config: Option<PathBuf>,

    /// Treat vendor protocol extensions as unknown commands.
    #[clap(long)]
    no_vendor_extensions: bool,

    /// Level of the diagnostic about unknown commands (error, warn, info, debug).
    #[clap(long)]
    unknown_level: Option<DiagnosticLevel>,

    /// Don't log router diagnostics.
    #[clap(short, long)]
    quiet: bool,

    /// File with request documents, stdin if omitted.
    input: Option<PathBuf>,
}

/// Debugger without a session, routed commands are only printed.
struct DryRun;

impl Debugger for DryRun {
    fn execute_client_command(&self, command: &Command<'_>, _: &mut Executor<'_>) -> bool {
        dap_warn!("dry run, {} is not executed", command.name());
        false
    }
}

fn describe(command: &Command) -> String {
    let target = match command.target() {
        CommandTarget::Thread => match command.target_thread_id() {
            id if id >= 0 => format!("thread {id}"),
            _ => "current thread".to_string(),
        },
        CommandTarget::Debuggee => "debuggee".to_string(),
    };
    format!(
        "{kind:?} ({target}{brk})",
        kind = command.kind(),
        brk = if command.kind().requires_break() {
            ", requires break"
        } else {
            ""
        }
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.quiet {
        yadap::log::disable();
    }

    let mut config = RouterConfig::load(args.config.as_deref());
    if args.no_vendor_extensions {
        config.vendor_extensions = false;
    }
    if let Some(level) = args.unknown_level {
        config.unknown_command_level = level;
    }
    dap_info!("router configuration: {config:?}");
    let router = Router::new(config);

    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("open input {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    };

    let documents = serde_json::Deserializer::from_reader(BufReader::new(input)).into_iter::<Value>();
    for (idx, document) in documents.enumerate() {
        let document = document.with_context(|| format!("document #{idx}"))?;
        let seq = read_int(&document, "seq", 0);

        match router.parse(&DryRun, &document) {
            Ok(Some(command)) => println!("{seq}: {} -> {}", command.name(), describe(&command)),
            Ok(None) => println!("{seq}: unknown command, ignored"),
            Err(e) => println!("{seq}: rejected, {e}"),
        }
    }

    Ok(())
}
