//! Dispatch a parsed command line to its command handler.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{init::init, scan::scan},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(args)) => scan(args),
        Some(Command::Init(args)) => init(args),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
