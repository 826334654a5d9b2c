use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, fix::fix, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd, verbose),
        Some(Command::Fix(cmd)) => fix(cmd, verbose),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
