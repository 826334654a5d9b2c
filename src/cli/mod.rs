//! Command line interface.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: `check`, `fix` and `init` handlers
//! - `exit_status`: Process exit codes
//! - `report`: cargo-style issue output

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args, verbose)?;
    Ok(status.into())
}
