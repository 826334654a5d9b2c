//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report string literals that duplicate exported locators
//! - `fix`: Replace duplicates with the exported constants
//! - `init`: Initialize loclint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Fix(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct FixArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write the fixes (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub args: FixArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report string literals that duplicate selectors exported by the locators module
    Check(CheckCommand),
    /// Replace duplicated selectors with the exported constants and add the imports
    Fix(FixCommand),
    /// Initialize a new .loclintrc.json configuration file
    Init,
}
