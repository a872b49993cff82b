//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all docmodel
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `resolve`: Run the resolution stage over a serialized reflection tree
//! - `passes`: List registered resolution passes in execution order

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Take the command if one was provided, otherwise print help.
    pub fn into_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Path to the reflection tree JSON produced by the front end
    pub input: PathBuf,

    /// Write the resolved tree to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Exit with status 1 when any directive could not be applied
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output (per-pass summary on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve cross-references (inheritdoc directives) in a reflection tree
    Resolve(ResolveCommand),
    /// List registered resolution passes in execution order
    Passes,
}
