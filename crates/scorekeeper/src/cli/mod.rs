//! Command-line interface for scorekeeper.
//!
//! This module provides the CLI structure for the `scorekeep` binary and the
//! line-oriented scoring session it runs.

mod commands;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, OutputFormat, PlayCommand, ReplayCommand, RulesCommand};
pub use session::{run_session, write_snapshot, write_summary, SessionOutcome};

/// scorekeep - Keep score of a volleyball match
///
/// Tracks points and sets for two teams. The 25th point of a set wins it and
/// sends both teams back to zero.
#[derive(Debug, Parser)]
#[command(name = "scorekeep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for every point, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a match interactively, one action per line on stdin
    Play(PlayCommand),

    /// Apply a list of actions and print the final score
    Replay(ReplayCommand),

    /// Show the scoring rules in effect
    Rules(RulesCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// The file `config validate` should check, if that is the command.
    ///
    /// `--file` wins over the global `--config`, which wins over the default
    /// path.
    #[must_use]
    pub fn validate_target(&self) -> Option<PathBuf> {
        match &self.command {
            Command::Config(ConfigCommand::Validate { file }) => Some(
                file.clone()
                    .or_else(|| self.config.clone())
                    .unwrap_or_else(crate::config::Config::default_config_path),
            ),
            _ => None,
        }
    }
}
