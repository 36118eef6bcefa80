//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Interactive scoring session arguments.
#[derive(Debug, Args)]
pub struct PlayCommand {
    /// Output format for snapshots
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Non-interactive replay arguments.
#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// Actions to apply in order (e.g. "a", "b -1", "a +3", "reset")
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,

    /// Also print the match summary
    #[arg(short, long)]
    pub summary: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Rules command arguments.
#[derive(Debug, Args)]
pub struct RulesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per snapshot
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_replay_command_debug() {
        let cmd = ReplayCommand {
            actions: vec!["a +1".to_string()],
            summary: true,
            format: OutputFormat::Json,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("actions"));
        assert!(debug_str.contains("a +1"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
