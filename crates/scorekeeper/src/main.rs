//! `scorekeep` - CLI for scorekeeper
//!
//! This binary drives a single match from the command line: interactively
//! from stdin, or by replaying a list of actions.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use scorekeeper::action::apply_all;
use scorekeeper::cli::{
    run_session, write_snapshot, write_summary, Cli, Command, ConfigCommand, OutputFormat,
    PlayCommand, ReplayCommand,
};
use scorekeeper::{init_logging, Config, TeamId};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Validation checks its own file, independent of the active configuration
    if let Some(path) = cli.validate_target() {
        return handle_validate(&path);
    }

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Play(cmd) => handle_play(&config, &cmd),
        Command::Replay(cmd) => handle_replay(&config, &cmd),
        Command::Rules(cmd) => handle_rules(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_play(config: &Config, cmd: &PlayCommand) -> anyhow::Result<()> {
    let mut keeper = config.build_keeper();
    info!(
        team_a = keeper.team(TeamId::A).name(),
        team_b = keeper.team(TeamId::B).name(),
        "Starting scoring session"
    );

    if cmd.format == OutputFormat::Plain {
        eprintln!("Actions: a | a- | b +2 | reset | show | summary | quit");
    }

    let stdin = io::stdin();
    let outcome = run_session(
        &mut keeper,
        &config.display.date_format,
        cmd.format,
        stdin.lock(),
        io::stdout().lock(),
    )?;

    info!(
        accepted = outcome.accepted,
        rejected = outcome.rejected,
        "Session ended"
    );
    Ok(())
}

fn handle_replay(config: &Config, cmd: &ReplayCommand) -> anyhow::Result<()> {
    let mut keeper = config.build_keeper();
    let snapshot = apply_all(&mut keeper, cmd.actions.iter().map(String::as_str))
        .context("replaying actions")?;

    let mut out = io::stdout().lock();
    write_snapshot(&mut out, &snapshot, cmd.format)?;
    if cmd.summary {
        write_summary(
            &mut out,
            &keeper.summary_today(),
            &config.display.date_format,
            cmd.format,
        )?;
    }
    out.flush()?;
    Ok(())
}

fn handle_rules(config: &Config, json: bool) -> anyhow::Result<()> {
    let rules = &config.rules;
    if json {
        println!("{}", serde_json::to_string_pretty(rules)?);
    } else {
        println!("Scoring Rules");
        println!("=============");
        println!(
            "  Set won at:         {} points",
            rules.set_point_threshold.saturating_add(1)
        );
        println!("  Win margin:         none (first past the threshold)");
        match rules.sets_to_win {
            Some(sets) => println!("  Match over at:      {sets} sets (informational)"),
            None => println!("  Match over at:      never (play continues)"),
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Rules]");
                println!(
                    "  Set point threshold: {}",
                    config.rules.set_point_threshold
                );
                println!(
                    "  Sets to win:         {}",
                    config
                        .rules
                        .sets_to_win
                        .map_or_else(|| "unset".to_string(), |n| n.to_string())
                );
                println!();
                println!("[Teams]");
                for id in TeamId::ALL {
                    let team = config.teams.get(id);
                    println!("  {id}: {:<18} color {}", team.name, team.color);
                }
                println!();
                println!("[Display]");
                println!("  Date format:         {}", config.display.date_format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            return handle_validate(&path);
        }
    }
    Ok(())
}

fn handle_validate(path: &Path) -> anyhow::Result<()> {
    println!("Validating configuration: {}", path.display());
    Config::check_file(path)
        .with_context(|| format!("configuration error in {}", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}
