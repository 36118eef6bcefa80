//! Line-oriented scoring session.
//!
//! Reads one [`Action`] per line and prints the snapshot after each one.
//! Bad lines are reported and skipped; the session keeps going.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::OutputFormat;
use crate::action::Action;
use crate::error::Result;
use crate::keeper::ScoreKeeper;
use crate::snapshot::Snapshot;
use crate::summary::MatchSummary;

/// Counts from a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Lines that parsed into an action (including `show`/`summary`).
    pub accepted: usize,
    /// Lines that were rejected.
    pub rejected: usize,
    /// Whether the session ended with `quit` rather than end of input.
    pub quit: bool,
}

/// Drive `keeper` from `reader` until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_session<R, W>(
    keeper: &mut ScoreKeeper,
    date_format: &str,
    format: OutputFormat,
    reader: R,
    mut writer: W,
) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut outcome = SessionOutcome::default();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "Skipping input line");
                outcome.rejected += 1;
                writeln!(writer, "error: {err}")?;
                continue;
            }
        };
        outcome.accepted += 1;
        debug!(?action, "Session action");

        match action {
            Action::Quit => {
                outcome.quit = true;
                break;
            }
            Action::Summary => {
                write_summary(&mut writer, &keeper.summary_today(), date_format, format)?;
            }
            _ => {
                let snapshot = action.apply(keeper);
                write_snapshot(&mut writer, &snapshot, format)?;
            }
        }
    }

    writer.flush()?;
    Ok(outcome)
}

/// Print one snapshot in the requested format.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails.
pub fn write_snapshot<W: Write>(
    writer: &mut W,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(writer, "{snapshot}")?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(snapshot)?)?,
    }
    Ok(())
}

/// Print a match summary in the requested format.
///
/// # Errors
///
/// Returns an error if writing or JSON encoding fails, or if `date_format`
/// cannot render the match date.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &MatchSummary,
    date_format: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(writer, "{}", summary.render(date_format)?)?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(summary)?)?,
    }
    Ok(())
}
