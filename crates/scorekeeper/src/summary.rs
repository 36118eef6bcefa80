//! End-of-match summaries handed to a host store.
//!
//! The core never persists anything itself. A "save" action in the host asks
//! the keeper for a [`MatchSummary`] and stores it however it likes.

use std::fmt::{self, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::team::TeamId;

/// Date format used when no other is configured (`12/12/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A team's name and set count at the time of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTally {
    /// Display name.
    pub name: String,
    /// Sets won.
    pub sets: u32,
}

/// Sets won by each team on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// The day the match was played.
    pub date: NaiveDate,
    /// Team A tally.
    pub team_a: TeamTally,
    /// Team B tally.
    pub team_b: TeamTally,
}

impl MatchSummary {
    /// The team with more sets, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<TeamId> {
        match self.team_a.sets.cmp(&self.team_b.sets) {
            std::cmp::Ordering::Greater => Some(TeamId::A),
            std::cmp::Ordering::Less => Some(TeamId::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Render as three lines, formatting the date with `date_format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateFormat`] if `date_format` is malformed or asks for
    /// fields a calendar date does not have (`%H`, `%M`, `%z`, ...).
    pub fn render(&self, date_format: &str) -> Result<String> {
        let mut out = String::new();
        self.write_lines(&mut out, date_format)
            .map_err(|_| Error::date_format(date_format))?;
        Ok(out)
    }

    fn write_lines(&self, out: &mut impl Write, date_format: &str) -> fmt::Result {
        write!(
            out,
            "{}: {}\n{}: {}\non {}",
            self.team_a.name,
            self.team_a.sets,
            self.team_b.name,
            self.team_b.sets,
            self.date.format(date_format)
        )
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_lines(f, DEFAULT_DATE_FORMAT)
    }
}

/// Check that `date_format` can render a match date.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] if the format is empty or cannot render a
/// calendar date.
pub fn check_date_format(date_format: &str) -> Result<()> {
    let sample = NaiveDate::from_ymd_opt(2024, 12, 12).unwrap_or(NaiveDate::MIN);
    let mut out = String::new();
    if date_format.is_empty() || write!(out, "{}", sample.format(date_format)).is_err() {
        return Err(Error::date_format(date_format));
    }
    Ok(())
}
