//! Textual host actions.
//!
//! Hosts that collect input as text (a terminal, a script, a remote control)
//! turn each line into an [`Action`] and feed it to a keeper. Accepted forms:
//!
//! | Input                 | Action                        |
//! |-----------------------|-------------------------------|
//! | `a`, `a+`, `a +1`     | +1 point to team A            |
//! | `b-`, `b -1`          | -1 point to team B            |
//! | `a +3`, `b -2`, `a 4` | arbitrary delta               |
//! | `reset`               | clear all counters            |
//! | `show`                | print the current snapshot    |
//! | `summary`             | print the match summary       |
//! | `quit`, `exit`        | stop reading input            |

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::keeper::ScoreKeeper;
use crate::snapshot::Snapshot;
use crate::team::TeamId;

/// One host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply a point delta.
    Delta {
        /// Target team.
        team: TeamId,
        /// Signed adjustment.
        delta: i64,
    },
    /// Clear all counters.
    Reset,
    /// Report the current snapshot.
    Show,
    /// Report the match summary.
    Summary,
    /// Stop processing input.
    Quit,
}

impl Action {
    /// Apply this action to `keeper` and return the resulting snapshot.
    ///
    /// Non-mutating actions return the current snapshot unchanged.
    pub fn apply(self, keeper: &mut ScoreKeeper) -> Snapshot {
        match self {
            Self::Delta { team, delta } => keeper.apply_delta(team, delta),
            Self::Reset => keeper.reset(),
            Self::Show | Self::Summary | Self::Quit => keeper.snapshot(),
        }
    }

    /// Whether applying this action can change the counters.
    #[must_use]
    pub fn is_mutation(self) -> bool {
        matches!(self, Self::Delta { .. } | Self::Reset)
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let line = input.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Err(Error::invalid_action(input, "empty input")),
            "reset" => return Ok(Self::Reset),
            "show" => return Ok(Self::Show),
            "summary" => return Ok(Self::Summary),
            "quit" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let (team_part, delta_part) = split_team(line);
        let team = team_part.parse::<TeamId>()?;
        let delta = parse_delta(input, delta_part.trim())?;

        Ok(Self::Delta { team, delta })
    }
}

/// Split off the team token: an optional `team` prefix with one optional
/// separator, then a single letter.
fn split_team(line: &str) -> (&str, &str) {
    let prefix = match line.get(..4) {
        Some(head) if head.eq_ignore_ascii_case("team") => {
            let sep = line[4..]
                .chars()
                .next()
                .filter(|c| matches!(c, '-' | '_' | ' '))
                .map_or(0, char::len_utf8);
            4 + sep
        }
        _ => 0,
    };
    let end = line[prefix..]
        .char_indices()
        .nth(1)
        .map_or(line.len(), |(i, _)| prefix + i);
    line.split_at(end)
}

fn parse_delta(input: &str, text: &str) -> Result<i64> {
    match text {
        "" | "+" => Ok(1),
        "-" => Ok(-1),
        _ => {
            let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            compact
                .parse::<i64>()
                .map_err(|_| Error::invalid_action(input, format!("'{text}' is not a point delta")))
        }
    }
}

/// Parse and apply a sequence of actions, stopping at the first `quit`.
///
/// # Errors
///
/// Returns the first parse error. Actions before it have already been applied.
pub fn apply_all<'a, I>(keeper: &mut ScoreKeeper, inputs: I) -> Result<Snapshot>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut last = keeper.snapshot();
    for input in inputs {
        let action = input.parse::<Action>()?;
        if action == Action::Quit {
            break;
        }
        last = action.apply(keeper);
    }
    Ok(last)
}
