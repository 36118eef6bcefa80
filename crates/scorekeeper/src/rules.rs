//! Set and match rules applied by the scorekeeper.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Points a team may hold before the next point wins the set.
pub const DEFAULT_SET_POINT_THRESHOLD: u32 = 24;

/// Scoring rules for a match.
///
/// A set ends as soon as one team's points would exceed
/// `set_point_threshold`. There is no two-point margin and no best-of-N
/// cutoff: `sets_to_win` only drives the informational `match_over` flag and
/// never stops play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Highest point count that does not yet end the set.
    pub set_point_threshold: u32,
    /// Sets needed before a match is reported as over.
    pub sets_to_win: Option<u32>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            set_point_threshold: DEFAULT_SET_POINT_THRESHOLD,
            sets_to_win: None,
        }
    }
}

impl ScoringRules {
    /// Check that the rules describe a playable match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] for a zero threshold or a zero
    /// `sets_to_win`.
    pub fn validate(&self) -> Result<()> {
        if self.set_point_threshold == 0 {
            return Err(Error::config_validation(
                "set_point_threshold must be greater than 0",
            ));
        }
        if self.sets_to_win == Some(0) {
            return Err(Error::config_validation(
                "sets_to_win must be greater than 0 when set",
            ));
        }
        Ok(())
    }

    /// Whether `points` ends the current set.
    #[must_use]
    pub fn wins_set(&self, points: u32) -> bool {
        points > self.set_point_threshold
    }

    /// Whether a side with `sets` has won the match.
    #[must_use]
    pub fn wins_match(&self, sets: u32) -> bool {
        self.sets_to_win.is_some_and(|needed| sets >= needed)
    }
}
