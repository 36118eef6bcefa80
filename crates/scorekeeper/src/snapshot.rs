//! Immutable views of the match state.
//!
//! A [`Snapshot`] is what a host renders and what a store persists. It
//! serializes to
//! `{"teamA":{"points":0,"sets":0},"teamB":{"points":0,"sets":0},"setWinner":null,"matchOver":false}`.

use serde::{Deserialize, Serialize};

use crate::team::TeamId;

/// Point and set counters for one team at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamScore {
    /// Points in the current set.
    pub points: u32,
    /// Sets won.
    pub sets: u32,
}

/// Read-only copy of both teams' counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Team A counters.
    pub team_a: TeamScore,
    /// Team B counters.
    pub team_b: TeamScore,
    /// The team whose delta just ended a set, if the last mutation did.
    pub set_winner: Option<TeamId>,
    /// Whether a configured sets-to-win target has been reached.
    pub match_over: bool,
}

impl Snapshot {
    /// The all-zero snapshot of a fresh or reset match.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Counters for one team.
    #[must_use]
    pub fn team(&self, id: TeamId) -> TeamScore {
        match id {
            TeamId::A => self.team_a,
            TeamId::B => self.team_b,
        }
    }

    /// Whether all four counters are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.team_a == TeamScore::default() && self.team_b == TeamScore::default()
    }

    /// The team with more sets, or `None` on a tie.
    #[must_use]
    pub fn sets_leader(&self) -> Option<TeamId> {
        match self.team_a.sets.cmp(&self.team_b.sets) {
            std::cmp::Ordering::Greater => Some(TeamId::A),
            std::cmp::Ordering::Less => Some(TeamId::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A {:>2} pts {} sets | B {:>2} pts {} sets",
            self.team_a.points, self.team_a.sets, self.team_b.points, self.team_b.sets
        )?;
        if let Some(winner) = self.set_winner {
            write!(f, " | set to {winner}")?;
        }
        if self.match_over {
            write!(f, " | match over")?;
        }
        Ok(())
    }
}
