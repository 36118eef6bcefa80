//! Team identity and per-team counters.
//!
//! A match always has exactly two sides. [`TeamId`] is a closed enum so typed
//! callers can never name a third team; the string boundary used by hosts goes
//! through [`TeamId::from_str`], which rejects anything else with
//! [`Error::InvalidTeam`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default color tag for both teams.
pub const DEFAULT_COLOR: &str = "#00FF93";

/// Identifies one side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamId {
    /// The first team.
    A,
    /// The second team.
    B,
}

impl TeamId {
    /// Both teams, in display order.
    pub const ALL: [TeamId; 2] = [TeamId::A, TeamId::B];

    /// The other side of the match.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

impl FromStr for TeamId {
    type Err = Error;

    /// Accepts `a`, `b`, `team-a`, `team_b`, `teama` and friends, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let short = normalized
            .strip_prefix("team")
            .map(|rest| rest.trim_start_matches(&['-', '_', ' '][..]))
            .unwrap_or(normalized.as_str());

        match short {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            _ => Err(Error::invalid_team(s.trim())),
        }
    }
}

/// Opaque display color for a team.
///
/// The scoring core never interprets this value; it is carried so a host can
/// render each side in its chosen color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTag(String);

impl ColorTag {
    /// Wrap any host-defined color value.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One side of the match: counters plus cosmetic attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    color: ColorTag,
    points: u32,
    sets: u32,
}

impl Team {
    /// Create a team with zeroed counters, the default name and color.
    #[must_use]
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            name: default_name(id),
            color: ColorTag::default(),
            points: 0,
            sets: 0,
        }
    }

    /// The team's identifier.
    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color.
    #[must_use]
    pub fn color(&self) -> &ColorTag {
        &self.color
    }

    /// Points in the current set.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Sets won so far.
    #[must_use]
    pub fn sets(&self) -> u32 {
        self.sets
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_color(&mut self, color: ColorTag) {
        self.color = color;
    }

    pub(crate) fn set_points(&mut self, points: u32) {
        self.points = points;
    }

    pub(crate) fn win_set(&mut self) {
        self.sets = self.sets.saturating_add(1);
    }

    pub(crate) fn clear_counters(&mut self) {
        self.points = 0;
        self.sets = 0;
    }
}

/// Default display name for a team.
#[must_use]
pub fn default_name(id: TeamId) -> String {
    format!("Team {id}")
}
