//! Change notification for hosts that render or store the match state.
//!
//! Observers are called after every counter mutation, once the new state is
//! fully in place, so they only ever see whole snapshots.

use serde::Serialize;

use crate::snapshot::Snapshot;
use crate::team::TeamId;

/// What kind of mutation produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScoreEventKind {
    /// A delta changed one team's points without ending the set.
    PointsChanged {
        /// The team the delta was applied to.
        team: TeamId,
        /// The requested delta.
        delta: i64,
    },
    /// A delta pushed a team past the threshold and ended the set.
    SetWon {
        /// The team that won the set.
        team: TeamId,
    },
    /// All counters were cleared.
    Reset,
}

/// A mutation together with the state it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreEvent {
    /// What happened.
    #[serde(flatten)]
    pub kind: ScoreEventKind,
    /// The match state after the mutation.
    pub snapshot: Snapshot,
}

/// Receives score events.
///
/// Implemented for any `FnMut(&ScoreEvent) + Send` closure, so a host can
/// subscribe with a plain callback.
pub trait ScoreObserver: Send {
    /// Called once per mutation, after the state has been updated.
    fn on_event(&mut self, event: &ScoreEvent);
}

impl<F> ScoreObserver for F
where
    F: FnMut(&ScoreEvent) + Send,
{
    fn on_event(&mut self, event: &ScoreEvent) {
        self(event);
    }
}

/// Observer that keeps every event it receives.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<ScoreEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ScoreEvent] {
        &self.events
    }

    /// Number of sets won by `team` according to the log.
    #[must_use]
    pub fn sets_won_by(&self, team: TeamId) -> usize {
        self.events
            .iter()
            .filter(|e| e.kind == ScoreEventKind::SetWon { team })
            .count()
    }
}

impl ScoreObserver for EventLog {
    fn on_event(&mut self, event: &ScoreEvent) {
        self.events.push(*event);
    }
}
