//! The match-scoring state machine.
//!
//! [`ScoreKeeper`] owns both teams' counters and is the only place they
//! change. Each team is "in set" while its points stay at or below the
//! threshold; the delta that pushes it past the threshold is the set
//! transition, which bumps that team's set count and zeroes both teams'
//! points in one step. There is no terminal state.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::observer::{ScoreEvent, ScoreEventKind, ScoreObserver};
use crate::rules::ScoringRules;
use crate::snapshot::{Snapshot, TeamScore};
use crate::summary::{MatchSummary, TeamTally};
use crate::team::{ColorTag, Team, TeamId};

/// Authoritative point and set counters for a two-team match.
pub struct ScoreKeeper {
    rules: ScoringRules,
    team_a: Team,
    team_b: Team,
    set_winner: Option<TeamId>,
    observers: Vec<Box<dyn ScoreObserver>>,
}

impl std::fmt::Debug for ScoreKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreKeeper")
            .field("rules", &self.rules)
            .field("team_a", &self.team_a)
            .field("team_b", &self.team_b)
            .field("set_winner", &self.set_winner)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self::with_rules(ScoringRules::default())
    }
}

impl ScoreKeeper {
    /// Create a keeper with the default rules and all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keeper with custom rules and all counters at zero.
    #[must_use]
    pub fn with_rules(rules: ScoringRules) -> Self {
        Self {
            rules,
            team_a: Team::new(TeamId::A),
            team_b: Team::new(TeamId::B),
            set_winner: None,
            observers: Vec::new(),
        }
    }

    /// The rules this keeper applies.
    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Read access to one team.
    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        match id {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    fn team_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::A => &mut self.team_a,
            TeamId::B => &mut self.team_b,
        }
    }

    /// Apply a signed point delta to one team.
    ///
    /// Points clamp at zero. If the result exceeds the set-point threshold,
    /// the team wins the set and both teams' points return to zero together.
    pub fn apply_delta(&mut self, team: TeamId, delta: i64) -> Snapshot {
        let current = i64::from(self.team(team).points());
        let new_points = current.saturating_add(delta).max(0);
        let new_points = u32::try_from(new_points).unwrap_or(u32::MAX);

        let kind = if self.rules.wins_set(new_points) {
            self.team_mut(team).win_set();
            self.team_a.set_points(0);
            self.team_b.set_points(0);
            self.set_winner = Some(team);
            info!(
                team = %team,
                sets = self.team(team).sets(),
                "{} won the set",
                self.team(team).name()
            );
            ScoreEventKind::SetWon { team }
        } else {
            self.team_mut(team).set_points(new_points);
            self.set_winner = None;
            debug!(team = %team, delta, points = new_points, "Applied point delta");
            ScoreEventKind::PointsChanged { team, delta }
        };

        self.publish(kind)
    }

    /// Apply a delta to a team named by a host-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTeam`](crate::Error::InvalidTeam) if `team`
    /// does not name team A or B. The state is left untouched.
    pub fn apply_delta_for(&mut self, team: &str, delta: i64) -> Result<Snapshot> {
        let id = team.parse::<TeamId>().map_err(|err| {
            warn!(%err, "Rejected point delta");
            err
        })?;
        Ok(self.apply_delta(id, delta))
    }

    /// Clear both teams' points and sets.
    pub fn reset(&mut self) -> Snapshot {
        self.team_a.clear_counters();
        self.team_b.clear_counters();
        self.set_winner = None;
        info!("Match reset");
        self.publish(ScoreEventKind::Reset)
    }

    /// The current counters. Does not modify anything.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let team_a = score_of(&self.team_a);
        let team_b = score_of(&self.team_b);
        Snapshot {
            team_a,
            team_b,
            set_winner: self.set_winner,
            match_over: self.rules.wins_match(team_a.sets) || self.rules.wins_match(team_b.sets),
        }
    }

    /// Register an observer for every later mutation.
    pub fn subscribe(&mut self, observer: impl ScoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Change a team's display color. Counters and observers are unaffected.
    pub fn set_color(&mut self, team: TeamId, color: ColorTag) {
        debug!(team = %team, color = %color, "Changed team color");
        self.team_mut(team).set_color(color);
    }

    /// A team's display color.
    #[must_use]
    pub fn color(&self, team: TeamId) -> &ColorTag {
        self.team(team).color()
    }

    /// Change a team's display name. Counters and observers are unaffected.
    pub fn set_name(&mut self, team: TeamId, name: impl Into<String>) {
        self.team_mut(team).set_name(name.into());
    }

    /// Summarize the match for a store, dated `date`.
    #[must_use]
    pub fn summary(&self, date: NaiveDate) -> MatchSummary {
        MatchSummary {
            date,
            team_a: tally_of(&self.team_a),
            team_b: tally_of(&self.team_b),
        }
    }

    /// Summarize the match, dated today in local time.
    #[must_use]
    pub fn summary_today(&self) -> MatchSummary {
        self.summary(Local::now().date_naive())
    }

    fn publish(&mut self, kind: ScoreEventKind) -> Snapshot {
        let snapshot = self.snapshot();
        let event = ScoreEvent { kind, snapshot };
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
        snapshot
    }
}

fn score_of(team: &Team) -> TeamScore {
    TeamScore {
        points: team.points(),
        sets: team.sets(),
    }
}

fn tally_of(team: &Team) -> TeamTally {
    TeamTally {
        name: team.name().to_string(),
        sets: team.sets(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::logging::init_test_logging;
    use crate::observer::EventLog;

    fn apply_n(keeper: &mut ScoreKeeper, team: TeamId, delta: i64, n: usize) -> Snapshot {
        let mut last = keeper.snapshot();
        for _ in 0..n {
            last = keeper.apply_delta(team, delta);
        }
        last
    }

    #[test]
    fn test_new_keeper_is_zero() {
        let keeper = ScoreKeeper::new();
        assert!(keeper.snapshot().is_zero());
        assert_eq!(keeper.rules(), &ScoringRules::default());
    }

    #[test]
    fn test_single_point() {
        let mut keeper = ScoreKeeper::new();
        let snapshot = keeper.apply_delta(TeamId::B, 1);
        assert_eq!(snapshot.team_b, TeamScore { points: 1, sets: 0 });
        assert_eq!(snapshot.team_a, TeamScore::default());
        assert!(snapshot.set_winner.is_none());
    }

    #[test]
    fn test_twenty_five_points_win_the_set() {
        init_test_logging();
        let mut keeper = ScoreKeeper::new();
        let snapshot = apply_n(&mut keeper, TeamId::A, 1, 25);

        assert_eq!(snapshot.team_a, TeamScore { points: 0, sets: 1 });
        assert_eq!(snapshot.team_b, TeamScore { points: 0, sets: 0 });
        assert_eq!(snapshot.set_winner, Some(TeamId::A));
    }

    #[test]
    fn test_decrement_before_threshold() {
        let mut keeper = ScoreKeeper::new();
        apply_n(&mut keeper, TeamId::A, 1, 24);
        let snapshot = keeper.apply_delta(TeamId::A, -1);

        assert_eq!(snapshot.team_a, TeamScore { points: 23, sets: 0 });
    }

    #[test]
    fn test_points_clamp_at_zero() {
        let mut keeper = ScoreKeeper::new();
        keeper.apply_delta(TeamId::A, 3);
        let snapshot = keeper.apply_delta(TeamId::A, -10);
        assert_eq!(snapshot.team_a.points, 0);

        let snapshot = keeper.apply_delta(TeamId::B, i64::MIN);
        assert_eq!(snapshot.team_b.points, 0);
    }

    #[test]
    fn test_set_transition_zeroes_both_teams() {
        let mut keeper = ScoreKeeper::new();
        apply_n(&mut keeper, TeamId::A, 1, 20);
        apply_n(&mut keeper, TeamId::B, 1, 24);
        let snapshot = keeper.apply_delta(TeamId::B, 1);

        assert_eq!(snapshot.team_a, TeamScore { points: 0, sets: 0 });
        assert_eq!(snapshot.team_b, TeamScore { points: 0, sets: 1 });
        assert_eq!(snapshot.set_winner, Some(TeamId::B));
    }

    #[test]
    fn test_large_delta_wins_set_at_once() {
        let mut keeper = ScoreKeeper::new();
        keeper.apply_delta(TeamId::B, 4);
        let snapshot = keeper.apply_delta(TeamId::A, 100);
        assert_eq!(snapshot.team_a, TeamScore { points: 0, sets: 1 });
        assert_eq!(snapshot.team_b.points, 0);

        let snapshot = keeper.apply_delta(TeamId::A, i64::MAX);
        assert_eq!(snapshot.team_a.sets, 2);
    }

    #[test]
    fn test_zero_delta_is_a_noop_on_counters() {
        let mut keeper = ScoreKeeper::new();
        keeper.apply_delta(TeamId::A, 5);
        let before = keeper.snapshot();
        let after = keeper.apply_delta(TeamId::A, 0);
        assert_eq!(before.team_a, after.team_a);
        assert_eq!(before.team_b, after.team_b);
    }

    #[test]
    fn test_set_winner_clears_on_next_delta() {
        let mut keeper = ScoreKeeper::new();
        apply_n(&mut keeper, TeamId::A, 1, 25);
        assert_eq!(keeper.snapshot().set_winner, Some(TeamId::A));

        let snapshot = keeper.apply_delta(TeamId::B, 1);
        assert!(snapshot.set_winner.is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut keeper = ScoreKeeper::new();
        apply_n(&mut keeper, TeamId::A, 1, 60);
        apply_n(&mut keeper, TeamId::B, 1, 7);

        let snapshot = keeper.reset();
        assert_eq!(snapshot, Snapshot::zero());
        assert_eq!(keeper.snapshot(), Snapshot::zero());
    }

    #[test]
    fn test_apply_delta_for_invalid_team() {
        let mut keeper = ScoreKeeper::new();
        keeper.apply_delta(TeamId::A, 2);
        let before = keeper.snapshot();

        let err = keeper.apply_delta_for("C", 1).unwrap_err();
        assert!(err.is_invalid_team());
        assert_eq!(keeper.snapshot(), before);
    }

    #[test]
    fn test_apply_delta_for_valid_team() {
        let mut keeper = ScoreKeeper::new();
        let snapshot = keeper.apply_delta_for("b", 2).unwrap();
        assert_eq!(snapshot.team_b.points, 2);
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut keeper = ScoreKeeper::new();
        keeper.apply_delta(TeamId::A, 7);
        assert_eq!(keeper.snapshot(), keeper.snapshot());
    }

    #[test]
    fn test_custom_threshold() {
        let mut keeper = ScoreKeeper::with_rules(ScoringRules {
            set_point_threshold: 14,
            sets_to_win: None,
        });
        let snapshot = apply_n(&mut keeper, TeamId::B, 1, 15);
        assert_eq!(snapshot.team_b, TeamScore { points: 0, sets: 1 });
    }

    #[test]
    fn test_match_over_does_not_stop_play() {
        let mut keeper = ScoreKeeper::with_rules(ScoringRules {
            set_point_threshold: 24,
            sets_to_win: Some(1),
        });
        let snapshot = apply_n(&mut keeper, TeamId::A, 1, 25);
        assert!(snapshot.match_over);

        let snapshot = keeper.apply_delta(TeamId::A, 1);
        assert_eq!(snapshot.team_a, TeamScore { points: 1, sets: 1 });
        assert!(snapshot.match_over);

        assert!(!keeper.reset().match_over);
    }

    #[test]
    fn test_observers_see_every_mutation() {
        let log = Arc::new(Mutex::new(EventLog::new()));
        let sink = Arc::clone(&log);

        let mut keeper = ScoreKeeper::new();
        keeper.subscribe(move |event: &ScoreEvent| {
            if let Ok(mut log) = sink.lock() {
                log.on_event(event);
            }
        });
        assert_eq!(keeper.observer_count(), 1);

        keeper.apply_delta(TeamId::A, 1);
        apply_n(&mut keeper, TeamId::B, 1, 25);
        keeper.reset();

        let log = log.lock().unwrap();
        let events = log.events();
        assert_eq!(events.len(), 27);
        assert_eq!(
            events[0].kind,
            ScoreEventKind::PointsChanged {
                team: TeamId::A,
                delta: 1
            }
        );
        assert_eq!(events[25].kind, ScoreEventKind::SetWon { team: TeamId::B });
        assert!(events[25].snapshot.team_a.points == 0 && events[25].snapshot.team_b.points == 0);
        assert_eq!(events[26].kind, ScoreEventKind::Reset);
        assert!(events[26].snapshot.is_zero());
    }

    #[test]
    fn test_observers_not_called_on_rejected_team() {
        let calls = Arc::new(Mutex::new(0_u32));
        let counter = Arc::clone(&calls);
        let mut keeper = ScoreKeeper::new();
        keeper.subscribe(move |_: &ScoreEvent| {
            if let Ok(mut n) = counter.lock() {
                *n += 1;
            }
        });

        assert!(keeper.apply_delta_for("z", 1).is_err());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_cosmetics_do_not_touch_counters() {
        let mut keeper = ScoreKeeper::new();
        keeper.apply_delta(TeamId::A, 4);
        let before = keeper.snapshot();

        keeper.set_color(TeamId::A, ColorTag::new("#FF0000"));
        keeper.set_name(TeamId::B, "Blockers");

        assert_eq!(keeper.snapshot(), before);
        assert_eq!(keeper.color(TeamId::A).as_str(), "#FF0000");
        assert_eq!(keeper.team(TeamId::B).name(), "Blockers");

        keeper.reset();
        assert_eq!(keeper.color(TeamId::A).as_str(), "#FF0000");
        assert_eq!(keeper.team(TeamId::B).name(), "Blockers");
    }

    #[test]
    fn test_summary() {
        let mut keeper = ScoreKeeper::new();
        apply_n(&mut keeper, TeamId::B, 1, 50);
        keeper.set_name(TeamId::A, "Diggers");

        let date = NaiveDate::from_ymd_opt(2024, 12, 12).unwrap();
        let summary = keeper.summary(date);
        assert_eq!(summary.date, date);
        assert_eq!(summary.team_a.name, "Diggers");
        assert_eq!(summary.team_a.sets, 0);
        assert_eq!(summary.team_b.sets, 2);
    }

    #[test]
    fn test_debug_hides_observers() {
        let mut keeper = ScoreKeeper::new();
        keeper.subscribe(|_: &ScoreEvent| {});
        let debug_str = format!("{keeper:?}");
        assert!(debug_str.contains("ScoreKeeper"));
        assert!(debug_str.contains("observers: 1"));
    }
}
