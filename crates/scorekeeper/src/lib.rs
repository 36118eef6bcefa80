//! `scorekeeper` - Volleyball match scorekeeping core
//!
//! This library tracks points and sets for two teams and applies the set
//! rule: the point that takes a team past 24 wins the set and sends both
//! teams back to zero. Hosts render the [`Snapshot`] it emits and may store
//! the [`MatchSummary`] it produces; the core itself does no I/O.
//!
//! ```
//! use scorekeeper::{ScoreKeeper, TeamId};
//!
//! let mut keeper = ScoreKeeper::new();
//! for _ in 0..25 {
//!     keeper.apply_delta(TeamId::A, 1);
//! }
//! let snapshot = keeper.snapshot();
//! assert_eq!(snapshot.team_a.sets, 1);
//! assert_eq!(snapshot.team_a.points, 0);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod keeper;
pub mod logging;
pub mod observer;
pub mod rules;
pub mod shared;
pub mod snapshot;
pub mod summary;
pub mod team;

pub use action::Action;
pub use config::Config;
pub use error::{Error, Result};
pub use keeper::ScoreKeeper;
pub use logging::init_logging;
pub use observer::{EventLog, ScoreEvent, ScoreEventKind, ScoreObserver};
pub use rules::ScoringRules;
pub use shared::SharedScoreKeeper;
pub use snapshot::{Snapshot, TeamScore};
pub use summary::{MatchSummary, TeamTally};
pub use team::{ColorTag, Team, TeamId};
