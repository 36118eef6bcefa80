//! Exclusive-access handle for hosts that drive one match from several places.
//!
//! Every call holds the lock for the whole operation, so the four counters
//! are never observed half-updated.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::keeper::ScoreKeeper;
use crate::observer::ScoreObserver;
use crate::snapshot::Snapshot;
use crate::team::{ColorTag, TeamId};

/// A cloneable handle to a single [`ScoreKeeper`].
#[derive(Debug, Clone, Default)]
pub struct SharedScoreKeeper {
    inner: Arc<Mutex<ScoreKeeper>>,
}

impl SharedScoreKeeper {
    /// Wrap an existing keeper.
    #[must_use]
    pub fn new(keeper: ScoreKeeper) -> Self {
        Self {
            inner: Arc::new(Mutex::new(keeper)),
        }
    }

    // Mutations are single critical sections, so a panic in another holder
    // (an observer, say) cannot leave the counters inconsistent.
    fn lock(&self) -> MutexGuard<'_, ScoreKeeper> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`ScoreKeeper::apply_delta`].
    pub fn apply_delta(&self, team: TeamId, delta: i64) -> Snapshot {
        self.lock().apply_delta(team, delta)
    }

    /// See [`ScoreKeeper::apply_delta_for`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTeam`](crate::Error::InvalidTeam) for an
    /// unknown identifier.
    pub fn apply_delta_for(&self, team: &str, delta: i64) -> Result<Snapshot> {
        self.lock().apply_delta_for(team, delta)
    }

    /// See [`ScoreKeeper::reset`].
    pub fn reset(&self) -> Snapshot {
        self.lock().reset()
    }

    /// See [`ScoreKeeper::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// See [`ScoreKeeper::subscribe`]. The observer runs while the lock is
    /// held and must not call back into this handle.
    pub fn subscribe(&self, observer: impl ScoreObserver + 'static) {
        self.lock().subscribe(observer);
    }

    /// See [`ScoreKeeper::set_color`].
    pub fn set_color(&self, team: TeamId, color: ColorTag) {
        self.lock().set_color(team, color);
    }

    /// Run `f` with exclusive access to the keeper.
    pub fn with<R>(&self, f: impl FnOnce(&mut ScoreKeeper) -> R) -> R {
        f(&mut self.lock())
    }
}

impl From<ScoreKeeper> for SharedScoreKeeper {
    fn from(keeper: ScoreKeeper) -> Self {
        Self::new(keeper)
    }
}
