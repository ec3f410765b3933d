//! Per-item cooldown gates
//!
//! A [`Cooldown`] keeps an item from being used again for a fixed duration
//! after a successful use. The flag is an atomic boolean because two threads
//! touch it: the host's event thread clears it when a use begins, and the
//! scheduler's worker sets it when the re-arm task fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::scheduler::Scheduler;

/// Two-state availability gate: Available -> Unavailable -> (after the
/// configured delay) Available.
///
/// The use sequence is split in two so callers can run the gated effect in
/// between: [`try_acquire`](Cooldown::try_acquire) flips the gate closed
/// synchronously, [`schedule_rearm`](Cooldown::schedule_rearm) queues the
/// one-shot task that reopens it.
#[derive(Debug)]
pub struct Cooldown {
    duration: Duration,
    available: Arc<AtomicBool>,
}

impl Cooldown {
    /// Creates a gate that stays closed for `duration` after each use.
    pub fn new(duration: Duration) -> Self {
        Cooldown {
            duration,
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Convenience constructor for whole-second cooldowns, the unit item
    /// tables are written in.
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// How long the gate stays closed after a use.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether a use is currently allowed.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Claims the gate for one use.
    ///
    /// Returns true and flips the gate closed if it was open; returns false
    /// and does nothing if it was already closed. A failed claim must not
    /// touch the pending re-arm timer, so saturating an unavailable item
    /// never extends its cooldown.
    pub fn try_acquire(&self) -> bool {
        self.available
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Queues the one-shot task that reopens the gate after the configured
    /// delay. Call exactly once per successful [`try_acquire`](Cooldown::try_acquire),
    /// after the gated effect has run.
    pub fn schedule_rearm(&self, scheduler: &dyn Scheduler) {
        let available = Arc::clone(&self.available);
        scheduler.schedule(
            self.duration,
            Box::new(move || {
                available.store(true, Ordering::Release);
            }),
        );
    }
}
