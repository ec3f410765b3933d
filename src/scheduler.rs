//! One-shot deferred task scheduling
//!
//! Cooldown re-arming and delayed world edits must run after a wall-clock
//! delay without ever blocking the host's event thread. The [`Scheduler`]
//! trait is the seam: [`ThreadScheduler`] is the production implementation
//! backed by a single worker thread, [`ManualScheduler`] is a hand-advanced
//! clock for deterministic tests.
//!
//! There is no cancellation. A task, once scheduled, always runs.

use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send>;

/// Schedules one-shot tasks to run after a delay.
pub trait Scheduler: Send + Sync {
    /// Runs `task` once, `delay` from now. Never blocks the caller.
    fn schedule(&self, delay: Duration, task: Task);
}

// ============================================================================
// ThreadScheduler
// ============================================================================

struct Pending {
    deadline: Instant,
    task: Task,
}

// BinaryHeap is a max-heap; ordering is reversed so the earliest deadline
// surfaces first.
impl Ord for Pending {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.deadline.cmp(&self.deadline)
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline
    }
}

impl Eq for Pending {}

/// Production scheduler: a named worker thread draining a channel into a
/// deadline heap.
///
/// Dropping the scheduler disconnects the feed channel; the worker then runs
/// every task still pending before exiting, so scheduled work is never lost.
pub struct ThreadScheduler {
    sender: Sender<Pending>,
}

impl ThreadScheduler {
    /// Spawns the worker thread.
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();

        std::thread::Builder::new()
            .name("arsenal-timer".to_string())
            .spawn(move || run_worker(receiver))
            .expect("Failed to spawn timer worker thread");

        ThreadScheduler { sender }
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let pending = Pending {
            deadline: Instant::now() + delay,
            task,
        };
        if self.sender.send(pending).is_err() {
            log::error!("timer worker is gone; dropping scheduled task");
        }
    }
}

fn run_worker(receiver: Receiver<Pending>) {
    let mut heap: BinaryHeap<Pending> = BinaryHeap::new();

    loop {
        let now = Instant::now();
        match heap.peek().map(|p| p.deadline) {
            Some(deadline) if deadline <= now => {
                if let Some(due) = heap.pop() {
                    (due.task)();
                }
            }
            Some(deadline) => {
                match receiver.recv_timeout(deadline.saturating_duration_since(now)) {
                    Ok(pending) => heap.push(pending),
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match receiver.recv() {
                Ok(pending) => heap.push(pending),
                Err(_) => break,
            },
        }
    }

    // Feed disconnected: run out the remaining deadlines, then exit.
    while let Some(due) = heap.pop() {
        let wait = due.deadline.saturating_duration_since(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        (due.task)();
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

struct ManualState {
    now: Duration,
    pending: Vec<(Duration, Task)>,
}

/// Test scheduler driven by an explicit clock.
///
/// Nothing runs until [`advance`](ManualScheduler::advance) moves the clock
/// past a task's deadline, which makes timing-sensitive assertions exact.
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    /// Creates a scheduler with the clock at zero.
    pub fn new() -> Self {
        ManualScheduler {
            state: Mutex::new(ManualState {
                now: Duration::ZERO,
                pending: Vec::new(),
            }),
        }
    }

    /// Moves the clock forward and runs every task whose deadline has been
    /// reached, in deadline order.
    pub fn advance(&self, by: Duration) {
        let due: Vec<Task> = {
            let mut state = self.state.lock();
            state.now += by;
            let now = state.now;

            let mut due: Vec<(Duration, Task)> = Vec::new();
            let mut i = 0;
            while i < state.pending.len() {
                if state.pending[i].0 <= now {
                    due.push(state.pending.remove(i));
                } else {
                    i += 1;
                }
            }
            due.sort_by_key(|(deadline, _)| *deadline);
            due.into_iter().map(|(_, task)| task).collect()
        };

        // Tasks run outside the lock so they may schedule follow-ups.
        for task in due {
            task();
        }
    }

    /// Number of tasks waiting for their deadline.
    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state.lock();
        let deadline = state.now + delay;
        state.pending.push((deadline, task));
    }
}
