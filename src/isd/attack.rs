use super::error::AttackError;
use super::params::SyndromeInstance;
use crate::gf::Gf2Vector;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait Attack {
    fn name(&self) -> &'static str;
    /// output e has weight w and H·e = s if successful, None otherwise
    fn solve(&self, instance: &SyndromeInstance) -> Result<Option<Gf2Vector>, AttackError>;
}

/// Snapshot handed to an [`AttemptObserver`] after every finished attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptProgress {
    /// 1-based index of the attempt that just finished.
    pub attempt: u64,
    pub budget: u64,
    /// Unique solutions collected so far.
    pub solutions: usize,
}

pub trait AttemptObserver {
    fn on_attempt(&mut self, progress: AttemptProgress);
}

pub struct NoopObserver;

impl AttemptObserver for NoopObserver {
    fn on_attempt(&mut self, _progress: AttemptProgress) {}
}

/// Reports every attempt through `log` at info level.
pub struct LogObserver;

impl AttemptObserver for LogObserver {
    fn on_attempt(&mut self, p: AttemptProgress) {
        log::info!(
            "attempt {}/{} completed, unique solutions: {}",
            p.attempt,
            p.budget,
            p.solutions
        );
    }
}

impl<F: FnMut(AttemptProgress)> AttemptObserver for F {
    fn on_attempt(&mut self, progress: AttemptProgress) {
        self(progress)
    }
}

/// Shared flag polled between attempts and between enumerated combinations.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
