//! Playback - Timed sequences of page effects
//!
//! Every animation on the page is a list of steps, each waiting some delay
//! after the previous one before it fires. A Timeline is just that list;
//! running it against a clock is an adapter concern. Runs can be stopped
//! through a CancelToken, which schedulers check between steps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One step: wait `delay`, then perform `action`
#[derive(Debug, Clone, PartialEq)]
pub struct TimedStep<A> {
    pub delay: Duration,
    pub action: A,
}

/// Ordered steps with relative delays
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<A> {
    steps: Vec<TimedStep<A>>,
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Builder: append a step
    pub fn then(mut self, delay: Duration, action: A) -> Self {
        self.push(delay, action);
        self
    }

    /// Append a step
    pub fn push(&mut self, delay: Duration, action: A) {
        self.steps.push(TimedStep { delay, action });
    }

    /// Append every step of another timeline
    pub fn extend(&mut self, other: Timeline<A>) {
        self.steps.extend(other.steps);
    }

    pub fn steps(&self) -> &[TimedStep<A>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time from start until the last step fires
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }

    /// Same actions with every delay removed
    pub fn instant(self) -> Self {
        Self {
            steps: self
                .steps
                .into_iter()
                .map(|s| TimedStep {
                    delay: Duration::ZERO,
                    action: s.action,
                })
                .collect(),
        }
    }
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> IntoIterator for Timeline<A> {
    type Item = TimedStep<A>;
    type IntoIter = std::vec::IntoIter<TimedStep<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Shared stop flag for a running timeline
///
/// Clones observe the same flag. Cancelling is permanent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether both tokens share one flag
    pub fn same_as(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// How a timeline run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed { steps: usize },
    Cancelled { performed: usize, remaining: usize },
}

impl PlaybackOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PlaybackOutcome::Completed { .. })
    }
}
