//! Scheduler - Plays a Timeline against the tokio clock
//!
//! Steps run strictly in order on the calling task. The cancel token is
//! checked before each step and again after its delay, so a cancelled run
//! never performs another action.

use butter_domain::{CancelToken, PlaybackOutcome, Timeline};
use tracing::{debug, warn};

/// Cooperative timeline runner
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler;

impl Scheduler {
    pub fn new() -> Self {
        Self
    }

    /// Run every step of `timeline`, handing each action to `perform`
    pub async fn run<A, F>(
        &self,
        timeline: Timeline<A>,
        token: &CancelToken,
        mut perform: F,
    ) -> PlaybackOutcome
    where
        F: FnMut(A),
    {
        let total = timeline.len();
        debug!(
            steps = total,
            duration_ms = timeline.total_duration().as_millis() as u64,
            "playing timeline"
        );

        for (performed, step) in timeline.into_iter().enumerate() {
            if token.is_cancelled() {
                return cancelled(performed, total);
            }

            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
                if token.is_cancelled() {
                    return cancelled(performed, total);
                }
            }

            perform(step.action);
        }

        PlaybackOutcome::Completed { steps: total }
    }
}

fn cancelled(performed: usize, total: usize) -> PlaybackOutcome {
    let remaining = total - performed;
    warn!(performed, remaining, "playback cancelled");
    PlaybackOutcome::Cancelled {
        performed,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn three_steps() -> Timeline<&'static str> {
        Timeline::new()
            .then(Duration::ZERO, "reset")
            .then(Duration::from_millis(200), "first")
            .then(Duration::from_millis(500), "second")
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_all_steps_in_order() {
        let start = Instant::now();
        let mut seen = Vec::new();

        let outcome = Scheduler::new()
            .run(three_steps(), &CancelToken::new(), |a| seen.push(a))
            .await;

        assert_eq!(outcome, PlaybackOutcome::Completed { steps: 3 });
        assert_eq!(seen, vec!["reset", "first", "second"]);
        assert_eq!(start.elapsed(), Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let mut seen = Vec::new();

        let outcome = Scheduler::new()
            .run(three_steps(), &token, |a| seen.push(a))
            .await;

        assert_eq!(
            outcome,
            PlaybackOutcome::Cancelled {
                performed: 0,
                remaining: 3
            }
        );
        assert!(seen.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_between_steps() {
        let token = CancelToken::new();
        let canceller = token.clone();
        let mut seen = Vec::new();

        let outcome = Scheduler::new()
            .run(three_steps(), &token, |a| {
                seen.push(a);
                if a == "first" {
                    canceller.cancel();
                }
            })
            .await;

        assert_eq!(
            outcome,
            PlaybackOutcome::Cancelled {
                performed: 2,
                remaining: 1
            }
        );
        assert_eq!(seen, vec!["reset", "first"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_delay_skips_step() {
        let token = CancelToken::new();
        let canceller = token.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let mut seen = Vec::new();
        let outcome = Scheduler::new()
            .run(three_steps(), &token, |a| seen.push(a))
            .await;

        assert_eq!(seen, vec!["reset"]);
        assert!(!outcome.is_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_timeline() {
        let outcome = Scheduler::new()
            .run(Timeline::<()>::new(), &CancelToken::new(), |_| {})
            .await;
        assert_eq!(outcome, PlaybackOutcome::Completed { steps: 0 });
    }
}
