//! Ticker - Drives the waveform animation loop
//!
//! Only one waveform loop should run at a time. LoopSlot holds the cancel
//! token of the current loop; claiming the slot stops whatever held it.

use std::time::Duration;

use butter_domain::{CancelToken, Waveform};
use rand::Rng;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::debug;

use crate::sampling::noise;

/// Holder for the token of the one running loop
#[derive(Debug, Default)]
pub struct LoopSlot {
    current: Option<CancelToken>,
}

impl LoopSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the running loop, if any, and hand out a token for the next one
    pub fn claim(&mut self) -> CancelToken {
        if let Some(previous) = self.current.take() {
            debug!("replacing running animation loop");
            previous.cancel();
        }
        let token = CancelToken::new();
        self.current = Some(token.clone());
        token
    }

    /// Cancel the running loop and leave the slot empty
    pub fn stop(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }

    /// Empty the slot after a loop ended on its own
    ///
    /// Does nothing if `token` has already been replaced by a newer claim.
    pub fn release(&mut self, token: &CancelToken) {
        if self.current.as_ref().is_some_and(|t| t.same_as(token)) {
            self.current = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

/// Redraws a waveform at a fixed period
#[derive(Debug, Clone, Copy)]
pub struct WaveformTicker {
    waveform: Waveform,
    period: Duration,
}

impl WaveformTicker {
    pub fn new(waveform: Waveform, period: Duration) -> Self {
        Self { waveform, period }
    }

    /// Draw frames until `limit` is reached or the token is cancelled
    ///
    /// Returns the number of frames drawn. `None` runs until cancelled.
    pub async fn run<R, F>(
        &self,
        rng: &mut R,
        limit: Option<usize>,
        token: &CancelToken,
        mut draw: F,
    ) -> usize
    where
        R: Rng + ?Sized,
        F: FnMut(Vec<f64>),
    {
        let start = Instant::now();
        let mut ticks = interval(self.period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut drawn = 0;
        while limit.map_or(true, |l| drawn < l) {
            ticks.tick().await;
            if token.is_cancelled() {
                break;
            }

            let elapsed = start.elapsed().as_secs_f64();
            let samples = noise(rng, self.waveform.bars());
            draw(self.waveform.frame(elapsed, &samples));
            drawn += 1;
        }

        debug!(frames = drawn, "waveform loop finished");
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_claim_cancels_previous() {
        let mut slot = LoopSlot::new();
        let first = slot.claim();
        let second = slot.claim();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(slot.is_running());
    }

    #[test]
    fn test_stop_empties_slot() {
        let mut slot = LoopSlot::new();
        let token = slot.claim();
        slot.stop();

        assert!(token.is_cancelled());
        assert!(!slot.is_running());
    }

    #[test]
    fn test_release_only_frees_own_claim() {
        let mut slot = LoopSlot::new();
        let stale = slot.claim();
        let current = slot.claim();

        slot.release(&stale);
        assert!(slot.is_running());

        slot.release(&current);
        assert!(!slot.is_running());
        assert!(!current.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slot_free_after_limited_run() {
        let mut slot = LoopSlot::new();
        let ticker = WaveformTicker::new(Waveform::new(4), Duration::from_millis(200));
        let mut rng = StdRng::seed_from_u64(3);

        let token = slot.claim();
        ticker.run(&mut rng, Some(2), &token, |_| {}).await;
        slot.release(&token);

        assert!(!slot.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_draws_limited_frames_on_period() {
        let ticker = WaveformTicker::new(Waveform::new(6), Duration::from_millis(200));
        let mut rng = StdRng::seed_from_u64(7);
        let start = Instant::now();
        let mut frames = Vec::new();

        let drawn = ticker
            .run(&mut rng, Some(4), &CancelToken::new(), |f| frames.push(f))
            .await;

        assert_eq!(drawn, 4);
        assert!(frames.iter().all(|f| f.len() == 6));
        // First tick is immediate, then one per period
        assert_eq!(start.elapsed(), Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_cancelled() {
        let ticker = WaveformTicker::new(Waveform::new(3), Duration::from_millis(200));
        let mut rng = StdRng::seed_from_u64(1);
        let token = CancelToken::new();
        let canceller = token.clone();

        let drawn = ticker
            .run(&mut rng, None, &token, |_| {
                canceller.cancel();
            })
            .await;

        assert_eq!(drawn, 1);
    }
}
