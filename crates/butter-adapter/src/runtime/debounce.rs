//! Debounce - Collapse bursts of input into the last value
//!
//! A value is forwarded once no newer value has arrived for the quiet
//! period. When the input closes, any pending value is flushed first.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

/// Spawn a debouncing task between `input` and the returned receiver
///
/// Must be called from within a tokio runtime.
pub fn debounce<T>(mut input: mpsc::Receiver<T>, quiet: Duration) -> mpsc::Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut pending: Option<T> = None;

        loop {
            match pending.take() {
                None => match input.recv().await {
                    Some(value) => pending = Some(value),
                    None => break,
                },
                Some(value) => {
                    tokio::select! {
                        next = input.recv() => match next {
                            Some(newer) => {
                                trace!("debounce: superseded pending value");
                                pending = Some(newer);
                            }
                            None => {
                                let _ = tx.send(value).await;
                                break;
                            }
                        },
                        _ = tokio::time::sleep(quiet) => {
                            if tx.send(value).await.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce(rx, Duration::from_millis(300));

        tx.send(1).await.unwrap();
        tx.send(2).await.unwrap();
        tx.send(3).await.unwrap();

        assert_eq!(out.recv().await, Some(3));

        drop(tx);
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_values_all_pass() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce(rx, Duration::from_millis(300));

        tx.send("a").await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        tx.send("b").await.unwrap();

        assert_eq!(out.recv().await, Some("a"));
        assert_eq!(out.recv().await, Some("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_flushes_pending() {
        let (tx, rx) = mpsc::channel(8);
        let mut out = debounce(rx, Duration::from_secs(60));

        tx.send(42).await.unwrap();
        drop(tx);

        assert_eq!(out.recv().await, Some(42));
        assert_eq!(out.recv().await, None);
    }
}
