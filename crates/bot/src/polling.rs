use std::time::Duration;

use crate::telegram::TelegramClient;
use crate::traits::UpdateHandler;

/// Seconds `getUpdates` waits for new messages before returning empty
pub const LONG_POLL_TIMEOUT_SECS: u64 = 30;

/// Doubling delay between failed polls, capped at `max`.
#[derive(Debug, Clone)]
pub struct Backoff {
    initial: Duration,
    max: Duration,
    current: Duration,
}

impl Backoff {
    pub fn new(initial: Duration, max: Duration) -> Self {
        Self {
            initial,
            max,
            current: initial,
        }
    }

    /// Delay to wait now; the following call waits twice as long.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = (self.current * 2).min(self.max);
        delay
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(60))
    }
}

/// Poll for updates until the task is cancelled.
///
/// Each update is confirmed by advancing the offset past it, whether or not
/// the handler succeeded, so a failing update is never redelivered forever.
pub async fn run(client: &TelegramClient, handler: &dyn UpdateHandler) {
    let mut offset: Option<i64> = None;
    let mut backoff = Backoff::default();

    loop {
        match client.get_updates(offset, LONG_POLL_TIMEOUT_SECS).await {
            Ok(updates) => {
                backoff.reset();

                for update in updates {
                    offset = Some(update.update_id + 1);

                    if let Err(e) = handler.handle(&update, client).await {
                        tracing::error!("Failed to handle update {}: {}", update.update_id, e);
                    }
                }
            }
            Err(e) => {
                let delay = backoff.next_delay();
                tracing::warn!("Polling failed: {}. Retrying in {:?}", e, delay);
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let mut backoff = Backoff::new(Duration::from_secs(1), Duration::from_secs(5));

        let delays: Vec<u64> = (0..5).map(|_| backoff.next_delay().as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 5, 5]);

        backoff.reset();
        assert_eq!(backoff.next_delay(), Duration::from_secs(1));
    }
}
