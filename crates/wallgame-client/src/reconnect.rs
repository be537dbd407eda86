//! Reconnect policy.
//!
//! Every abnormal closure is retried, forever. [`Backoff`] only decides how
//! long to wait before the next attempt. It is pure state: the session task
//! owns the timer.

use std::time::Duration;

/// Default delay before the first retry.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(250);

/// Default cap on the delay between retries.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

/// Backoff settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectConfig {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on any delay.
    pub max_delay: Duration,
    /// Growth factor between consecutive delays.
    pub multiplier: u32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self { initial_delay: DEFAULT_INITIAL_DELAY, max_delay: DEFAULT_MAX_DELAY, multiplier: 2 }
    }
}

/// Exponential backoff without an attempt cap.
#[derive(Debug, Clone)]
pub struct Backoff {
    config: ReconnectConfig,
    attempt: u32,
    next_delay: Duration,
}

impl Backoff {
    /// Fresh backoff.
    pub fn new(config: ReconnectConfig) -> Self {
        Self { config, attempt: 0, next_delay: config.initial_delay.min(config.max_delay) }
    }

    /// Schedule the next attempt. Returns its number (starting at 1) and the
    /// delay to wait first.
    pub fn next_attempt(&mut self) -> (u32, Duration) {
        self.attempt = self.attempt.saturating_add(1);
        let delay = self.next_delay;
        self.next_delay = delay
            .checked_mul(self.config.multiplier.max(1))
            .map_or(self.config.max_delay, |next| next.min(self.config.max_delay));
        (self.attempt, delay)
    }

    /// Failed attempts since the last successful open.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Start over after a successful open.
    pub fn reset(&mut self) {
        self.attempt = 0;
        self.next_delay = self.config.initial_delay.min(self.config.max_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(initial_ms: u64, max_ms: u64) -> ReconnectConfig {
        ReconnectConfig {
            initial_delay: Duration::from_millis(initial_ms),
            max_delay: Duration::from_millis(max_ms),
            multiplier: 2,
        }
    }

    #[test]
    fn delays_double_up_to_the_cap() {
        let mut backoff = Backoff::new(config(250, 1500));
        let delays: Vec<u64> =
            (0..5).map(|_| backoff.next_attempt().1.as_millis() as u64).collect();
        assert_eq!(delays, vec![250, 500, 1000, 1500, 1500]);
        assert_eq!(backoff.attempt(), 5);
    }

    #[test]
    fn reset_starts_over() {
        let mut backoff = Backoff::new(config(100, 10_000));
        backoff.next_attempt();
        backoff.next_attempt();
        backoff.reset();
        assert_eq!(backoff.next_attempt(), (1, Duration::from_millis(100)));
    }

    #[test]
    fn never_gives_up() {
        let mut backoff = Backoff::new(config(1, 2));
        for _ in 0..10_000 {
            backoff.next_attempt();
        }
        assert_eq!(backoff.next_attempt().1, Duration::from_millis(2));
    }
}
