//! Bounded condition polling.

use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;
use uidriver_core::DriverError;

/// Polls a condition until it holds or a deadline passes.
///
/// The pause between attempts never overshoots the deadline: each sleep is
/// `min(interval, remaining)`, so the final attempt lands right at the
/// timeout instead of one interval past it.
#[derive(Debug, Clone)]
pub struct Poller {
    timeout: Duration,
    interval: Duration,
}

impl Default for Poller {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            interval: Duration::from_millis(250),
        }
    }
}

impl Poller {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Repeatedly evaluate `condition` until it yields a value.
    ///
    /// `what` names the awaited condition in the timeout error. Errors from
    /// the condition itself propagate immediately; only running out of time
    /// produces [`DriverError::Timeout`].
    pub fn poll_until<T, F>(&self, what: &str, mut condition: F) -> Result<T, DriverError>
    where
        F: FnMut() -> Result<Option<T>, DriverError>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(value) = condition()? {
                return Ok(value);
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(DriverError::Timeout {
                    what: what.to_string(),
                    timeout: self.timeout,
                });
            }
            trace!("still waiting for {} ({}ms left)", what, remaining.as_millis());
            thread::sleep(self.interval.min(remaining));
        }
    }
}
