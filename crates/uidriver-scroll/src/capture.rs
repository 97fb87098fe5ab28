//! One gesture, one bounded feedback window.

use std::time::{Duration, Instant};

use tracing::trace;
use uidriver_core::{ContainerHandle, DriverError, ScrollDirection, ScrollFeedback, UiEvent};

/// Platform collaborator that injects gestures and surfaces feedback events.
///
/// Implementations wrap the real automation connection (instrumentation,
/// uiautomation, a test double). `await_event` must block for up to the full
/// timeout before answering `Ok(None)`; expiry is a valid outcome, not an
/// error.
pub trait GestureBackend {
    /// Issue exactly one scroll/swipe gesture on the container.
    ///
    /// Fails with [`DriverError::Unrecoverable`] when injection cannot be
    /// engaged at all.
    fn perform_scroll(
        &mut self,
        container: &ContainerHandle,
        direction: ScrollDirection,
    ) -> Result<(), DriverError>;

    /// Wait up to `timeout` for the next UI feedback event.
    fn await_event(&mut self, timeout: Duration) -> Result<Option<UiEvent>, DriverError>;
}

/// Captures the scroll feedback produced by a single gesture.
///
/// Events keep arriving while the window is open; only the most recent
/// scroll-position change is retained and each superseded record is dropped
/// the moment a newer one lands, so nothing accumulates across steps.
#[derive(Debug, Clone)]
pub struct EventCapture {
    event_timeout: Duration,
}

impl EventCapture {
    pub fn new(event_timeout: Duration) -> Self {
        Self { event_timeout }
    }

    pub fn event_timeout(&self) -> Duration {
        self.event_timeout
    }

    /// Perform one scroll and return the last qualifying feedback, or `None`
    /// when the window closes silently.
    ///
    /// The UI may well have moved either way: `None` means "no signal", not
    /// "no effect". Callers must not skip work because nothing was reported.
    pub fn capture(
        &self,
        backend: &mut dyn GestureBackend,
        container: &ContainerHandle,
        direction: ScrollDirection,
    ) -> Result<Option<ScrollFeedback>, DriverError> {
        backend.perform_scroll(container, direction)?;

        let deadline = Instant::now() + self.event_timeout;
        let mut last: Option<ScrollFeedback> = None;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match backend.await_event(remaining)? {
                // Newest wins; the previous record is released right here.
                Some(UiEvent::Scrolled(feedback)) => last = Some(feedback),
                Some(other) => {
                    trace!("ignoring {} event inside scroll window", other.kind());
                }
                None => break,
            }
        }
        Ok(last)
    }
}
