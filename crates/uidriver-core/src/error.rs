//! Failure taxonomy for driver operations.
//!
//! Feedback-wait expiry is deliberately not represented here: waiting out an
//! event window is a normal outcome and the capture layer reports it as "no
//! signal". [`DriverError::Timeout`] is reserved for polling deadlines that
//! really did fail, such as no foreground window ever appearing.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// The platform automation mechanism cannot be engaged at all, for
    /// example an invalid instrumentation mode. Terminates the current step
    /// and session; never retried.
    #[error("automation backend cannot be engaged: {reason}")]
    Unrecoverable { reason: String },

    /// A polling deadline elapsed before the awaited condition held.
    #[error("timed out after {}ms waiting for {what}", timeout.as_millis())]
    Timeout { what: String, timeout: Duration },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl DriverError {
    pub fn unrecoverable(reason: impl Into<String>) -> Self {
        Self::Unrecoverable {
            reason: reason.into(),
        }
    }

    /// Fatal errors invalidate the whole session; retrying cannot help.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Unrecoverable { .. })
    }
}
