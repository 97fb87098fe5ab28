//! Session-scoped scroll stepping.

use std::time::Duration;

use tracing::debug;
use uidriver_core::{
    ContainerHandle, DirectionConverter, DriverError, ScrollDirection, StandardDirectionConverter,
};

use crate::capture::{EventCapture, GestureBackend};
use crate::detector::{create_detector, DetectorKind, EndDetector};
use crate::session::EndMemo;

/// Tuning for [`ScrollStepper`].
#[derive(Debug, Clone)]
pub struct ScrollStepperConfig {
    /// How long to keep the feedback window open after each gesture.
    pub event_timeout: Duration,
    /// End-detection strategy.
    pub detector: DetectorKind,
}

impl Default for ScrollStepperConfig {
    fn default() -> Self {
        Self {
            event_timeout: Duration::from_millis(1000),
            detector: DetectorKind::default(),
        }
    }
}

/// Outcome of a single scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether a gesture was actually issued. False only when the end memo
    /// answered the request without touching the device.
    pub gesture_performed: bool,
    /// Whether the container boundary was reached on this step.
    pub end_reached: bool,
}

impl StepOutcome {
    /// True while further steps in the same direction can still move content.
    pub fn can_continue(&self) -> bool {
        !self.end_reached
    }
}

/// Drives one scrollable container toward a caller-chosen goal, one step at
/// a time.
///
/// A session brackets one caller-level operation ("scroll until the row is
/// visible"): [`begin_session`](Self::begin_session) clears the end memo,
/// each [`step`](Self::step) performs at most one gesture, and
/// [`end_session`](Self::end_session) closes the bracket. Steps are strictly
/// sequential and the stepper holds no internal concurrency; give-up and
/// iteration limits belong to the caller, where each repeated `step` call is
/// itself the retry. Stepping outside a session works but skips the memo
/// reset, so callers normally bracket every operation.
pub struct ScrollStepper {
    capture: EventCapture,
    detector: Box<dyn EndDetector>,
    converter: Box<dyn DirectionConverter>,
    memo: EndMemo,
}

impl ScrollStepper {
    pub fn new(config: ScrollStepperConfig) -> Self {
        Self::with_converter(config, Box::new(StandardDirectionConverter))
    }

    /// Stepper with a non-standard direction mapping (mirrored layouts).
    pub fn with_converter(
        config: ScrollStepperConfig,
        converter: Box<dyn DirectionConverter>,
    ) -> Self {
        Self {
            capture: EventCapture::new(config.event_timeout),
            detector: create_detector(config.detector),
            converter,
            memo: EndMemo::new(),
        }
    }

    /// Open a scroll session: forget any previously confirmed end.
    pub fn begin_session(&mut self) {
        self.memo.clear();
    }

    /// Close the session. Reserved hook; nothing to release today.
    pub fn end_session(&mut self) {}

    /// Perform one scroll step on `container` toward `direction`.
    ///
    /// When the immediately preceding step already confirmed the end for
    /// this exact (container, direction) pair, no gesture is issued and the
    /// outcome reports `gesture_performed: false`.
    pub fn step(
        &mut self,
        backend: &mut dyn GestureBackend,
        container: &ContainerHandle,
        direction: ScrollDirection,
    ) -> Result<StepOutcome, DriverError> {
        if self.memo.matches(container, direction) {
            debug!(
                "step answered from memo: {} already at {} end",
                container,
                direction.as_str()
            );
            return Ok(StepOutcome {
                gesture_performed: false,
                end_reached: true,
            });
        }
        // The memo only ever describes the immediately preceding step; a
        // request for any other pair invalidates it.
        self.memo.clear();

        let feedback = self.capture.capture(backend, container, direction)?;
        let axis = self.converter.axis_of(direction);
        let end_reached = self.detector.detect_end(feedback.as_ref(), axis);
        if end_reached {
            self.memo.record(container, direction);
            debug!(
                "reached scroll end: container={}, direction={}, feedback={:?}",
                container,
                direction.as_str(),
                feedback
            );
        }

        // A silent window is still a performed gesture; some containers move
        // without reporting it.
        Ok(StepOutcome {
            gesture_performed: true,
            end_reached,
        })
    }
}
