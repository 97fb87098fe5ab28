//! Scroll-step engine.
//!
//! Issues one scroll gesture at a time on a located container and decides,
//! from whatever accessibility feedback the platform produced inside a
//! bounded window, whether the container boundary has been reached. The
//! feedback is best-effort: it can be missing, partial or stale, so
//! detection is a pluggable strategy ([`EndDetector`]) and a confirmed end
//! is memoized per (container, direction) so repeat requests skip the
//! device entirely until the next session.

pub mod capture;
pub mod detector;
pub mod session;
pub mod stepper;

pub use capture::{EventCapture, GestureBackend};
pub use detector::{
    create_detector, DetectorKind, EndDetector, IndexOffsetDetector, SilenceDetector,
};
pub use session::EndMemo;
pub use stepper::{ScrollStepper, ScrollStepperConfig, StepOutcome};
