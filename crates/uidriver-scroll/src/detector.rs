//! Scroll-end detection strategies.

use std::str::FromStr;

use uidriver_core::{ScrollAxis, ScrollFeedback};

/// Decides whether a scroll step hit the container boundary, given the
/// captured feedback (or its absence) and the axis the gesture travelled.
pub trait EndDetector: Send {
    fn detect_end(&self, signal: Option<&ScrollFeedback>, axis: ScrollAxis) -> bool;
}

/// Default strategy: read index and offset data out of the feedback.
///
/// Silence is read as an end marker: a container that stops reporting
/// position changes has, as far as anyone can tell, stopped moving. That
/// trades the occasional premature "end" for guaranteed forward progress;
/// [`SilenceDetector`] makes the opposite trade.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexOffsetDetector;

impl EndDetector for IndexOffsetDetector {
    fn detect_end(&self, signal: Option<&ScrollFeedback>, axis: ScrollAxis) -> bool {
        let Some(signal) = signal else {
            return true;
        };

        // Index-addressable containers (lists, grids) report their visible
        // range; first or last item in view means a boundary.
        if let Some((from, to, count)) = signal.index_range() {
            return from == 0 || to == count - 1;
        }
        // Pixel-scrolled containers report an offset for the travelled axis.
        if let Some((offset, max)) = signal.offsets(axis) {
            return offset == 0 || offset == max;
        }
        // A completely blank report still counts as an end marker; a report
        // carrying only unrelated data does not.
        signal.is_blank()
    }
}

/// Fallback strategy for containers whose structured feedback is known to
/// be wrong (some composite widgets report bogus ranges): only total silence
/// is an end. Costs one extra scroll at the boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilenceDetector;

impl EndDetector for SilenceDetector {
    fn detect_end(&self, signal: Option<&ScrollFeedback>, _axis: ScrollAxis) -> bool {
        signal.is_none()
    }
}

/// Which end-detection strategy a stepper is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorKind {
    #[default]
    IndexOffset,
    Silence,
}

impl DetectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::IndexOffset => "index_offset",
            DetectorKind::Silence => "silence",
        }
    }
}

impl FromStr for DetectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index_offset" | "index-offset" | "default" => Ok(Self::IndexOffset),
            "silence" | "silence_only" | "silence-only" => Ok(Self::Silence),
            other => Err(format!("unknown detector kind: {other}")),
        }
    }
}

/// Build the detector for `kind`.
pub fn create_detector(kind: DetectorKind) -> Box<dyn EndDetector> {
    match kind {
        DetectorKind::IndexOffset => Box::new(IndexOffsetDetector),
        DetectorKind::Silence => Box::new(SilenceDetector),
    }
}
