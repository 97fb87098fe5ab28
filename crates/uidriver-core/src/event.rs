//! Feedback events from the driven UI.
//!
//! Platform accessibility layers report scroll positions on a best-effort
//! basis: any field of [`ScrollFeedback`] may be missing, and whole events
//! may never arrive. Absence is encoded the way the platform encodes it,
//! with a `-1` sentinel per field, so a snapshot round-trips losslessly.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::direction::ScrollAxis;

/// Sentinel marking a feedback field the platform did not populate.
pub const ABSENT: i32 = -1;

/// Best-effort snapshot of a container's scroll position.
///
/// The index triad (`from_index`, `to_index`, `item_count`) is meaningful
/// only when all three fields are populated; the same holds for each
/// per-axis offset pair. Accessors below enforce that, so callers never see
/// half a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollFeedback {
    pub from_index: i32,
    pub to_index: i32,
    pub item_count: i32,
    pub scroll_x: i32,
    pub scroll_y: i32,
    pub max_scroll_x: i32,
    pub max_scroll_y: i32,
}

impl Default for ScrollFeedback {
    fn default() -> Self {
        Self::blank()
    }
}

impl ScrollFeedback {
    /// A snapshot with every field unpopulated.
    pub fn blank() -> Self {
        Self {
            from_index: ABSENT,
            to_index: ABSENT,
            item_count: ABSENT,
            scroll_x: ABSENT,
            scroll_y: ABSENT,
            max_scroll_x: ABSENT,
            max_scroll_y: ABSENT,
        }
    }

    /// Set the visible index range of an index-addressable container.
    pub fn with_index_range(mut self, from_index: i32, to_index: i32, item_count: i32) -> Self {
        self.from_index = from_index;
        self.to_index = to_index;
        self.item_count = item_count;
        self
    }

    /// Set the vertical offset pair.
    pub fn with_vertical(mut self, scroll_y: i32, max_scroll_y: i32) -> Self {
        self.scroll_y = scroll_y;
        self.max_scroll_y = max_scroll_y;
        self
    }

    /// Set the horizontal offset pair.
    pub fn with_horizontal(mut self, scroll_x: i32, max_scroll_x: i32) -> Self {
        self.scroll_x = scroll_x;
        self.max_scroll_x = max_scroll_x;
        self
    }

    /// The `(from, to, count)` triad, when all three fields are populated.
    pub fn index_range(&self) -> Option<(i32, i32, i32)> {
        if self.from_index != ABSENT && self.to_index != ABSENT && self.item_count != ABSENT {
            Some((self.from_index, self.to_index, self.item_count))
        } else {
            None
        }
    }

    /// The `(offset, max)` pair for the given axis, when both are populated.
    pub fn offsets(&self, axis: ScrollAxis) -> Option<(i32, i32)> {
        let (offset, max) = match axis {
            ScrollAxis::Horizontal => (self.scroll_x, self.max_scroll_x),
            ScrollAxis::Vertical => (self.scroll_y, self.max_scroll_y),
        };
        if offset != ABSENT && max != ABSENT {
            Some((offset, max))
        } else {
            None
        }
    }

    /// True when every field is unpopulated.
    pub fn is_blank(&self) -> bool {
        *self == Self::blank()
    }
}

/// One feedback event observed from the driven UI.
///
/// Only [`UiEvent::Scrolled`] matters to end detection; the other kinds are
/// emitted by real platforms in between and get filtered out during capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A view reported a scroll-position change.
    Scrolled(ScrollFeedback),
    /// Window content changed without a position report.
    ContentChanged,
    /// A window appeared, disappeared or changed state.
    WindowStateChanged,
    /// Input focus moved.
    Focused,
}

impl UiEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Scrolled(_) => "scrolled",
            UiEvent::ContentChanged => "content_changed",
            UiEvent::WindowStateChanged => "window_state_changed",
            UiEvent::Focused => "focused",
        }
    }

    /// The scroll feedback payload, for `Scrolled` events.
    pub fn scroll_feedback(&self) -> Option<&ScrollFeedback> {
        match self {
            UiEvent::Scrolled(feedback) => Some(feedback),
            _ => None,
        }
    }
}

/// Create a feed pair bridging platform callback threads to the driver
/// thread. The sender side is cheap to clone into hook/listener callbacks.
pub fn event_feed() -> (EventFeedSender, EventFeed) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (EventFeedSender { tx }, EventFeed { rx })
}

/// Producer half of the event feed, held by platform callbacks.
#[derive(Debug, Clone)]
pub struct EventFeedSender {
    tx: Sender<UiEvent>,
}

impl EventFeedSender {
    /// Returns false when the feed has been dropped and the event went
    /// nowhere.
    pub fn send(&self, event: UiEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Consumer half of the event feed, owned by the driver thread.
#[derive(Debug)]
pub struct EventFeed {
    rx: Receiver<UiEvent>,
}

impl EventFeed {
    /// Block up to `timeout` for the next event.
    ///
    /// `None` covers both deadline expiry and a disconnected sender; either
    /// way there is no signal to act on, and neither is a failure.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<UiEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Drain one event without blocking.
    pub fn try_recv(&self) -> Option<UiEvent> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_feedback_has_no_groups() {
        let feedback = ScrollFeedback::blank();
        assert!(feedback.is_blank());
        assert!(feedback.index_range().is_none());
        assert!(feedback.offsets(ScrollAxis::Horizontal).is_none());
        assert!(feedback.offsets(ScrollAxis::Vertical).is_none());
    }

    #[test]
    fn index_range_requires_all_three_fields() {
        let partial = ScrollFeedback::blank().with_index_range(0, 9, ABSENT);
        assert!(partial.index_range().is_none());
        assert!(!partial.is_blank());

        let full = ScrollFeedback::blank().with_index_range(0, 9, 30);
        assert_eq!(full.index_range(), Some((0, 9, 30)));
    }

    #[test]
    fn offsets_are_per_axis() {
        let feedback = ScrollFeedback::blank().with_vertical(75, 150);
        assert_eq!(feedback.offsets(ScrollAxis::Vertical), Some((75, 150)));
        assert!(feedback.offsets(ScrollAxis::Horizontal).is_none());
    }

    #[test]
    fn offsets_require_both_fields() {
        let mut feedback = ScrollFeedback::blank();
        feedback.scroll_y = 40;
        assert!(feedback.offsets(ScrollAxis::Vertical).is_none());
    }

    #[test]
    fn event_serialization_is_tagged() {
        let event = UiEvent::Scrolled(ScrollFeedback::blank().with_vertical(0, 100));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event_type\":\"scrolled\""));
        assert!(json.contains("\"scroll_y\":0"));

        let back: UiEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn scroll_feedback_accessor() {
        let feedback = ScrollFeedback::blank().with_vertical(10, 20);
        let event = UiEvent::Scrolled(feedback);
        assert_eq!(event.scroll_feedback(), Some(&feedback));
        assert!(UiEvent::Focused.scroll_feedback().is_none());
    }

    #[test]
    fn event_kind_names() {
        assert_eq!(UiEvent::ContentChanged.kind(), "content_changed");
        assert_eq!(
            UiEvent::Scrolled(ScrollFeedback::blank()).kind(),
            "scrolled"
        );
    }

    #[test]
    fn feed_delivers_in_order() {
        let (tx, feed) = event_feed();
        assert!(tx.send(UiEvent::Focused));
        assert!(tx.send(UiEvent::ContentChanged));

        assert_eq!(
            feed.recv_timeout(Duration::from_millis(10)),
            Some(UiEvent::Focused)
        );
        assert_eq!(feed.try_recv(), Some(UiEvent::ContentChanged));
    }

    #[test]
    fn feed_timeout_is_none() {
        let (_tx, feed) = event_feed();
        assert_eq!(feed.recv_timeout(Duration::from_millis(5)), None);
    }

    #[test]
    fn feed_disconnect_is_none() {
        let (tx, feed) = event_feed();
        drop(tx);
        assert_eq!(feed.recv_timeout(Duration::from_millis(5)), None);
    }

    #[test]
    fn send_fails_once_feed_is_dropped() {
        let (tx, feed) = event_feed();
        drop(feed);
        assert!(!tx.send(UiEvent::Focused));
    }
}
