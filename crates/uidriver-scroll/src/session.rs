//! Single-slot memory of the last confirmed scroll end.

use uidriver_core::{ContainerHandle, ScrollDirection};

/// Remembers the (container, direction) pair whose end was confirmed by the
/// immediately preceding step, so a repeat of the same request can be
/// answered without touching the device.
///
/// One slot, last write wins, no expiry. Matching is handle identity: the
/// stored handle must be the very handle the caller used before, not one
/// that merely carries an equal selector. Access is strictly sequential, so
/// no locking.
#[derive(Debug, Default)]
pub struct EndMemo {
    slot: Option<(ContainerHandle, ScrollDirection)>,
}

impl EndMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any recorded end. Called at the start of every session.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// True when `container` and `direction` match the recorded end.
    pub fn matches(&self, container: &ContainerHandle, direction: ScrollDirection) -> bool {
        match &self.slot {
            Some((recorded, at)) => recorded == container && *at == direction,
            None => false,
        }
    }

    /// Overwrite the slot with a freshly confirmed end.
    pub fn record(&mut self, container: &ContainerHandle, direction: ScrollDirection) {
        self.slot = Some((container.clone(), direction));
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
