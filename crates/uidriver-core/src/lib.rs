//! Shared vocabulary for the uidriver workspace.
//!
//! Everything here is platform-neutral: scroll directions and axes, the
//! feedback events the driven UI emits, the identity handle for located
//! containers, the error taxonomy, and the channel that carries events from
//! platform callback threads to the single driver thread.

pub mod direction;
pub mod error;
pub mod event;
pub mod handle;

pub use direction::{DirectionConverter, ScrollAxis, ScrollDirection, StandardDirectionConverter};
pub use error::DriverError;
pub use event::{event_feed, EventFeed, EventFeedSender, ScrollFeedback, UiEvent, ABSENT};
pub use handle::ContainerHandle;
