//! Identity handles for located containers.

use std::fmt;
use std::sync::Arc;

/// Identity of a scrollable container as resolved by one selector lookup.
///
/// Equality is handle identity, never selector text: an end recorded for a
/// container is only valid for the exact handle the previous step saw, so
/// two handles built from the same selector string stay distinct, while
/// clones of one handle compare equal. The selector text is kept for logs
/// only.
#[derive(Clone)]
pub struct ContainerHandle {
    selector: Arc<str>,
}

impl ContainerHandle {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Arc::from(selector.into()),
        }
    }

    /// The selector text this handle was resolved from.
    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl PartialEq for ContainerHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.selector, &other.selector)
    }
}

impl Eq for ContainerHandle {}

impl fmt::Debug for ContainerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerHandle")
            .field("selector", &self.selector)
            .finish()
    }
}

impl fmt::Display for ContainerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector)
    }
}
