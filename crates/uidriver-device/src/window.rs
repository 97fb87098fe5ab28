//! Root-window discovery for the driven app.

use image::RgbaImage;
use tracing::debug;
use uidriver_core::DriverError;

use crate::poller::Poller;

/// One attached root window, as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// Platform window id, stable while the window stays attached.
    pub id: u64,
    /// Window title or tag, when the platform exposes one.
    pub label: Option<String>,
    /// Whether this window currently holds input focus.
    pub has_focus: bool,
    /// Top-left corner in screen coordinates. Non-zero for dialogs and
    /// popups rendered inside a larger screen.
    pub origin: (i32, i32),
}

/// Platform collaborator exposing the window tree and synchronous rendering.
pub trait WindowBackend {
    /// All currently attached root windows, in z-order.
    fn root_windows(&mut self) -> Result<Vec<WindowInfo>, DriverError>;

    /// The window of the resumed foreground activity, or `None` while no
    /// activity is resumed (mid-launch, mid-transition).
    fn foreground_window(&mut self) -> Result<Option<WindowInfo>, DriverError>;

    /// Render the window's current content on the platform UI thread and
    /// return the raw pixels of the window only, without screen placement.
    fn render_window(&mut self, window: &WindowInfo) -> Result<RgbaImage, DriverError>;
}

/// Locate the root window the driver should act on.
///
/// With several roots attached (dialogs, IME windows) the focused one wins.
/// Otherwise the foreground activity's window is awaited through `poller`;
/// an app mid-launch can take a moment to reach the resumed state.
pub fn find_root_window(
    backend: &mut dyn WindowBackend,
    poller: &Poller,
) -> Result<WindowInfo, DriverError> {
    let windows = backend.root_windows()?;
    if windows.len() > 1 {
        debug!("{} root windows attached", windows.len());
        if let Some(focused) = windows.into_iter().find(|w| w.has_focus) {
            return Ok(focused);
        }
    }
    poller.poll_until("foreground activity window", || backend.foreground_window())
}
