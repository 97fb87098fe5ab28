//! Device plumbing for the driver: root-window discovery, bounded polling,
//! screenshot capture and persistence.
//!
//! Everything platform-specific sits behind [`WindowBackend`]; this crate
//! only decides *which* window to act on, *how long* to wait for one, and
//! how to turn a rendered window into a screen-coordinate screenshot.

pub mod driver;
pub mod poller;
pub mod screenshot;
pub mod window;

pub use driver::{DeviceConfig, DeviceDriver};
pub use poller::Poller;
pub use screenshot::{screenshot_window, take_screenshot, ScreenshotSink};
pub use window::{find_root_window, WindowBackend, WindowInfo};
