//! Driver facade over a platform window backend.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use image::DynamicImage;
use uidriver_core::DriverError;

use crate::poller::Poller;
use crate::screenshot::{screenshot_window, ScreenshotSink};
use crate::window::{find_root_window, WindowBackend, WindowInfo};

/// Tuning for [`DeviceDriver`].
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// How long to wait for a foreground activity window to appear.
    pub poll_timeout: Duration,
    /// Pause between window polls.
    pub poll_interval: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// Ties window discovery and screenshots together behind one handle.
///
/// The scroll engine lives in `uidriver-scroll` and takes its own backend;
/// this facade covers the rest of what a test harness needs from the device.
pub struct DeviceDriver {
    backend: Box<dyn WindowBackend>,
    poller: Poller,
}

impl DeviceDriver {
    pub fn new(backend: Box<dyn WindowBackend>, config: DeviceConfig) -> Self {
        Self {
            backend,
            poller: Poller::new(config.poll_timeout, config.poll_interval),
        }
    }

    /// The root window the driver would act on right now.
    pub fn root_window(&mut self) -> Result<WindowInfo, DriverError> {
        find_root_window(self.backend.as_mut(), &self.poller)
    }

    /// Capture a screenshot of the current root window.
    pub fn screenshot(&mut self) -> Result<DynamicImage, DriverError> {
        let window = self.root_window()?;
        screenshot_window(self.backend.as_mut(), &window)
    }

    /// Capture and persist a screenshot in one call. Returns the written
    /// path.
    pub fn save_screenshot(&mut self, sink: &ScreenshotSink) -> Result<PathBuf, DriverError> {
        let window = self.root_window()?;
        let image = screenshot_window(self.backend.as_mut(), &window)?;
        sink.write(&image, Utc::now(), window.id)
    }
}
