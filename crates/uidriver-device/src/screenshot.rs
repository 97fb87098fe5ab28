//! Screenshot capture and persistence.
//!
//! Capture renders the root window through the platform backend and places
//! it at its on-screen position; persistence writes JPEGs under dated
//! directories so a long test run stays browsable and prunable.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use image::codecs::jpeg::JpegEncoder;
use image::{imageops, DynamicImage, RgbaImage};
use tracing::debug;
use uidriver_core::DriverError;

use crate::poller::Poller;
use crate::window::{find_root_window, WindowBackend, WindowInfo};

/// Render `window` and place it at its screen position.
///
/// Windows at the screen origin pass through untouched. A window rendered at
/// offset `(x, y)` (dialogs, popups) is composited onto a canvas of
/// `(w + x, h + y)` pixels with the content at `(x, y)`, so pixel
/// coordinates in the result match screen coordinates. Negative origins
/// clamp to zero.
pub fn screenshot_window(
    backend: &mut dyn WindowBackend,
    window: &WindowInfo,
) -> Result<DynamicImage, DriverError> {
    let rendered = backend.render_window(window)?;

    let x = window.origin.0.max(0) as u32;
    let y = window.origin.1.max(0) as u32;
    if x == 0 && y == 0 {
        return Ok(DynamicImage::ImageRgba8(rendered));
    }

    let mut canvas = RgbaImage::new(rendered.width() + x, rendered.height() + y);
    imageops::overlay(&mut canvas, &rendered, i64::from(x), i64::from(y));
    debug!(
        "screenshot composited at offset ({}, {}) for window {}",
        x, y, window.id
    );
    Ok(DynamicImage::ImageRgba8(canvas))
}

/// Locate the root window and capture it in one call.
pub fn take_screenshot(
    backend: &mut dyn WindowBackend,
    poller: &Poller,
) -> Result<DynamicImage, DriverError> {
    let window = find_root_window(backend, poller)?;
    screenshot_window(backend, &window)
}

/// Writes driver screenshots as JPEG files under dated directories.
///
/// Layout: `{base_dir}/YYYY-MM-DD/{timestamp_ms}_w{window_id}.jpg`.
pub struct ScreenshotSink {
    base_dir: PathBuf,
    quality: u8,
}

impl ScreenshotSink {
    /// `quality` is JPEG quality 1-100; out-of-range values are clamped.
    pub fn new(base_dir: impl Into<PathBuf>, quality: u8) -> Self {
        Self {
            base_dir: base_dir.into(),
            quality: quality.clamp(1, 100),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write one screenshot. Returns the absolute path of the file.
    pub fn write(
        &self,
        image: &DynamicImage,
        captured_at: DateTime<Utc>,
        window_id: u64,
    ) -> Result<PathBuf, DriverError> {
        let date_dir = self
            .base_dir
            .join(captured_at.format("%Y-%m-%d").to_string());
        fs::create_dir_all(&date_dir)?;

        let filename = format!("{}_w{}.jpg", captured_at.timestamp_millis(), window_id);
        let path = date_dir.join(filename);

        let file = fs::File::create(&path)?;
        let writer = BufWriter::new(file);
        let mut encoder = JpegEncoder::new_with_quality(writer, self.quality);
        encoder
            .encode_image(image)
            .map_err(anyhow::Error::from)?;

        debug!(
            "screenshot written: {} ({}x{}, q={})",
            path.display(),
            image.width(),
            image.height(),
            self.quality
        );
        Ok(path)
    }

    /// Remove dated directories older than `max_age`. Returns how many were
    /// removed. Directories whose names do not parse as dates are left
    /// alone.
    pub fn cleanup_older_than(&self, max_age: chrono::Duration) -> Result<usize, DriverError> {
        let cutoff = (Utc::now() - max_age).date_naive();
        let mut removed = 0;

        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            // Nothing written yet.
            Err(_) => return Ok(0),
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Ok(date) = NaiveDate::parse_from_str(&name.to_string_lossy(), "%Y-%m-%d") else {
                continue;
            };
            if date < cutoff && entry.path().is_dir() {
                fs::remove_dir_all(entry.path())?;
                debug!("pruned screenshot dir {}", entry.path().display());
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::time::Duration;
    use tempfile::TempDir;

    struct OneWindowBackend {
        window: WindowInfo,
        pixels: RgbaImage,
    }

    impl WindowBackend for OneWindowBackend {
        fn root_windows(&mut self) -> Result<Vec<WindowInfo>, DriverError> {
            Ok(vec![self.window.clone()])
        }

        fn foreground_window(&mut self) -> Result<Option<WindowInfo>, DriverError> {
            Ok(Some(self.window.clone()))
        }

        fn render_window(&mut self, _window: &WindowInfo) -> Result<RgbaImage, DriverError> {
            Ok(self.pixels.clone())
        }
    }

    fn solid_image(width: u32, height: u32, pixel: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, pixel)
    }

    fn backend_at(origin: (i32, i32)) -> OneWindowBackend {
        OneWindowBackend {
            window: WindowInfo {
                id: 42,
                label: Some("main".into()),
                has_focus: true,
                origin,
            },
            pixels: solid_image(4, 3, Rgba([200, 10, 10, 255])),
        }
    }

    fn fast_poller() -> Poller {
        Poller::new(Duration::from_millis(40), Duration::from_millis(2))
    }

    #[test]
    fn window_at_origin_passes_through() {
        let mut backend = backend_at((0, 0));
        let shot = take_screenshot(&mut backend, &fast_poller()).unwrap();
        assert_eq!((shot.width(), shot.height()), (4, 3));
    }

    #[test]
    fn offset_window_is_composited_at_screen_position() {
        let mut backend = backend_at((2, 3));
        let shot = take_screenshot(&mut backend, &fast_poller()).unwrap();
        assert_eq!((shot.width(), shot.height()), (6, 6));

        let rgba = shot.to_rgba8();
        // Content starts at the window origin; padding stays transparent.
        assert_eq!(rgba.get_pixel(2, 3), &Rgba([200, 10, 10, 255]));
        assert_eq!(rgba.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(rgba.get_pixel(1, 5), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn negative_origin_clamps_to_zero() {
        let mut backend = backend_at((-5, -1));
        let shot = take_screenshot(&mut backend, &fast_poller()).unwrap();
        assert_eq!((shot.width(), shot.height()), (4, 3));
    }

    #[test]
    fn sink_writes_a_readable_jpeg_in_a_dated_dir() {
        let tmp = TempDir::new().unwrap();
        let sink = ScreenshotSink::new(tmp.path(), 80);
        let image = DynamicImage::ImageRgba8(solid_image(16, 16, Rgba([0, 120, 0, 255])));
        let now = Utc::now();

        let path = sink.write(&image, now, 7).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("_w7.jpg"));
        assert!(path
            .parent()
            .unwrap()
            .ends_with(now.format("%Y-%m-%d").to_string()));

        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (16, 16));
    }

    #[test]
    fn sink_quality_is_clamped() {
        let sink = ScreenshotSink::new("/tmp", 200);
        assert_eq!(sink.quality, 100);
        let sink = ScreenshotSink::new("/tmp", 0);
        assert_eq!(sink.quality, 1);
    }

    #[test]
    fn cleanup_prunes_only_old_dated_dirs() {
        let tmp = TempDir::new().unwrap();
        let sink = ScreenshotSink::new(tmp.path(), 80);

        let old = tmp.path().join("2020-01-01");
        let fresh = tmp.path().join(Utc::now().format("%Y-%m-%d").to_string());
        let unrelated = tmp.path().join("notes");
        fs::create_dir_all(&old).unwrap();
        fs::create_dir_all(&fresh).unwrap();
        fs::create_dir_all(&unrelated).unwrap();

        let removed = sink.cleanup_older_than(chrono::Duration::days(30)).unwrap();
        assert_eq!(removed, 1);
        assert!(!old.exists());
        assert!(fresh.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn cleanup_on_missing_base_dir_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let sink = ScreenshotSink::new(tmp.path().join("never_written"), 80);
        assert_eq!(
            sink.cleanup_older_than(chrono::Duration::days(1)).unwrap(),
            0
        );
    }
}
