//! Platform adapters for Splitwall.
//!
//! This is the only place that talks to the operating system. Everything
//! else sees two narrow traits:
//!
//! - [`MonitorSource`] - enumerates the active monitors as [`Rect`]s
//! - [`WallpaperSetter`] - applies an image file as the desktop background
//!
//! The native monitor source is chosen at compile time and re-exported as
//! [`NativeMonitors`]:
//!
//! | Module    | OS            | API used                                   |
//! |-----------|---------------|--------------------------------------------|
//! | `windows` | Windows       | `EnumDisplayMonitors` + `GetMonitorInfoW`  |
//! | `macos`   | macOS         | `NSScreen.screens` frames                  |
//! | `display` | Linux / other | `display_info::DisplayInfo::all`           |
//!
//! [`StaticMonitors`] and [`RecordingSetter`] are always compiled so tests on
//! any platform can run without a display.

mod desktop;
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
mod display;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use desktop::DesktopWallpaper;
#[cfg(target_os = "macos")]
pub use macos::NsScreenMonitors as NativeMonitors;
#[cfg(target_os = "windows")]
pub use self::windows::Win32Monitors as NativeMonitors;
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub use display::DisplayInfoMonitors as NativeMonitors;

use crate::geometry::Rect;

/// Errors raised by native calls.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The OS refused or failed to list monitors.
    #[error("failed to enumerate monitors: {0}")]
    Enumeration(String),
    /// The wallpaper file handed to the OS does not exist.
    #[error("wallpaper file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// The OS rejected the wallpaper change.
    #[error("failed to set wallpaper: {0}")]
    SetWallpaper(String),
}

/// One monitor as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMonitor {
    /// Opaque OS identifier, only used for logging.
    pub id: String,
    /// Monitor bounds in virtual-screen coordinates.
    pub rect: Rect,
}

impl RawMonitor {
    #[must_use]
    pub fn new(id: impl Into<String>, rect: Rect) -> Self { Self { id: id.into(), rect } }
}

/// Lists the active monitors.
pub trait MonitorSource {
    /// Returns one entry per active monitor, in OS order.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Enumeration`] if the native call fails.
    fn monitors(&self) -> Result<Vec<RawMonitor>, PlatformError>;
}

/// Applies an image as the desktop background.
pub trait WallpaperSetter {
    /// Applies the image at `path` (absolute) to the whole virtual screen.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] if the OS call fails.
    fn apply(&mut self, path: &Path) -> Result<(), PlatformError>;

    /// Asks the OS to stretch one image across every monitor.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] if the desktop does not support spanning.
    fn prefer_span(&mut self) -> Result<(), PlatformError> { Ok(()) }
}

/// A fixed monitor list.
#[derive(Debug, Clone, Default)]
pub struct StaticMonitors {
    monitors: Vec<RawMonitor>,
}

impl StaticMonitors {
    /// Creates a source that always reports `rects`, named `static-<index>`.
    #[must_use]
    pub fn new(rects: impl IntoIterator<Item = Rect>) -> Self {
        let monitors = rects
            .into_iter()
            .enumerate()
            .map(|(index, rect)| RawMonitor::new(format!("static-{index}"), rect))
            .collect();
        Self { monitors }
    }
}

impl MonitorSource for StaticMonitors {
    fn monitors(&self) -> Result<Vec<RawMonitor>, PlatformError> { Ok(self.monitors.clone()) }
}

/// A setter that remembers every path it was asked to apply.
///
/// Can be told to fail a number of upcoming calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingSetter {
    applied: Vec<PathBuf>,
    failures_left: u32,
    span_requested: bool,
}

impl RecordingSetter {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// A setter whose next `count` calls to `apply` fail.
    #[must_use]
    pub fn failing(count: u32) -> Self {
        Self {
            failures_left: count,
            ..Self::default()
        }
    }

    /// Paths successfully applied so far.
    #[must_use]
    pub fn applied(&self) -> &[PathBuf] { &self.applied }

    #[must_use]
    pub const fn span_requested(&self) -> bool { self.span_requested }
}

impl WallpaperSetter for RecordingSetter {
    fn apply(&mut self, path: &Path) -> Result<(), PlatformError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(PlatformError::SetWallpaper("simulated failure".to_string()));
        }
        self.applied.push(path.to_path_buf());
        Ok(())
    }

    fn prefer_span(&mut self) -> Result<(), PlatformError> {
        self.span_requested = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_monitors_preserve_order() {
        let source = StaticMonitors::new([
            Rect::from_origin_size(1920, 0, 1080, 1920),
            Rect::from_origin_size(0, 0, 1920, 1080),
        ]);
        let monitors = source.monitors().unwrap();
        assert_eq!(monitors.len(), 2);
        assert_eq!(monitors[0].id, "static-0");
        assert_eq!(monitors[0].rect.left(), 1920);
        assert_eq!(monitors[1].rect.left(), 0);
    }

    #[test]
    fn test_recording_setter_records_paths() {
        let mut setter = RecordingSetter::new();
        setter.apply(Path::new("/tmp/a.jpg")).unwrap();
        setter.apply(Path::new("/tmp/b.jpg")).unwrap();
        assert_eq!(setter.applied(), [PathBuf::from("/tmp/a.jpg"), PathBuf::from("/tmp/b.jpg")]);
    }

    #[test]
    fn test_recording_setter_fails_requested_times() {
        let mut setter = RecordingSetter::failing(2);
        assert!(setter.apply(Path::new("/x.jpg")).is_err());
        assert!(setter.apply(Path::new("/x.jpg")).is_err());
        assert!(setter.apply(Path::new("/x.jpg")).is_ok());
        assert_eq!(setter.applied().len(), 1);
    }

    #[test]
    fn test_recording_setter_span() {
        let mut setter = RecordingSetter::new();
        assert!(!setter.span_requested());
        setter.prefer_span().unwrap();
        assert!(setter.span_requested());
    }

    #[test]
    fn test_platform_error_display() {
        let err = PlatformError::FileNotFound(PathBuf::from("/missing.jpg"));
        assert!(err.to_string().contains("/missing.jpg"));

        let err = PlatformError::Enumeration("no display".to_string());
        assert!(err.to_string().contains("enumerate monitors"));
    }
}
