//! Monitor enumeration through the `display-info` crate.
//!
//! Used on Linux and other Unix desktops, where it covers both X11 and
//! Wayland sessions.

use display_info::DisplayInfo;

use super::{MonitorSource, PlatformError, RawMonitor};
use crate::geometry::Rect;

/// Enumerates monitors with `DisplayInfo::all`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayInfoMonitors;

impl DisplayInfoMonitors {
    #[must_use]
    pub const fn new() -> Self { Self }
}

impl MonitorSource for DisplayInfoMonitors {
    fn monitors(&self) -> Result<Vec<RawMonitor>, PlatformError> {
        let displays = DisplayInfo::all().map_err(|e| PlatformError::Enumeration(e.to_string()))?;

        Ok(displays
            .iter()
            .map(|d| raw_monitor(d.id, &d.name, d.x, d.y, d.width, d.height))
            .collect())
    }
}

/// Builds a [`RawMonitor`] from one display's fields.
///
/// Displays without an output name are called `display-<id>`.
fn raw_monitor(id: u32, name: &str, x: i32, y: i32, width: u32, height: u32) -> RawMonitor {
    let name = if name.trim().is_empty() { format!("display-{id}") } else { name.to_string() };
    RawMonitor::new(name, Rect::from_origin_size(x, y, width, height))
}
