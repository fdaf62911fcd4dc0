//! macOS monitor enumeration via `NSScreen`.
//!
//! `NSScreen` frames use a bottom-left origin with Y growing upward. They are
//! converted to the top-left, Y-down space every other platform reports so
//! that canvas offsets work the same everywhere.

use objc::runtime::{Class, Object};
use objc::{msg_send, sel, sel_impl};

use super::{MonitorSource, PlatformError, RawMonitor};
use crate::geometry::Rect;

// NSScreen lives in AppKit, which a plain command-line binary does not load.
#[link(name = "AppKit", kind = "framework")]
unsafe extern "C" {}

/// Objective-C `NSRect` structure.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct NSRect {
    origin: NSPoint,
    size: NSSize,
}

/// Objective-C `NSPoint` structure.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct NSPoint {
    x: f64,
    y: f64,
}

/// Objective-C `NSSize` structure.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct NSSize {
    width: f64,
    height: f64,
}

/// Enumerates monitors from `[NSScreen screens]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NsScreenMonitors;

impl NsScreenMonitors {
    #[must_use]
    pub const fn new() -> Self { Self }
}

impl MonitorSource for NsScreenMonitors {
    fn monitors(&self) -> Result<Vec<RawMonitor>, PlatformError> { unsafe { screens_unsafe() } }
}

/// # Safety
///
/// Uses Objective-C runtime calls. Safe as long as the runtime is loaded,
/// which is always the case for an AppKit-linked binary on macOS.
unsafe fn screens_unsafe() -> Result<Vec<RawMonitor>, PlatformError> {
    let Some(screen_class) = Class::get("NSScreen") else {
        return Err(PlatformError::Enumeration("failed to get NSScreen class".to_string()));
    };

    let ns_screens: *mut Object = unsafe { msg_send![screen_class, screens] };
    if ns_screens.is_null() {
        return Err(PlatformError::Enumeration("failed to get screens array".to_string()));
    }

    // The first screen holds the menu bar and defines the coordinate origin.
    let count: usize = unsafe { msg_send![ns_screens, count] };
    if count == 0 {
        return Ok(Vec::new());
    }
    let primary: *mut Object = unsafe { msg_send![ns_screens, objectAtIndex: 0usize] };
    let primary_frame: NSRect = unsafe { msg_send![primary, frame] };
    let primary_height = primary_frame.size.height;

    let mut monitors = Vec::with_capacity(count);
    for index in 0..count {
        let ns_screen: *mut Object = unsafe { msg_send![ns_screens, objectAtIndex: index] };
        if ns_screen.is_null() {
            continue;
        }

        let frame: NSRect = unsafe { msg_send![ns_screen, frame] };
        monitors.push(RawMonitor::new(format!("screen-{index}"), to_top_left(frame, primary_height)));
    }

    Ok(monitors)
}

/// Converts a bottom-left origin frame into a top-left origin [`Rect`].
///
/// `new_y = primary_height - y - height`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_top_left(frame: NSRect, primary_height: f64) -> Rect {
    let top = primary_height - frame.origin.y - frame.size.height;
    Rect::from_origin_size(
        frame.origin.x.round() as i32,
        top.round() as i32,
        frame.size.width.round().max(0.0) as u32,
        frame.size.height.round().max(0.0) as u32,
    )
}
