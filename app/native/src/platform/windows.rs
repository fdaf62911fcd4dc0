//! Windows monitor enumeration via `EnumDisplayMonitors` / `GetMonitorInfoW`.

use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO};

use super::{MonitorSource, PlatformError, RawMonitor};
use crate::geometry::Rect;

/// Enumerates monitors with the Win32 display API.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Monitors;

impl Win32Monitors {
    #[must_use]
    pub const fn new() -> Self { Self }
}

impl MonitorSource for Win32Monitors {
    fn monitors(&self) -> Result<Vec<RawMonitor>, PlatformError> {
        let mut monitors: Vec<RawMonitor> = Vec::new();

        // SAFETY: the callback has the MONITORENUMPROC signature and `lparam`
        // points at `monitors`, which outlives the synchronous enumeration.
        let ok = unsafe {
            EnumDisplayMonitors(
                HDC::default(),
                None,
                Some(monitor_enum_proc),
                LPARAM(std::ptr::from_mut(&mut monitors) as isize),
            )
        };

        if !ok.as_bool() {
            return Err(PlatformError::Enumeration(
                "EnumDisplayMonitors failed".to_string(),
            ));
        }

        Ok(monitors)
    }
}

/// Win32 monitor enumeration callback.
///
/// # Safety
///
/// Called by Win32 inside `EnumDisplayMonitors`. `lparam` must point to a
/// live `Vec<RawMonitor>` for the duration of the enumeration.
unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _lprc_clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let monitors = unsafe { &mut *(lparam.0 as *mut Vec<RawMonitor>) };

    #[allow(clippy::cast_possible_truncation)]
    let size = std::mem::size_of::<MONITORINFO>() as u32;
    let mut info = MONITORINFO {
        cbSize: size,
        ..Default::default()
    };

    // SAFETY: `hmonitor` is a valid handle provided by Win32 and `info` has
    // its size field set.
    if unsafe { GetMonitorInfoW(hmonitor, &mut info) }.as_bool() {
        let rc = info.rcMonitor;
        match Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom) {
            Some(rect) => monitors.push(RawMonitor::new(format!("{:#x}", hmonitor.0 as usize), rect)),
            None => tracing::warn!(
                left = rc.left,
                top = rc.top,
                right = rc.right,
                bottom = rc.bottom,
                "ignoring monitor with inverted bounds"
            ),
        }
    }

    BOOL(1)
}
