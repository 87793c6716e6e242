//! Monitor enumeration and DPI-aware coordinate handling
//!
//! This module is responsible for:
//! - Enumerating all connected monitors
//! - Getting DPI information for each monitor
//! - Providing work area information (excluding taskbar)
//!
//! The Windows virtual coordinate system places secondary monitors at
//! arbitrary offsets, including negative coordinates; rects are passed
//! through untranslated.

use std::sync::Once;

use thiserror::Error;
use tracing::debug;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::UI::HiDpi::*;
use windows::Win32::UI::WindowsAndMessaging::SetProcessDPIAware;

use crate::domain::core::Rect;
use crate::domain::monitor::Monitor;

/// Baseline DPI at scale 1.0
const DEFAULT_DPI: u32 = 96;

/// Error types for monitor enumeration
#[derive(Debug, Error)]
pub enum MonitorError {
    /// EnumDisplayMonitors itself failed
    #[error("failed to enumerate monitors")]
    EnumerationFailed,
    /// Enumeration ran but produced no monitors
    #[error("no monitors found during enumeration")]
    NoMonitors,
}

static DPI_AWARENESS: Once = Once::new();

/// Opts the process into per-monitor DPI awareness, once
///
/// Without this, monitor rects arrive pre-scaled by the system and the
/// reported DPI values are meaningless. Falls back to the Vista-era
/// system-wide awareness API on older systems.
fn ensure_dpi_awareness() {
    DPI_AWARENESS.call_once(|| unsafe {
        if SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE).is_err() {
            debug!("per-monitor DPI awareness unavailable, using system-wide awareness");
            let _ = SetProcessDPIAware();
        }
    });
}

/// Context for the monitor enumeration callback
struct EnumContext {
    monitors: Vec<Monitor>,
}

/// Callback function for monitor enumeration
///
/// Continues enumeration even when an individual monitor fails to report
/// complete information, preferring partial data over aborting the whole
/// enumeration on a problematic monitor or driver.
unsafe extern "system" fn enum_monitor_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    unsafe {
        let context = &mut *(lparam.0 as *mut EnumContext);

        let mut monitor_info = MONITORINFOEXW {
            monitorInfo: MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFOEXW>() as u32,
                ..Default::default()
            },
            ..Default::default()
        };

        if GetMonitorInfoW(hmonitor, &mut monitor_info.monitorInfo) == FALSE {
            debug!(?hmonitor, "skipping monitor without info");
            return TRUE;
        }

        let mut dpi_x: u32 = DEFAULT_DPI;
        let mut dpi_y: u32 = DEFAULT_DPI;
        if GetDpiForMonitor(hmonitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y).is_err() {
            debug!(?hmonitor, "per-monitor DPI unavailable, assuming 96");
            dpi_x = DEFAULT_DPI;
        }

        let bounds = win32_rect_to_rect(&monitor_info.monitorInfo.rcMonitor);
        let work_area = win32_rect_to_rect(&monitor_info.monitorInfo.rcWork);
        let scale = dpi_x as f64 / DEFAULT_DPI as f64;

        context.monitors.push(Monitor::new(bounds, work_area, scale));

        TRUE
    }
}

/// Enumerates all monitors with physical rects and per-monitor scale
///
/// The returned order is the system's enumeration order and is stable
/// between calls on an unchanged monitor topology.
pub fn enumerate_monitors() -> Result<Vec<Monitor>, MonitorError> {
    ensure_dpi_awareness();

    let mut context = EnumContext {
        monitors: Vec::new(),
    };

    unsafe {
        if EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_proc),
            LPARAM(&mut context as *mut _ as isize),
        ) == FALSE
        {
            return Err(MonitorError::EnumerationFailed);
        }
    }

    if context.monitors.is_empty() {
        return Err(MonitorError::NoMonitors);
    }

    Ok(context.monitors)
}

/// Converts a Windows RECT to a domain rectangle
fn win32_rect_to_rect(rect: &RECT) -> Rect {
    Rect {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}
