//! Monitor lookup over an enumeration snapshot
//!
//! All lookups are read-only over the caller-supplied slice and preserve
//! enumeration order: every tie-break keeps the earliest monitor, so a
//! stable enumeration yields stable answers.

use crate::domain::core::Rect;
use crate::domain::monitor::Monitor;

/// What to fall back to when a rect overlaps no monitor at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultMonitorMode {
    /// Report no monitor
    Null,
    /// Fall back to the primary monitor
    Primary,
    /// Fall back to the monitor nearest by edge distance
    Nearest,
}

/// Finds the first monitor containing the given logical point
pub fn monitor_at_logical_point(monitors: &[Monitor], x: i32, y: i32) -> Option<&Monitor> {
    monitors.iter().find(|m| m.contains_logical_point(x, y))
}

/// Finds the first monitor containing the given physical point
pub fn monitor_at_physical_point(monitors: &[Monitor], x: i32, y: i32) -> Option<&Monitor> {
    monitors.iter().find(|m| m.contains_physical_point(x, y))
}

/// Returns the primary monitor
///
/// The primary monitor is the first one whose bounds contain the origin
/// (0,0); when none does, the first monitor stands in. `None` only for an
/// empty slice.
pub fn primary_monitor(monitors: &[Monitor]) -> Option<&Monitor> {
    monitors
        .iter()
        .find(|m| m.contains_physical_point(0, 0))
        .or_else(|| monitors.first())
}

/// Finds the monitor whose logical bounds overlap the rect the most
///
/// Only strictly greater overlap replaces the current best, so the
/// earliest monitor wins ties. When nothing overlaps, `default_mode`
/// decides the fallback.
pub fn monitor_from_logical_rect<'a>(
    monitors: &'a [Monitor],
    rect: &Rect,
    default_mode: DefaultMonitorMode,
) -> Option<&'a Monitor> {
    let mut best: Option<&Monitor> = None;
    let mut max_area = 0;

    for m in monitors {
        let area = rect.overlap_area(&m.logical_bounds());
        if area > max_area {
            max_area = area;
            best = Some(m);
        }
    }

    if best.is_some() {
        return best;
    }

    match default_mode {
        DefaultMonitorMode::Null => None,
        DefaultMonitorMode::Primary => primary_monitor(monitors),
        DefaultMonitorMode::Nearest => nearest_monitor(monitors, rect),
    }
}

/// Point variant of [`monitor_from_logical_rect`]
///
/// The point is treated as a degenerate 1x1 rect so the overlap and
/// fallback semantics match the rect path exactly.
pub fn monitor_from_logical_point(
    monitors: &[Monitor],
    x: i32,
    y: i32,
    default_mode: DefaultMonitorMode,
) -> Option<&Monitor> {
    monitor_from_logical_rect(monitors, &Rect::new(x, y, x + 1, y + 1), default_mode)
}

/// Returns the monitor minimizing edge distance to the rect, ties earliest
fn nearest_monitor<'a>(monitors: &'a [Monitor], rect: &Rect) -> Option<&'a Monitor> {
    let mut best: Option<&Monitor> = None;
    let mut min_distance = i32::MAX;

    for m in monitors {
        let distance = rect.edge_distance(&m.logical_bounds());
        if distance < min_distance {
            min_distance = distance;
            best = Some(m);
        }
    }

    best
}
