//! Coordinate conversion between logical and physical spaces
//!
//! Two distinct paths exist. The monitor-relative path maps rects between
//! a monitor's physical bounds and its logical bounds, scaling each axis
//! independently around the monitors' origins. The scale-only path keeps
//! the origin fixed and changes magnification alone; it is used when both
//! spaces share one origin and only the DPI factor differs.
//!
//! All conversions truncate toward zero after the multiply, matching the
//! integer-pixel contract used throughout the library. Round-trips are
//! exact only when the scale divides the coordinates evenly.

use crate::domain::core::Rect;
use crate::domain::monitor::Monitor;

/// Converts a logical rect to physical coordinates on the given monitor
pub fn logical_to_physical(m: &Monitor, logical: &Rect) -> Rect {
    let lb = m.logical_bounds();
    let pb = m.bounds;

    let scale_x = pb.width() as f64 / lb.width() as f64;
    let scale_y = pb.height() as f64 / lb.height() as f64;

    Rect {
        left: ((logical.left - lb.left) as f64 * scale_x) as i32 + pb.left,
        top: ((logical.top - lb.top) as f64 * scale_y) as i32 + pb.top,
        right: ((logical.right - lb.left) as f64 * scale_x) as i32 + pb.left,
        bottom: ((logical.bottom - lb.top) as f64 * scale_y) as i32 + pb.top,
    }
}

/// Converts a physical rect to logical coordinates on the given monitor
pub fn physical_to_logical(m: &Monitor, physical: &Rect) -> Rect {
    let lb = m.logical_bounds();
    let pb = m.bounds;

    let scale_x = lb.width() as f64 / pb.width() as f64;
    let scale_y = lb.height() as f64 / pb.height() as f64;

    Rect {
        left: ((physical.left - pb.left) as f64 * scale_x) as i32 + lb.left,
        top: ((physical.top - pb.top) as f64 * scale_y) as i32 + lb.top,
        right: ((physical.right - pb.left) as f64 * scale_x) as i32 + lb.left,
        bottom: ((physical.bottom - pb.top) as f64 * scale_y) as i32 + lb.top,
    }
}

/// Magnifies a logical rect into screen units without shifting the origin
pub fn logical_to_screen(r: &Rect, scale: f64) -> Rect {
    Rect {
        left: (r.left as f64 * scale) as i32,
        top: (r.top as f64 * scale) as i32,
        right: (r.right as f64 * scale) as i32,
        bottom: (r.bottom as f64 * scale) as i32,
    }
}

/// Shrinks a screen-unit rect back to logical units without an origin shift
pub fn screen_to_logical(r: &Rect, scale: f64) -> Rect {
    Rect {
        left: (r.left as f64 / scale) as i32,
        top: (r.top as f64 / scale) as i32,
        right: (r.right as f64 / scale) as i32,
        bottom: (r.bottom as f64 / scale) as i32,
    }
}
