//! Monitor snapshot type
//!
//! A [`Monitor`] is an immutable description of one display as reported by
//! the platform layer: physical (device-pixel) bounds, the work area left
//! after taskbars and docks, and the display's scale factor. Logical
//! coordinates are derived on demand from the invariant
//! `physical = logical * scale`, so one type serves both spaces.

use crate::domain::core::Rect;

/// Selects which monitor region a window is fitted into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Fit to the monitor's total bounds
    Bounds,
    /// Fit to the work area (excluding taskbar, dock, etc.)
    WorkArea,
}

/// A display monitor and its properties
///
/// Created by platform enumeration (or by hand in tests), never mutated
/// afterwards. `bounds` and `work_area` are in physical pixels in the
/// shared virtual-screen space; secondary monitors can sit at negative
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monitor {
    /// Total monitor rectangle in physical pixels
    pub bounds: Rect,
    /// Usable rectangle in physical pixels (excludes system UI)
    pub work_area: Rect,
    /// Physical pixels per logical unit; always positive on a valid monitor
    pub scale: f64,
}

impl Monitor {
    /// Creates a monitor snapshot
    pub fn new(bounds: Rect, work_area: Rect, scale: f64) -> Self {
        Self {
            bounds,
            work_area,
            scale,
        }
    }

    /// Returns true if the monitor is structurally sound
    ///
    /// Checks that both rects are valid, the scale is positive, and the
    /// work area is contained within the bounds. Monitors failing this
    /// check are dropped from consideration, not fatal.
    pub fn is_valid(&self) -> bool {
        self.bounds.is_valid()
            && self.work_area.is_valid()
            && self.scale > 0.0
            && self.work_area.left >= self.bounds.left
            && self.work_area.right <= self.bounds.right
            && self.work_area.top >= self.bounds.top
            && self.work_area.bottom <= self.bounds.bottom
    }

    /// Returns the physical target region for the given fit mode
    pub fn region(&self, mode: FitMode) -> Rect {
        match mode {
            FitMode::Bounds => self.bounds,
            FitMode::WorkArea => self.work_area,
        }
    }

    /// Returns the monitor bounds in logical units
    pub fn logical_bounds(&self) -> Rect {
        descale_rect(&self.bounds, self.scale)
    }

    /// Returns the work area in logical units
    pub fn logical_work_area(&self) -> Rect {
        descale_rect(&self.work_area, self.scale)
    }

    /// Returns the logical target region for the given fit mode
    pub fn logical_region(&self, mode: FitMode) -> Rect {
        match mode {
            FitMode::Bounds => self.logical_bounds(),
            FitMode::WorkArea => self.logical_work_area(),
        }
    }

    /// Returns true if a logical point lies within the logical bounds
    pub fn contains_logical_point(&self, x: i32, y: i32) -> bool {
        self.logical_bounds().contains_point(x, y)
    }

    /// Returns true if a physical point lies within the physical bounds
    pub fn contains_physical_point(&self, x: i32, y: i32) -> bool {
        self.bounds.contains_point(x, y)
    }
}

/// Divides each coordinate by `scale`, truncating toward zero
fn descale_rect(r: &Rect, scale: f64) -> Rect {
    Rect {
        left: (r.left as f64 / scale) as i32,
        top: (r.top as f64 / scale) as i32,
        right: (r.right as f64 / scale) as i32,
        bottom: (r.bottom as f64 / scale) as i32,
    }
}
