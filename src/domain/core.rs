//! Core geometric types and operations
//!
//! This module defines the rectangle primitive shared by every other part
//! of the library. All coordinates are integers in a single coordinate
//! space (logical or physical); which space a rect lives in is decided by
//! the caller.

/// Rectangle described by its edges
///
/// A rect is valid only when `right > left && bottom > top`. Zero-sized or
/// inverted rects are treated as empty by every operation below rather
/// than producing negative areas or distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// X coordinate of the left edge
    pub left: i32,
    /// Y coordinate of the top edge
    pub top: i32,
    /// X coordinate of the right edge (exclusive)
    pub right: i32,
    /// Y coordinate of the bottom edge (exclusive)
    pub bottom: i32,
}

impl Rect {
    /// Creates a new rectangle from its edges
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the width of the rectangle (may be non-positive)
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Returns the height of the rectangle (may be non-positive)
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns true if the rectangle has positive width and height
    pub fn is_valid(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }

    /// Returns the area in square units, or 0 for an invalid rect
    pub fn area(&self) -> i32 {
        if self.is_valid() {
            self.width() * self.height()
        } else {
            0
        }
    }

    /// Returns the center point of the rectangle
    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Returns true if the point lies inside the rectangle
    ///
    /// The right and bottom edges are exclusive, so adjacent rects never
    /// both claim a point on their shared edge.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Returns the overlapping area between two rectangles
    ///
    /// Returns 0 when the rects don't overlap and for any degenerate or
    /// inverted input, never a negative value.
    pub fn overlap_area(&self, other: &Rect) -> i32 {
        let left = self.left.max(other.left);
        let right = self.right.min(other.right);
        let top = self.top.max(other.top);
        let bottom = self.bottom.min(other.bottom);

        if left < right && top < bottom {
            (right - left) * (bottom - top)
        } else {
            0
        }
    }

    /// Returns the Manhattan distance from this rect's center to `bounds`
    ///
    /// Returns 0 when the center lies inside `bounds`, edges inclusive.
    /// Used to rank monitors when a window overlaps none of them.
    pub fn edge_distance(&self, bounds: &Rect) -> i32 {
        let (cx, cy) = self.center();

        let dx = if cx < bounds.left {
            bounds.left - cx
        } else if cx > bounds.right {
            cx - bounds.right
        } else {
            0
        };
        let dy = if cy < bounds.top {
            bounds.top - cy
        } else if cy > bounds.bottom {
            cy - bounds.bottom
        } else {
            0
        };

        dx + dy
    }
}

/// Clamps a one-dimensional (position, size) pair into `[min, max]`
///
/// Returns `(pos, 0)` for a negative size and `(min, 0)` for an inverted
/// span. Otherwise the size is shrunk to fit the span and the position is
/// slid so the interval lies inside it: the max edge is pinned first, then
/// the min edge is clamped. The order matters: when a window is both too
/// far right and too wide, the right edge wins.
pub fn fit_axis(pos: i32, size: i32, min: i32, max: i32) -> (i32, i32) {
    if size < 0 {
        return (pos, 0);
    }
    if min > max {
        return (min, 0);
    }

    let size = size.min(max - min);
    let mut pos = pos;
    if pos + size > max {
        pos = max - size;
    }
    if pos < min {
        pos = min;
    }

    (pos, size)
}
