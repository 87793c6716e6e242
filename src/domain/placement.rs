//! Initial window placement
//!
//! Computes a centered starting rectangle for a new window on the primary
//! monitor, honoring a desired size, a minimum size, and a margin from the
//! work-area edges. Pure computation over an enumeration snapshot; actually
//! positioning the window is the caller's business.

use crate::domain::core::Rect;
use crate::domain::find::primary_monitor;
use crate::domain::monitor::Monitor;

/// Size preferences for an initial placement, in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    /// Preferred window width
    pub desired_width: i32,
    /// Preferred window height
    pub desired_height: i32,
    /// Minimum acceptable width
    pub min_width: i32,
    /// Minimum acceptable height
    pub min_height: i32,
    /// Minimum distance from the work-area edges
    pub margin: i32,
}

/// Calculates a window size in screen units for the given monitor
///
/// Converts the request to screen units using the monitor's scale, then
/// tries the desired size inside the work area minus margins. When the
/// minimum doesn't fit with margins the margin area is sacrificed, capped
/// at the full work area. Without a monitor the units pass through 1:1 and
/// the result is simply `max(min, desired)`.
pub fn placement_size(monitor: Option<&Monitor>, req: &PlacementRequest) -> (i32, i32) {
    let Some(m) = monitor else {
        return (
            req.min_width.max(req.desired_width),
            req.min_height.max(req.desired_height),
        );
    };

    let screen_min_width = (req.min_width as f64 * m.scale) as i32;
    let screen_min_height = (req.min_height as f64 * m.scale) as i32;
    let screen_desired_width = (req.desired_width as f64 * m.scale) as i32;
    let screen_desired_height = (req.desired_height as f64 * m.scale) as i32;
    let screen_margin = (req.margin as f64 * m.scale) as i32;

    let avail_width = m.work_area.width() - 2 * screen_margin;
    let avail_height = m.work_area.height() - 2 * screen_margin;

    let mut width = screen_min_width.max(screen_desired_width).min(avail_width);
    if width < screen_min_width {
        width = screen_min_width.min(m.work_area.width());
    }

    let mut height = screen_min_height
        .max(screen_desired_height)
        .min(avail_height);
    if height < screen_min_height {
        height = screen_min_height.min(m.work_area.height());
    }

    (width, height)
}

/// Calculates an initial window rectangle centered on the primary monitor
///
/// The rect is in screen units, centered in the primary monitor's work
/// area; odd remainders go to the right/bottom. With no monitors the rect
/// sits at the origin with the fallback size.
pub fn initial_placement(monitors: &[Monitor], req: &PlacementRequest) -> Rect {
    let Some(mon) = primary_monitor(monitors) else {
        let (width, height) = placement_size(None, req);
        return Rect::new(0, 0, width, height);
    };

    let (width, height) = placement_size(Some(mon), req);

    let (center_x, center_y) = mon.work_area.center();
    Rect {
        left: center_x - width / 2,
        top: center_y - height / 2,
        right: center_x + (width + 1) / 2,
        bottom: center_y + (height + 1) / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(desired: (i32, i32), min: (i32, i32), margin: i32) -> PlacementRequest {
        PlacementRequest {
            desired_width: desired.0,
            desired_height: desired.1,
            min_width: min.0,
            min_height: min.1,
            margin,
        }
    }

    #[test]
    fn size_without_monitor_passes_through() {
        let req = request((800, 600), (1024, 400), 20);
        assert_eq!(placement_size(None, &req), (1024, 600));
    }

    #[test]
    fn size_prefers_desired_within_margins() {
        let m = Monitor::new(
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 40, 1920, 1040),
            1.0,
        );
        let req = request((800, 600), (400, 300), 20);
        assert_eq!(placement_size(Some(&m), &req), (800, 600));
    }

    #[test]
    fn size_caps_at_work_area_minus_margins() {
        let m = Monitor::new(
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 40, 1920, 1040),
            1.0,
        );
        // Desired exceeds the available span: capped to 1920-40 x 1000-40
        let req = request((3000, 2000), (400, 300), 20);
        assert_eq!(placement_size(Some(&m), &req), (1880, 960));
    }

    #[test]
    fn size_minimum_may_eat_the_margin() {
        let m = Monitor::new(
            Rect::new(0, 0, 1000, 800),
            Rect::new(0, 0, 1000, 800),
            1.0,
        );
        // Minimum 980 doesn't fit inside 1000-2*20 but does inside the
        // work area itself
        let req = request((600, 400), (980, 790), 20);
        assert_eq!(placement_size(Some(&m), &req), (980, 790));

        // A minimum beyond the work area caps at the work area
        let req = request((600, 400), (1200, 900), 20);
        assert_eq!(placement_size(Some(&m), &req), (1000, 800));
    }

    #[test]
    fn size_converts_to_screen_units() {
        let m = Monitor::new(
            Rect::new(0, 0, 3840, 2160),
            Rect::new(0, 0, 3840, 2160),
            2.0,
        );
        let req = request((800, 600), (400, 300), 0);
        assert_eq!(placement_size(Some(&m), &req), (1600, 1200));
    }

    #[test]
    fn placement_centers_on_primary_work_area() {
        let monitors = vec![
            Monitor::new(
                Rect::new(0, 0, 1920, 1080),
                Rect::new(0, 40, 1920, 1040),
                1.0,
            ),
            Monitor::new(
                Rect::new(1920, 0, 3840, 1080),
                Rect::new(1920, 0, 3840, 1080),
                1.0,
            ),
        ];
        let req = request((800, 600), (400, 300), 20);
        let rect = initial_placement(&monitors, &req);
        // Work-area center is (960, 540)
        assert_eq!(rect, Rect::new(560, 240, 1360, 840));
    }

    #[test]
    fn placement_odd_remainder_goes_right_and_bottom() {
        let monitors = vec![Monitor::new(
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 0, 1920, 1080),
            1.0,
        )];
        let req = request((801, 601), (0, 0), 0);
        let rect = initial_placement(&monitors, &req);
        assert_eq!(rect.width(), 801);
        assert_eq!(rect.height(), 601);
        assert_eq!(rect, Rect::new(560, 240, 1361, 841));
    }

    #[test]
    fn placement_without_monitors_starts_at_origin() {
        let req = request((800, 600), (1000, 300), 20);
        assert_eq!(initial_placement(&[], &req), Rect::new(0, 0, 1000, 600));
    }
}
