//! Window fitting engine
//!
//! Repositions and resizes window rectangles so they lie entirely within a
//! monitor's bounds or work area. Two API families exist:
//!
//! - the screen-unit functions ([`fit_to_monitor`],
//!   [`fit_to_nearest_monitor`]) work in physical pixels and understand a
//!   "designed-for" window scale, rescaling the window to the target
//!   monitor's scale before clamping;
//! - the `_logical` functions work purely in logical units and treat a
//!   requested minimum size as a hard requirement, falling back to the
//!   largest monitor's full region when nothing can satisfy it.
//!
//! Failures are never fatal: every error carries a best-effort placement
//! so callers may proceed degraded.

use thiserror::Error;
use tracing::debug;

use crate::domain::core::{Rect, fit_axis};
use crate::domain::monitor::{FitMode, Monitor};

/// A fitted rectangle plus the scale of the monitor it was fitted to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The repositioned window rectangle
    pub rect: Rect,
    /// Scale factor of the chosen monitor (fallback value on errors)
    pub scale: f64,
}

/// Why a fit request could not be honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitErrorKind {
    /// A window or monitor region has zero or negative width or height
    #[error("invalid dimensions: non-positive width or height")]
    InvalidDimensions,
    /// The monitor list was empty or every entry failed validation
    #[error("no monitors available")]
    NoMonitors,
}

/// Fit failure carrying a best-effort placement
///
/// The placement holds the unmodified window (or the closest usable rect)
/// and a fallback scale, so a degraded caller can still position something.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{kind}")]
pub struct FitError {
    /// What went wrong
    pub kind: FitErrorKind,
    /// Rect and scale the caller may still use
    pub placement: Placement,
}

impl FitError {
    fn new(kind: FitErrorKind, rect: Rect, scale: f64) -> Self {
        Self {
            kind,
            placement: Placement { rect, scale },
        }
    }
}

/// Scale reported when no monitor is available to supply one
fn fallback_scale(window_scale: f64) -> f64 {
    if window_scale > 0.0 { window_scale } else { 1.0 }
}

/// Fits a window to a specific monitor, in screen units
///
/// `window_scale` declares what scale factor the window was designed for:
/// 0.0 keeps the window as given, any positive value rescales it by
/// `monitor.scale / window_scale` about its top-left corner before
/// clamping. The returned placement reports the monitor's scale.
///
/// With no monitor (`None`) the window comes back unchanged with the
/// fallback scale (`window_scale` if nonzero, else 1.0) and a
/// [`FitErrorKind::NoMonitors`] error.
pub fn fit_to_monitor(
    monitor: Option<&Monitor>,
    mode: FitMode,
    window: Rect,
    window_scale: f64,
) -> Result<Placement, FitError> {
    if !window.is_valid() {
        return Err(FitError::new(
            FitErrorKind::InvalidDimensions,
            window,
            window_scale,
        ));
    }
    let Some(m) = monitor else {
        return Err(FitError::new(
            FitErrorKind::NoMonitors,
            window,
            fallback_scale(window_scale),
        ));
    };
    if !m.is_valid() {
        return Err(FitError::new(
            FitErrorKind::InvalidDimensions,
            window,
            window_scale,
        ));
    }

    let bounds = m.region(mode);

    // Rescale about the top-left corner; the position is left alone
    let target = if window_scale == 0.0 {
        window
    } else {
        let factor = m.scale / window_scale;
        let scaled_width = (window.width() as f64 * factor) as i32;
        let scaled_height = (window.height() as f64 * factor) as i32;
        Rect {
            left: window.left,
            top: window.top,
            right: window.left + scaled_width,
            bottom: window.top + scaled_height,
        }
    };

    let (left, width) = fit_axis(target.left, target.width(), bounds.left, bounds.right);
    let (top, height) = fit_axis(target.top, target.height(), bounds.top, bounds.bottom);

    Ok(Placement {
        rect: Rect::new(left, top, left + width, top + height),
        scale: m.scale,
    })
}

/// Fits a window to the most appropriate of several monitors, in screen units
///
/// `min_width`/`min_height` (logical units) express a preferred minimum
/// window size. Candidate monitors are filtered by it, with two relaxation
/// tiers: in work-area mode monitors that only satisfy the minimum within
/// their total bounds are admitted next, and when nothing qualifies at all
/// the minimum is ignored entirely; it is a soft preference, never a reason
/// to fail while a monitor exists. Candidates are ranked by overlap with the
/// window, then by edge distance when nothing overlaps; ties keep the
/// earliest monitor.
pub fn fit_to_nearest_monitor(
    monitors: &[Monitor],
    mode: FitMode,
    window: Rect,
    window_scale: f64,
    min_width: i32,
    min_height: i32,
) -> Result<Placement, FitError> {
    if !window.is_valid() {
        return Err(FitError::new(
            FitErrorKind::InvalidDimensions,
            window,
            window_scale,
        ));
    }

    let valid: Vec<&Monitor> = monitors.iter().filter(|m| m.is_valid()).collect();
    if valid.is_empty() {
        return Err(FitError::new(
            FitErrorKind::NoMonitors,
            window,
            fallback_scale(window_scale),
        ));
    }

    let candidates = if min_width <= 0 || min_height <= 0 {
        valid.clone()
    } else {
        let mut suitable: Vec<&Monitor> = valid
            .iter()
            .copied()
            .filter(|m| {
                let factor = if window_scale > 0.0 {
                    m.scale / window_scale
                } else {
                    1.0
                };
                region_fits_min(&m.region(mode), min_width, min_height, factor)
            })
            .collect();

        if suitable.is_empty() && mode == FitMode::WorkArea {
            // Taskbar-constrained monitors shouldn't be excluded outright;
            // retry the filter against total bounds
            debug!(min_width, min_height, "no work area fits minimum, retrying against bounds");
            suitable = valid
                .iter()
                .copied()
                .filter(|m| region_fits_min(&m.bounds, min_width, min_height, m.scale))
                .collect();
        }
        if suitable.is_empty() {
            debug!(min_width, min_height, "no monitor fits minimum, ignoring constraint");
            suitable = valid.clone();
        }
        suitable
    };

    let best = select_monitor(&candidates, &window, |m| m.bounds);
    fit_to_monitor(best, mode, window, window_scale)
}

/// Fits a window to a specific monitor, in logical units
///
/// Operates on the monitor's derived logical rects. The target region is
/// revalidated after derivation: an extreme scale can collapse a thin work
/// area to nothing, which surfaces as a dimensions error.
pub fn fit_to_monitor_logical(
    m: &Monitor,
    mode: FitMode,
    window: Rect,
) -> Result<Rect, FitError> {
    if !window.is_valid() {
        return Err(FitError::new(FitErrorKind::InvalidDimensions, window, 1.0));
    }
    if !m.is_valid() {
        return Err(FitError::new(FitErrorKind::InvalidDimensions, window, 1.0));
    }

    let bounds = m.logical_region(mode);
    if !bounds.is_valid() {
        return Err(FitError::new(FitErrorKind::InvalidDimensions, window, 1.0));
    }

    let (left, width) = fit_axis(window.left, window.width(), bounds.left, bounds.right);
    let (top, height) = fit_axis(window.top, window.height(), bounds.top, bounds.bottom);

    Ok(Rect::new(left, top, left + width, top + height))
}

/// Fits a window to the most appropriate monitor, in logical units
///
/// Unlike the screen-unit variant, a requested minimum size is a hard
/// requirement here: when neither the work areas nor the total bounds of
/// any monitor can accommodate it, the result is the largest monitor's
/// full region rather than a best-effort clamp of the window.
pub fn fit_to_nearest_monitor_logical(
    monitors: &[Monitor],
    mode: FitMode,
    window: Rect,
    min_width: i32,
    min_height: i32,
) -> Result<Rect, FitError> {
    if !window.is_valid() {
        return Err(FitError::new(FitErrorKind::InvalidDimensions, window, 1.0));
    }

    let valid: Vec<&Monitor> = monitors.iter().filter(|m| m.is_valid()).collect();
    if valid.is_empty() {
        return Err(FitError::new(FitErrorKind::NoMonitors, window, 1.0));
    }

    let candidates = if min_width <= 0 || min_height <= 0 {
        valid.clone()
    } else {
        let mut suitable: Vec<&Monitor> = valid
            .iter()
            .copied()
            .filter(|m| region_fits_min(&m.logical_region(mode), min_width, min_height, 1.0))
            .collect();

        if suitable.is_empty() && mode == FitMode::WorkArea {
            debug!(min_width, min_height, "no work area fits minimum, retrying against bounds");
            suitable = valid
                .iter()
                .copied()
                .filter(|m| region_fits_min(&m.logical_bounds(), min_width, min_height, 1.0))
                .collect();
        }
        if suitable.is_empty() {
            // Nothing can honor the minimum: hand back the largest
            // monitor's whole region, ties keeping the earliest
            debug!(min_width, min_height, "no monitor fits minimum, using largest monitor region");
            let mut largest = valid[0];
            let mut max_area = largest.logical_bounds().area();
            for &m in &valid[1..] {
                let area = m.logical_bounds().area();
                if area > max_area {
                    max_area = area;
                    largest = m;
                }
            }
            return Ok(largest.logical_region(mode));
        }
        suitable
    };

    let best = select_monitor(&candidates, &window, |m| m.logical_bounds());
    match best {
        Some(m) => fit_to_monitor_logical(m, mode, window),
        None => Err(FitError::new(FitErrorKind::NoMonitors, window, 1.0)),
    }
}

/// Returns true if `region` spans at least the minimum size in screen units
fn region_fits_min(region: &Rect, min_width: i32, min_height: i32, factor: f64) -> bool {
    let screen_min_width = (min_width as f64 * factor) as i32;
    let screen_min_height = (min_height as f64 * factor) as i32;
    region.width() >= screen_min_width && region.height() >= screen_min_height
}

/// Picks the candidate overlapping the window the most, falling back to
/// the smallest edge distance; strict comparisons keep the earliest
/// candidate on ties
fn select_monitor<'a, F>(
    candidates: &[&'a Monitor],
    window: &Rect,
    bounds_of: F,
) -> Option<&'a Monitor>
where
    F: Fn(&Monitor) -> Rect,
{
    let mut best: Option<&Monitor> = None;
    let mut max_overlap = 0;
    for &m in candidates {
        let overlap = window.overlap_area(&bounds_of(m));
        if overlap > max_overlap {
            max_overlap = overlap;
            best = Some(m);
        }
    }

    if best.is_none() {
        let mut min_distance = i32::MAX;
        for &m in candidates {
            let distance = window.edge_distance(&bounds_of(m));
            if distance < min_distance {
                min_distance = distance;
                best = Some(m);
            }
        }
    }

    best.or_else(|| candidates.first().copied())
}
