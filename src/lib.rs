//! Multi-monitor geometry for desktop windows
//!
//! This library answers three related questions about a multi-monitor
//! desktop: which monitor a point or rectangle belongs to, how to convert
//! rectangles between a monitor's physical (device-pixel) and logical
//! (DPI-independent) coordinate spaces, and how to reposition a window
//! rectangle so it lies entirely within a chosen monitor's usable area.
//!
//! The decision logic lives in [`domain`]: monitor lookup with
//! earliest-wins tie-breaks, and the fit engine with its tiered
//! minimum-size fallback. [`platform`] supplies enumeration snapshots and
//! system font metrics; [`units`] resolves pixel/em/percent dimensions.
//!
//! ```
//! use monfit::{FitMode, Monitor, Rect, fit_to_nearest_monitor};
//!
//! let monitors = [Monitor::new(
//!     Rect::new(0, 0, 1920, 1080),
//!     Rect::new(0, 40, 1920, 1040),
//!     1.0,
//! )];
//! let window = Rect::new(1800, 100, 2200, 400);
//! let placed = fit_to_nearest_monitor(&monitors, FitMode::WorkArea, window, 0.0, 0, 0)
//!     .unwrap_or_else(|err| err.placement);
//! assert_eq!(placed.rect, Rect::new(1520, 100, 1920, 400));
//! ```

pub mod domain;
pub mod platform;
pub mod units;

pub use domain::convert::{logical_to_physical, logical_to_screen, physical_to_logical, screen_to_logical};
pub use domain::core::{Rect, fit_axis};
pub use domain::find::{
    DefaultMonitorMode, monitor_at_logical_point, monitor_at_physical_point,
    monitor_from_logical_point, monitor_from_logical_rect, primary_monitor,
};
pub use domain::fit::{
    FitError, FitErrorKind, Placement, fit_to_monitor, fit_to_monitor_logical,
    fit_to_nearest_monitor, fit_to_nearest_monitor_logical,
};
pub use domain::monitor::{FitMode, Monitor};
pub use domain::placement::{PlacementRequest, initial_placement, placement_size};
pub use platform::{em_height, get_monitors};
pub use units::{Dimension, ResolveContext, Unit, WorkAreaSize, resolve_size};
