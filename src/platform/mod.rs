//! Platform-specific monitor and font-metric collaborators
//!
//! This module encapsulates every OS interaction behind two functions:
//! [`get_monitors`] returns an ordered enumeration snapshot, and
//! [`em_height`] reports the system UI font's line height. The domain
//! layer never calls the OS; it only consumes these snapshots.
//!
//! On non-Windows targets both collaborators degrade: enumeration yields
//! an empty list (the fit engine handles that via its no-monitors path)
//! and the em-height falls back to its documented default.

pub mod fonts;
#[cfg(windows)]
pub mod monitors;

use crate::domain::monitor::Monitor;
pub use fonts::em_height;

/// Returns all connected monitors in stable enumeration order
///
/// The order is implementation-defined but consistent between calls, which
/// the lookup tie-breaks rely on. Enumeration failures are logged and
/// surface as an empty list.
#[cfg(windows)]
pub fn get_monitors() -> Vec<Monitor> {
    match monitors::enumerate_monitors() {
        Ok(monitors) => monitors,
        Err(err) => {
            tracing::warn!(%err, "monitor enumeration failed");
            Vec::new()
        }
    }
}

/// Returns all connected monitors in stable enumeration order
#[cfg(not(windows))]
pub fn get_monitors() -> Vec<Monitor> {
    tracing::debug!("monitor enumeration is not supported on this platform");
    Vec::new()
}
