//! Domain logic and core data structures
//!
//! This module contains pure geometry and monitor-selection logic that is
//! independent of Win32 APIs and platform-specific implementations.

pub mod convert;
pub mod core;
pub mod find;
pub mod fit;
pub mod monitor;
pub mod placement;
