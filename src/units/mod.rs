//! Dimension units for specifying window sizes
//!
//! Sizes can be given in absolute pixels, em-units relative to the system
//! font, or percentages of a work area. A [`Dimension`] is a stateless
//! value; it becomes pixels only against a [`ResolveContext`]. Resolution
//! truncates, never rounds, matching the integer-pixel contract of the
//! rest of the library.

use std::fmt;

mod parse;

pub use parse::{ParseDimensionError, parse_or};

/// The measurement unit of a [`Dimension`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Absolute pixels
    #[default]
    Pixel,
    /// Multiples of the system font em-height
    Em,
    /// Percentage of the work area
    Percent,
}

/// A size value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    /// Magnitude in `unit`s
    pub value: f64,
    /// How to interpret `value`
    pub unit: Unit,
}

impl Dimension {
    /// A pixel dimension
    pub fn pixels(v: i32) -> Self {
        Self {
            value: v as f64,
            unit: Unit::Pixel,
        }
    }

    /// An em-unit dimension
    pub fn ems(v: f64) -> Self {
        Self {
            value: v,
            unit: Unit::Em,
        }
    }

    /// A percentage dimension
    pub fn pct(v: f64) -> Self {
        Self {
            value: v,
            unit: Unit::Percent,
        }
    }

    /// Returns true if the dimension has no value
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Resolves the dimension as a width in pixels
    pub fn resolve_width(&self, ctx: &ResolveContext) -> i32 {
        match self.unit {
            Unit::Em => (self.value * ctx.em_height as f64) as i32,
            Unit::Percent => (self.value / 100.0 * ctx.work_area.width as f64) as i32,
            Unit::Pixel => self.value as i32,
        }
    }

    /// Resolves the dimension as a height in pixels
    pub fn resolve_height(&self, ctx: &ResolveContext) -> i32 {
        match self.unit {
            Unit::Em => (self.value * ctx.em_height as f64) as i32,
            Unit::Percent => (self.value / 100.0 * ctx.work_area.height as f64) as i32,
            Unit::Pixel => self.value as i32,
        }
    }
}

impl fmt::Display for Dimension {
    /// Formats as "1024", "60em", or "80%", dropping a whole value's fraction
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.value == (self.value as i64) as f64;
        match (self.unit, whole) {
            (Unit::Em, true) => write!(f, "{}em", self.value as i64),
            (Unit::Em, false) => write!(f, "{:.2}em", self.value),
            (Unit::Percent, true) => write!(f, "{}%", self.value as i64),
            (Unit::Percent, false) => write!(f, "{:.2}%", self.value),
            (Unit::Pixel, _) => write!(f, "{}", self.value as i64),
        }
    }
}

/// Work-area extent needed for percentage resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkAreaSize {
    /// Work-area width in pixels
    pub width: i32,
    /// Work-area height in pixels
    pub height: i32,
}

/// Everything needed to resolve dimensions to pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    /// System font em-height in pixels
    pub em_height: i32,
    /// Target monitor's work-area extent
    pub work_area: WorkAreaSize,
}

/// Resolves a width/height pair to pixels
pub fn resolve_size(width: &Dimension, height: &Dimension, ctx: &ResolveContext) -> (i32, i32) {
    (width.resolve_width(ctx), height.resolve_height(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ResolveContext {
        ResolveContext {
            em_height: 16,
            work_area: WorkAreaSize {
                width: 1920,
                height: 1040,
            },
        }
    }

    #[test]
    fn pixel_values_pass_through() {
        let ctx = ctx();
        assert_eq!(Dimension::pixels(1024).resolve_width(&ctx), 1024);
        assert_eq!(Dimension::pixels(768).resolve_height(&ctx), 768);
    }

    #[test]
    fn em_values_scale_by_font_height() {
        let ctx = ctx();
        assert_eq!(Dimension::ems(60.0).resolve_width(&ctx), 960);
        // 2.6 * 16 = 41.6, truncated
        assert_eq!(Dimension::ems(2.6).resolve_height(&ctx), 41);
    }

    #[test]
    fn percent_values_scale_by_work_area() {
        let ctx = ctx();
        assert_eq!(Dimension::pct(50.0).resolve_width(&ctx), 960);
        assert_eq!(Dimension::pct(50.0).resolve_height(&ctx), 520);
        // 33% of 1040 = 343.2, truncated
        assert_eq!(Dimension::pct(33.0).resolve_height(&ctx), 343);
    }

    #[test]
    fn resolution_truncates_not_rounds() {
        let ctx = ResolveContext {
            em_height: 15,
            work_area: WorkAreaSize {
                width: 1001,
                height: 999,
            },
        };
        // 1.9 * 15 = 28.5 -> 28
        assert_eq!(Dimension::ems(1.9).resolve_width(&ctx), 28);
        // 99.9% of 1001 = 999.999 -> 999
        assert_eq!(Dimension::pct(99.9).resolve_width(&ctx), 999);
    }

    #[test]
    fn resolve_size_pairs() {
        let ctx = ctx();
        let (w, h) = resolve_size(&Dimension::pct(100.0), &Dimension::ems(30.0), &ctx);
        assert_eq!((w, h), (1920, 480));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Dimension::pixels(1024).to_string(), "1024");
        assert_eq!(Dimension::ems(60.0).to_string(), "60em");
        assert_eq!(Dimension::ems(2.5).to_string(), "2.50em");
        assert_eq!(Dimension::pct(80.0).to_string(), "80%");
        assert_eq!(Dimension::pct(12.5).to_string(), "12.50%");
    }

    #[test]
    fn zero_detection() {
        assert!(Dimension::pixels(0).is_zero());
        assert!(Dimension::default().is_zero());
        assert!(!Dimension::ems(0.1).is_zero());
    }
}
