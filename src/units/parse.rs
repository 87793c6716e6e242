//! Parsing of dimension strings like "1024", "1024px", "60em", or "80%"

use std::str::FromStr;

use thiserror::Error;

use super::{Dimension, Unit};

/// A dimension string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid dimension {0:?}, expected a number with an optional px/em/% suffix")]
pub struct ParseDimensionError(pub String);

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDimensionError(s.to_string()));
        }

        let (number, unit) = if let Some(v) = s.strip_suffix("em") {
            (v, Unit::Em)
        } else if let Some(v) = s.strip_suffix('%') {
            (v, Unit::Percent)
        } else if let Some(v) = s.strip_suffix("px") {
            (v, Unit::Pixel)
        } else {
            (s, Unit::Pixel)
        };

        number
            .parse::<f64>()
            .map(|value| Dimension { value, unit })
            .map_err(|_| ParseDimensionError(s.to_string()))
    }
}

/// Parses a dimension string, substituting `default` for empty or
/// malformed input
pub fn parse_or(s: &str, default: Dimension) -> Dimension {
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_unit() {
        let cases = [
            ("1024", Dimension::pixels(1024)),
            ("1024px", Dimension::pixels(1024)),
            ("60em", Dimension::ems(60.0)),
            ("2.5em", Dimension::ems(2.5)),
            ("80%", Dimension::pct(80.0)),
            ("12.5%", Dimension::pct(12.5)),
            ("  640  ", Dimension::pixels(640)),
        ];
        for (input, want) in cases {
            assert_eq!(input.parse::<Dimension>().unwrap(), want, "input {input:?}");
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "em", "%", "12pt", "abc", "12..5em"] {
            assert!(input.parse::<Dimension>().is_err(), "input {input:?}");
        }
    }

    #[test]
    fn parse_or_falls_back() {
        let default = Dimension::pixels(800);
        assert_eq!(parse_or("", default), default);
        assert_eq!(parse_or("nonsense", default), default);
        assert_eq!(parse_or("75%", default), Dimension::pct(75.0));
    }
}
