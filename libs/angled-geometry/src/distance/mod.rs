//! Numeric attribute parsing and the px/fraction distance type.
//!
//! Positions arrive either as a bare fraction of the element width (`"0.25"`)
//! or as an absolute offset (`"120px"`). [`Distance`] keeps the two apart so
//! the unit is interpreted exactly once, in the normalizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AttributeError, AttributeResult};

const PX_SUFFIX: &str = "px";

/// A horizontal distance along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Distance {
    /// Absolute offset from the edge's start, in CSS pixels.
    Pixels(f64),
    /// Fraction of the element width, nominally in `[0, 1]`.
    Fraction(f64),
}

impl Distance {
    /// Parses a position attribute value.
    ///
    /// ```
    /// use angled_geometry::Distance;
    /// assert_eq!(Distance::parse("triangle-top-position", "120px").unwrap(), Distance::Pixels(120.0));
    /// assert_eq!(Distance::parse("triangle-top-position", " .5 ").unwrap(), Distance::Fraction(0.5));
    /// assert!(Distance::parse("triangle-top-position", "left").is_err());
    /// ```
    pub fn parse(attribute: &str, raw: &str) -> AttributeResult<Self> {
        let trimmed = raw.trim();
        match trimmed.strip_suffix(PX_SUFFIX) {
            Some(number) => parse_number(attribute, number).map(Distance::Pixels),
            None => parse_number(attribute, trimmed).map(Distance::Fraction),
        }
    }

    /// Converts the distance to a fraction of `width_px`.
    ///
    /// Pixel offsets against a zero width resolve to `0`.
    pub fn to_fraction(self, width_px: f64) -> f64 {
        match self {
            Distance::Fraction(fraction) => fraction,
            Distance::Pixels(_) if width_px <= 0.0 => 0.0,
            Distance::Pixels(px) => px / width_px,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Pixels(px) => write!(f, "{px}{PX_SUFFIX}"),
            Distance::Fraction(fraction) => write!(f, "{fraction}"),
        }
    }
}

/// Parses a finite floating point attribute value.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// decimal or exponent literal is rejected, as are `NaN` and infinities.
pub fn parse_number(attribute: &str, raw: &str) -> AttributeResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AttributeError::InvalidNumber {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        })?;

    if !value.is_finite() {
        return Err(AttributeError::NonFiniteNumber {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests;
