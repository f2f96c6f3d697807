//! # Element Attributes
//!
//! Raw per-element state as read from HTML attributes, with the fail-soft
//! policy applied on every update:
//!
//! - angles and sizes reset to `0` when unparseable
//! - positions keep their last valid value when unparseable
//! - triangle toggles are on when present and not `"false"`
//!
//! ```
//! use angled_geometry::{AngledAttributes, Side};
//!
//! let attrs = AngledAttributes::from_pairs([
//!     ("angle-top", "-4"),
//!     ("triangle-top", ""),
//!     ("triangle-top-size", "45"),
//!     ("triangle-top-position", "120px"),
//! ])
//! .unwrap();
//!
//! let top = attrs.side(Side::Top);
//! assert_eq!(top.angle_degrees, -4.0);
//! assert!(top.wants_triangle());
//! ```

use serde::{Deserialize, Serialize};

use crate::distance::{parse_number, Distance};
use crate::error::{AttributeError, AttributeResult};
use crate::side::{Side, SideConfig};

/// Slant angle of the top edge, in signed degrees.
pub const ANGLE_TOP: &str = "angle-top";
/// Slant angle of the bottom edge, in signed degrees.
pub const ANGLE_BOTTOM: &str = "angle-bottom";
/// Presence toggles a peak on the top edge.
pub const TRIANGLE_TOP: &str = "triangle-top";
/// Presence toggles a peak on the bottom edge.
pub const TRIANGLE_BOTTOM: &str = "triangle-bottom";
/// Peak anchor on the top edge (`"<f>"` or `"<f>px"`).
pub const TRIANGLE_TOP_POSITION: &str = "triangle-top-position";
/// Peak anchor on the bottom edge (`"<f>"` or `"<f>px"`).
pub const TRIANGLE_BOTTOM_POSITION: &str = "triangle-bottom-position";
/// Peak square edge length on the top edge, in pixels.
pub const TRIANGLE_TOP_SIZE: &str = "triangle-top-size";
/// Peak square edge length on the bottom edge, in pixels.
pub const TRIANGLE_BOTTOM_SIZE: &str = "triangle-bottom-size";

/// Every attribute the element observes, in declaration order.
pub const ATTRIBUTE_NAMES: [&str; 8] = [
    ANGLE_TOP,
    ANGLE_BOTTOM,
    TRIANGLE_TOP,
    TRIANGLE_BOTTOM,
    TRIANGLE_TOP_POSITION,
    TRIANGLE_BOTTOM_POSITION,
    TRIANGLE_TOP_SIZE,
    TRIANGLE_BOTTOM_SIZE,
];

/// Attribute state of one angled element.
///
/// Sizes and angles are stored as given; clamping and viewport overrides are
/// the normalizer's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AngledAttributes {
    /// Value of `angle-top`.
    pub angle_top: f64,
    /// Value of `angle-bottom`.
    pub angle_bottom: f64,
    /// Value of `triangle-top`.
    pub triangle_top: bool,
    /// Value of `triangle-bottom`.
    pub triangle_bottom: bool,
    /// Value of `triangle-top-position`, if set.
    pub triangle_top_position: Option<Distance>,
    /// Value of `triangle-bottom-position`, if set.
    pub triangle_bottom_position: Option<Distance>,
    /// Value of `triangle-top-size`.
    pub triangle_top_size: f64,
    /// Value of `triangle-bottom-size`.
    pub triangle_bottom_size: f64,
}

impl AngledAttributes {
    /// Builds the state from `(name, value)` pairs as found on parsed HTML.
    ///
    /// # Errors
    /// Returns [`AttributeError::UnknownAttribute`] for names the element
    /// does not observe. Malformed values never fail.
    pub fn from_pairs<'a, I>(pairs: I) -> AttributeResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut attributes = Self::default();
        for (name, value) in pairs {
            attributes.set_attribute(name, Some(value))?;
        }
        Ok(attributes)
    }

    /// Applies an attribute change; `None` means the attribute was removed.
    ///
    /// # Errors
    /// Returns [`AttributeError::UnknownAttribute`] for names the element
    /// does not observe.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> AttributeResult<()> {
        match name {
            ANGLE_TOP => self.angle_top = number_or_zero(name, value),
            ANGLE_BOTTOM => self.angle_bottom = number_or_zero(name, value),
            TRIANGLE_TOP => self.triangle_top = is_toggled(value),
            TRIANGLE_BOTTOM => self.triangle_bottom = is_toggled(value),
            TRIANGLE_TOP_POSITION => {
                self.triangle_top_position = distance_or_previous(name, value, self.triangle_top_position)
            }
            TRIANGLE_BOTTOM_POSITION => {
                self.triangle_bottom_position =
                    distance_or_previous(name, value, self.triangle_bottom_position)
            }
            TRIANGLE_TOP_SIZE => self.triangle_top_size = number_or_zero(name, value),
            TRIANGLE_BOTTOM_SIZE => self.triangle_bottom_size = number_or_zero(name, value),
            _ => return Err(AttributeError::UnknownAttribute(name.to_string())),
        }
        Ok(())
    }

    /// Returns the configuration of one edge.
    pub fn side(&self, side: Side) -> SideConfig {
        match side {
            Side::Top => SideConfig {
                angle_degrees: self.angle_top,
                triangle_enabled: self.triangle_top,
                triangle_size_edge: self.triangle_top_size,
                triangle_position: self.triangle_top_position,
            },
            Side::Bottom => SideConfig {
                angle_degrees: self.angle_bottom,
                triangle_enabled: self.triangle_bottom,
                triangle_size_edge: self.triangle_bottom_size,
                triangle_position: self.triangle_bottom_position,
            },
        }
    }

    /// Serializes the configured values back to attributes.
    ///
    /// Zero angles and sizes, disabled toggles and unset positions are
    /// omitted, so the output re-parses to an equal state.
    ///
    /// ```
    /// use angled_geometry::AngledAttributes;
    /// let attrs = AngledAttributes::from_pairs([("angle-bottom", "3"), ("triangle-bottom", "")]).unwrap();
    /// assert_eq!(
    ///     attrs.to_attribute_pairs(),
    ///     vec![("angle-bottom", "3".to_string()), ("triangle-bottom", "true".to_string())]
    /// );
    /// ```
    pub fn to_attribute_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let numbers = [
            (ANGLE_TOP, self.angle_top),
            (ANGLE_BOTTOM, self.angle_bottom),
        ];
        for (name, value) in numbers {
            if value != 0.0 {
                pairs.push((name, value.to_string()));
            }
        }

        for (name, enabled) in [(TRIANGLE_TOP, self.triangle_top), (TRIANGLE_BOTTOM, self.triangle_bottom)] {
            if enabled {
                pairs.push((name, "true".to_string()));
            }
        }

        let positions = [
            (TRIANGLE_TOP_POSITION, self.triangle_top_position),
            (TRIANGLE_BOTTOM_POSITION, self.triangle_bottom_position),
        ];
        for (name, position) in positions {
            if let Some(position) = position {
                pairs.push((name, position.to_string()));
            }
        }

        let sizes = [
            (TRIANGLE_TOP_SIZE, self.triangle_top_size),
            (TRIANGLE_BOTTOM_SIZE, self.triangle_bottom_size),
        ];
        for (name, value) in sizes {
            if value != 0.0 {
                pairs.push((name, value.to_string()));
            }
        }

        pairs
    }
}

fn number_or_zero(name: &str, value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };
    parse_number(name, raw).unwrap_or_else(|err| {
        tracing::debug!(attribute = name, value = raw, %err, "falling back to 0");
        0.0
    })
}

fn is_toggled(value: Option<&str>) -> bool {
    value.is_some_and(|raw| raw != "false")
}

fn distance_or_previous(name: &str, value: Option<&str>, previous: Option<Distance>) -> Option<Distance> {
    let raw = value?;
    match Distance::parse(name, raw) {
        Ok(distance) => Some(distance),
        Err(err) => {
            tracing::debug!(attribute = name, value = raw, %err, "keeping previous position");
            previous
        }
    }
}

#[cfg(test)]
mod tests;
