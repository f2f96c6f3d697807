//! Per-side configuration and the viewport it is resolved against.

use serde::{Deserialize, Serialize};

use crate::config::AngledConfig;
use crate::distance::Distance;

/// Which edge of the element a computation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The top edge, wound left to right.
    Top,
    /// The bottom edge, wound right to left.
    Bottom,
}

impl Side {
    /// Both sides in winding order.
    pub const ALL: [Side; 2] = [Side::Top, Side::Bottom];

    /// Lowercase name used in attribute and custom property names.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// Raw configuration of one edge.
///
/// `triangle_size_edge` is the edge length of the square whose corner forms
/// the peak. A peak is only drawn when `triangle_enabled` is set and the size
/// is positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SideConfig {
    /// Signed slant angle in degrees; the sign selects the slant direction.
    pub angle_degrees: f64,
    /// Whether a peak should be inserted into the edge.
    pub triangle_enabled: bool,
    /// Edge length of the square whose diagonal defines the peak.
    pub triangle_size_edge: f64,
    /// Horizontal anchor of the peak; `None` selects the viewport default.
    pub triangle_position: Option<Distance>,
}

impl SideConfig {
    /// Returns `true` when this side asks for a peak that can be drawn.
    pub fn wants_triangle(&self) -> bool {
        self.triangle_enabled && self.triangle_size_edge > 0.0
    }
}

/// Rendered width of the host element and the layout class it falls into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportContext {
    /// Current rendered width in CSS pixels.
    pub element_width_px: f64,
    /// Whether the mobile overrides apply.
    pub is_mobile: bool,
}

impl ViewportContext {
    /// Derives the context for `width_px` using the configured breakpoint.
    ///
    /// Negative or non-finite widths are treated as `0`.
    ///
    /// ```
    /// use angled_geometry::{AngledConfig, ViewportContext};
    /// let cfg = AngledConfig::default();
    /// assert!(ViewportContext::from_width(767.0, &cfg).is_mobile);
    /// assert!(!ViewportContext::from_width(1280.0, &cfg).is_mobile);
    /// ```
    pub fn from_width(width_px: f64, config: &AngledConfig) -> Self {
        let width_px = if width_px.is_finite() { width_px.max(0.0) } else { 0.0 };
        Self {
            element_width_px: width_px,
            is_mobile: config.is_mobile(width_px),
        }
    }
}
