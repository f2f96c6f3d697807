//! # Layout Composition
//!
//! Runs the normalizer, triangle solver and path builder for both edges and
//! assembles what a host element applies: the clip-path polygon and the
//! per-side insets.

use std::fmt;

use serde::Serialize;

use crate::attributes::AngledAttributes;
use crate::config::AngledConfig;
use crate::normalize::normalize;
use crate::path::{build_side, ClipPoint, SideResult};
use crate::side::{Side, ViewportContext};
use crate::triangle::solve_triangle;

/// Custom property carrying the top inset.
pub const PADDING_TOP_PROPERTY: &str = "--angled-padding-top";
/// Custom property carrying the bottom inset.
pub const PADDING_BOTTOM_PROPERTY: &str = "--angled-padding-bottom";

/// A closed clip-path polygon: top edge left to right, then bottom edge
/// right to left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipPath {
    /// Vertices in winding order.
    pub points: Vec<ClipPoint>,
}

impl ClipPath {
    /// Renders the CSS `polygon()` value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClipPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("polygon(")?;
        for (index, point) in self.points.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str(")")
    }
}

/// Result of one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngledLayout {
    /// Viewport the layout was computed for.
    pub viewport: ViewportContext,
    /// Top edge coordinates and clearance.
    pub top: SideResult,
    /// Bottom edge coordinates and clearance.
    pub bottom: SideResult,
    /// Full polygon.
    pub clip_path: ClipPath,
}

impl AngledLayout {
    /// Returns the result of one edge.
    pub fn side(&self, side: Side) -> &SideResult {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    /// Element padding for the top edge, in pixels.
    pub fn padding_top_px(&self) -> f64 {
        self.top.inset_px()
    }

    /// Element padding for the bottom edge, in pixels.
    pub fn padding_bottom_px(&self) -> f64 {
        self.bottom.inset_px()
    }

    /// Custom properties to set on the element.
    ///
    /// Children that must sit clear of the slant use the same values as
    /// their top and bottom margins.
    pub fn custom_properties(&self) -> [(&'static str, String); 2] {
        [
            (PADDING_TOP_PROPERTY, format!("{}px", self.padding_top_px())),
            (PADDING_BOTTOM_PROPERTY, format!("{}px", self.padding_bottom_px())),
        ]
    }
}

/// Computes the clip path and insets of an element.
///
/// ```
/// use angled_geometry::{recompute, AngledAttributes, AngledConfig, ViewportContext};
///
/// let config = AngledConfig::default();
/// let layout = recompute(
///     &AngledAttributes::default(),
///     ViewportContext::from_width(1200.0, &config),
///     &config,
/// );
/// assert_eq!(
///     layout.clip_path.to_css(),
///     "polygon(0% 0px, 100% 0px, 100% calc(100% - 0px), 0% calc(100% - 0px))"
/// );
/// ```
pub fn recompute(attributes: &AngledAttributes, viewport: ViewportContext, config: &AngledConfig) -> AngledLayout {
    let [top, bottom] = Side::ALL.map(|side| {
        let resolved = normalize(side, &attributes.side(side), &viewport, config);
        let triangle = resolved
            .triangle_active
            .then(|| solve_triangle(resolved.angle_degrees, resolved.triangle_size_edge));
        build_side(&resolved, triangle.as_ref(), viewport.element_width_px)
    });

    let points = top.path.iter().chain(&bottom.path).copied().collect();

    tracing::trace!(
        width = viewport.element_width_px,
        mobile = viewport.is_mobile,
        top_inset = top.inset_px(),
        bottom_inset = bottom.inset_px(),
        "recomputed angled layout"
    );

    AngledLayout {
        viewport,
        top,
        bottom,
        clip_path: ClipPath { points },
    }
}
