//! # Parameter Normalizer
//!
//! Resolves a side's raw configuration into the numbers the path builder
//! consumes, applying the mobile overrides and interpreting the anchor unit
//! exactly once.

use serde::Serialize;

use crate::config::{AngledConfig, DEFAULT_TRIANGLE_POSITION, MAX_ANGLE_DEGREES};
use crate::side::{Side, SideConfig, ViewportContext};

/// Effective parameters of one side for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedSideParams {
    /// Side these parameters belong to.
    pub side: Side,
    /// Signed slant angle in degrees, clamped to `[-90, 90]`.
    pub angle_degrees: f64,
    /// Edge length of the peak square.
    pub triangle_size_edge: f64,
    /// Peak anchor as a fraction of the width, measured in the side's own
    /// winding direction (mirrored for the bottom side).
    pub position: f64,
    /// Whether a peak should be drawn on this side.
    pub triangle_active: bool,
}

impl ResolvedSideParams {
    /// `true` when the slant rises from left to right (non-negative angle).
    pub fn is_normal(&self) -> bool {
        self.angle_degrees >= 0.0
    }

    /// Slant magnitude in degrees.
    pub fn abs_angle(&self) -> f64 {
        self.angle_degrees.abs()
    }
}

/// Resolves `side_config` for `viewport`.
///
/// On mobile the angle is forced to `0` and the peak size to the configured
/// mobile size; an explicit anchor is still honored, otherwise the peak sits
/// at the mobile default position.
///
/// A peak is active when the side enables it with a positive size. With
/// `collapse_flat_triangles` set, a flat edge never carries a peak.
///
/// ```
/// use angled_geometry::{normalize, AngledConfig, Distance, Side, SideConfig, ViewportContext};
///
/// let cfg = AngledConfig::default();
/// let side = SideConfig {
///     angle_degrees: 10.0,
///     triangle_enabled: true,
///     triangle_size_edge: 60.0,
///     triangle_position: Some(Distance::Pixels(250.0)),
/// };
///
/// let top = normalize(Side::Top, &side, &ViewportContext::from_width(1000.0, &cfg), &cfg);
/// assert_eq!(top.position, 0.25);
///
/// let bottom = normalize(Side::Bottom, &side, &ViewportContext::from_width(1000.0, &cfg), &cfg);
/// assert_eq!(bottom.position, 0.75);
/// ```
pub fn normalize(
    side: Side,
    side_config: &SideConfig,
    viewport: &ViewportContext,
    config: &AngledConfig,
) -> ResolvedSideParams {
    let (angle_degrees, triangle_size_edge, fallback_position) = if viewport.is_mobile {
        (0.0, config.mobile_triangle_size_px, config.mobile_triangle_position)
    } else {
        (
            sanitize_angle(side_config.angle_degrees),
            side_config.triangle_size_edge,
            DEFAULT_TRIANGLE_POSITION,
        )
    };

    let position = side_config
        .triangle_position
        .map(|distance| distance.to_fraction(viewport.element_width_px))
        .filter(|fraction| fraction.is_finite())
        .unwrap_or(fallback_position);

    let position = match side {
        Side::Top => position,
        Side::Bottom => 1.0 - position,
    };

    let flat = angle_degrees.abs() < config.tolerance;

    ResolvedSideParams {
        side,
        angle_degrees,
        triangle_size_edge,
        position,
        triangle_active: side_config.wants_triangle() && !(flat && config.collapse_flat_triangles),
    }
}

fn sanitize_angle(angle_degrees: f64) -> f64 {
    if angle_degrees.is_finite() {
        angle_degrees.clamp(-MAX_ANGLE_DEGREES, MAX_ANGLE_DEGREES)
    } else {
        0.0
    }
}
