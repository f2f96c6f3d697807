//! # Triangle Geometry Solver
//!
//! A peak is the corner of a square of edge `e` rotated 45° and pushed through
//! the slanted edge. Its two shoulders meet the slant at different distances
//! from the anchor: the long shoulder on the downhill side, the short one
//! uphill. This module computes both shoulder offsets.
//!
//! ## Algorithm
//!
//! ```text
//! d      = sqrt(e² / 2)                         half diagonal of the square
//! v_long = tan(a) · d                           drop of the long shoulder
//! diag_l = d / cos(a)                           long shoulder along the slant
//! rest   = d - v_long
//! diag_s = rest / sin(135 - (90 - a)) · sin(45) short shoulder along the slant
//! k      = diag_s / diag_l
//! ```
//!
//! The short shoulder is the long one scaled by `k`.

use serde::Serialize;

use crate::config::approx_zero;

/// Shoulder offsets of a peak relative to its anchor on the slanted edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TriangleDimensions {
    /// Horizontal distance from the anchor to the long shoulder.
    pub horizontal_long: f64,
    /// Vertical drop from the anchor to the long shoulder.
    pub vertical_long: f64,
    /// Horizontal distance from the anchor to the short shoulder.
    pub horizontal_short: f64,
    /// Vertical rise from the anchor to the short shoulder.
    pub vertical_short: f64,
}

impl TriangleDimensions {
    /// Height of the apex above the anchor.
    pub fn apex_height(&self) -> f64 {
        self.horizontal_long - self.vertical_long
    }

    /// `true` when every offset is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Computes the peak dimensions for a slant of `angle_degrees` and a square
/// of edge `edge_length`.
///
/// Only the magnitude of the angle matters. Non-positive edges, and angles
/// where the long shoulder would vanish, produce all-zero dimensions.
///
/// ```
/// use angled_geometry::solve_triangle;
///
/// let flat = solve_triangle(0.0, 45.0);
/// let d = (45.0_f64 * 45.0 / 2.0).sqrt();
/// assert!((flat.horizontal_long - d).abs() < 1e-12);
/// assert_eq!(flat.vertical_long, 0.0);
/// assert!((flat.horizontal_short - d).abs() < 1e-9);
///
/// assert!(solve_triangle(30.0, 0.0).is_empty());
/// ```
pub fn solve_triangle(angle_degrees: f64, edge_length: f64) -> TriangleDimensions {
    if !edge_length.is_finite() || edge_length <= 0.0 || !angle_degrees.is_finite() {
        return TriangleDimensions::default();
    }

    let angle = angle_degrees.abs();
    let distance_to_corner = (edge_length * edge_length / 2.0).sqrt();
    let vertical_long = tan_deg(angle) * distance_to_corner;
    let diagonal_long = distance_to_corner / cos_deg(angle);

    if !diagonal_long.is_finite() || approx_zero(diagonal_long) {
        return TriangleDimensions::default();
    }

    let rest_height = distance_to_corner - vertical_long;
    let diagonal_short = rest_height / sin_deg(135.0 - (90.0 - angle)) * sin_deg(45.0);
    let factor = diagonal_short / diagonal_long;

    TriangleDimensions {
        horizontal_long: distance_to_corner,
        vertical_long,
        horizontal_short: distance_to_corner * factor,
        vertical_short: vertical_long * factor,
    }
}

pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub(crate) fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}
