//! # Polygon Path Builder
//!
//! Turns resolved side parameters into the clip-path coordinates of one edge.
//!
//! Coordinates are first laid out in the top edge's frame: x grows to the
//! right from the left border, y grows downward from the top border. The
//! bottom edge is the same fragment with every coordinate complemented
//! (`calc(100% - v)`), which winds it from the bottom-right corner back to
//! the bottom-left one.

use std::fmt;

use glam::DVec2;
use serde::Serialize;

use crate::normalize::ResolvedSideParams;
use crate::side::Side;
use crate::triangle::{tan_deg, TriangleDimensions};

/// One axis of a clip-path coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ClipLength {
    /// Absolute pixels from the start of the axis.
    Px(f64),
    /// Percentage of the element's box.
    Percent(f64),
    /// Pixels measured back from the end of the axis: `calc(100% - vpx)`.
    FromEnd(f64),
}

impl ClipLength {
    /// Mirrors the length to the opposite end of its axis.
    pub fn complement(self) -> Self {
        match self {
            ClipLength::Px(px) => ClipLength::FromEnd(px),
            ClipLength::FromEnd(px) => ClipLength::Px(px),
            ClipLength::Percent(percent) => ClipLength::Percent(100.0 - percent),
        }
    }
}

impl fmt::Display for ClipLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ClipLength::Px(px) => write!(f, "{}px", css_number(px)),
            ClipLength::Percent(percent) => write!(f, "{}%", css_number(percent)),
            ClipLength::FromEnd(px) => write!(f, "calc(100% - {}px)", css_number(px)),
        }
    }
}

/// A clip-path vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipPoint {
    /// Horizontal component.
    pub x: ClipLength,
    /// Vertical component.
    pub y: ClipLength,
}

impl ClipPoint {
    /// A vertex at absolute pixel coordinates.
    pub fn px(point: DVec2) -> Self {
        Self {
            x: ClipLength::Px(point.x),
            y: ClipLength::Px(point.y),
        }
    }

    /// Mirrors both components.
    pub fn complement(self) -> Self {
        Self {
            x: self.x.complement(),
            y: self.y.complement(),
        }
    }
}

impl fmt::Display for ClipPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Clip coordinates and clearance of one edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideResult {
    /// Edge these values belong to.
    pub side: Side,
    /// Vertices in winding order, starting and ending on the side borders.
    pub path: Vec<ClipPoint>,
    /// Vertical drop of the slant across the full width.
    pub height_px: f64,
    /// Extra clearance so a peak does not poke out of the element box.
    pub padding_px: f64,
}

impl SideResult {
    /// Total inset of the edge: the padding the element needs, and the margin
    /// for children that must sit clear of the slant.
    pub fn inset_px(&self) -> f64 {
        self.height_px + self.padding_px
    }

    /// `true` when the edge carries peak vertices.
    pub fn has_triangle(&self) -> bool {
        self.path.len() > 2
    }
}

/// Builds the clip coordinates of one edge.
///
/// A peak is inserted only when `resolved.triangle_active` is set and
/// `triangle` carries non-zero dimensions; otherwise the edge is a straight
/// line between the two side borders.
///
/// ```
/// use angled_geometry::{build_side, ResolvedSideParams, Side};
///
/// let resolved = ResolvedSideParams {
///     side: Side::Top,
///     angle_degrees: 30.0,
///     triangle_size_edge: 0.0,
///     position: 0.0,
///     triangle_active: false,
/// };
/// let result = build_side(&resolved, None, 1000.0);
///
/// assert_eq!(result.path.len(), 2);
/// assert!((result.height_px - 577.350_269).abs() < 1e-6);
/// assert_eq!(result.path[1].to_string(), "100% 0px");
/// ```
pub fn build_side(
    resolved: &ResolvedSideParams,
    triangle: Option<&TriangleDimensions>,
    width_px: f64,
) -> SideResult {
    let normal = resolved.is_normal();
    let height_px = tan_deg(resolved.abs_angle()) * width_px;

    let peak = triangle
        .filter(|dims| resolved.triangle_active && !dims.is_empty())
        .map(|dims| peak_vertices(dims, resolved.position, normal, height_px, width_px));

    let (padding_px, peak_points) = match peak {
        Some((padding_px, vertices)) => (padding_px, vertices.map(ClipPoint::px).to_vec()),
        None => (0.0, Vec::new()),
    };

    let (left_y, right_y) = if normal {
        (height_px + padding_px, padding_px)
    } else {
        (padding_px, height_px + padding_px)
    };

    let mut path = Vec::with_capacity(peak_points.len() + 2);
    path.push(ClipPoint {
        x: ClipLength::Percent(0.0),
        y: ClipLength::Px(left_y),
    });
    path.extend(peak_points);
    path.push(ClipPoint {
        x: ClipLength::Percent(100.0),
        y: ClipLength::Px(right_y),
    });

    if resolved.side == Side::Bottom {
        for point in &mut path {
            *point = point.complement();
        }
    }

    SideResult {
        side: resolved.side,
        path,
        height_px,
        padding_px,
    }
}

/// Returns the clearance and the three peak vertices, left to right.
fn peak_vertices(
    dims: &TriangleDimensions,
    position: f64,
    normal: bool,
    height_px: f64,
    width_px: f64,
) -> (f64, [DVec2; 3]) {
    let along = if normal { position } else { 1.0 - position };
    let anchor = DVec2::new(width_px * position, height_px - height_px * along);

    let apex_y = anchor.y - dims.apex_height();
    let padding_px = (-apex_y).max(0.0);

    // Offsets for a slant that drops towards the left; the long shoulder is
    // on the downhill side.
    let mut offsets = [
        DVec2::new(-dims.horizontal_long, dims.vertical_long),
        DVec2::new(0.0, -dims.apex_height()),
        DVec2::new(dims.horizontal_short, -dims.vertical_short),
    ];
    if !normal {
        offsets = offsets.map(|offset| offset * DVec2::new(-1.0, 1.0));
        offsets.reverse();
    }

    let shifted = anchor + DVec2::new(0.0, padding_px);
    (padding_px, offsets.map(|offset| shifted + offset))
}

/// Renders `-0` as `0`.
fn css_number(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
