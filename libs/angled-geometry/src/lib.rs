//! # Angled Geometry
//!
//! Clip-path geometry for section dividers whose top and bottom edges are
//! slanted, optionally with a triangular peak inserted into the slant.
//!
//! The crate is split along the pipeline:
//!
//! - [`attributes`]: raw attribute state with fail-soft parsing
//! - [`normalize`]: resolves a side's effective parameters for a viewport
//! - [`triangle`]: peak dimensions from an angle and an edge length
//! - [`path`]: per-side clip coordinates and the clearance they require
//! - [`layout`]: the full polygon plus the values a host applies to the DOM
//!
//! ```
//! use angled_geometry::{recompute, AngledAttributes, AngledConfig, ViewportContext};
//!
//! let config = AngledConfig::default();
//! let mut attrs = AngledAttributes::default();
//! attrs.set_attribute("angle-top", Some("30")).unwrap();
//!
//! let layout = recompute(&attrs, ViewportContext::from_width(1000.0, &config), &config);
//! assert!((layout.top.height_px - 577.350_269).abs() < 1e-6);
//! assert!(layout.clip_path.to_css().starts_with("polygon(0% 577.35"));
//! ```
//!
//! Every function here is pure: the same inputs always produce the same
//! output, and nothing is cached between calls.

pub mod attributes;
pub mod config;
pub mod distance;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod path;
pub mod side;
pub mod triangle;

pub use attributes::{AngledAttributes, ATTRIBUTE_NAMES};
pub use crate::config::{AngledConfig, ConfigError};
pub use distance::Distance;
pub use error::{AttributeError, AttributeResult};
pub use layout::{recompute, AngledLayout, ClipPath};
pub use normalize::{normalize, ResolvedSideParams};
pub use path::{build_side, ClipLength, ClipPoint, SideResult};
pub use side::{Side, SideConfig, ViewportContext};
pub use triangle::{solve_triangle, TriangleDimensions};
