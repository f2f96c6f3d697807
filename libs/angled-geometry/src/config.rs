//! Engine-level configuration re-exported from the shared `config` crate.
//!
//! Geometry code takes an [`AngledConfig`] instead of reading constants
//! directly, so hosts can swap in a validated custom snapshot.
//!
//! ```
//! use angled_geometry::config::AngledConfig;
//! let cfg = AngledConfig::default();
//! assert!(cfg.is_mobile(500.0));
//! ```

pub use ::config::constants::{
    approx_zero, AngledConfig, ConfigError, DEFAULT_TRIANGLE_POSITION, MAX_ANGLE_DEGREES,
    MOBILE_BREAKPOINT_PX, MOBILE_TRIANGLE_POSITION, MOBILE_TRIANGLE_SIZE_PX,
};
