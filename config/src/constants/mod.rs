//! Centralized configuration values shared by the angled-edge crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// VIEWPORT CONSTANTS
// =============================================================================

/// Inclusive upper bound, in CSS pixels, of the mobile layout.
///
/// Elements whose rendered width is at or below this value are laid out flat.
///
/// # Examples
/// ```
/// use config::constants::MOBILE_BREAKPOINT_PX;
/// assert_eq!(MOBILE_BREAKPOINT_PX, 767.0);
/// ```
pub const MOBILE_BREAKPOINT_PX: f64 = 767.0;

/// Triangle edge length forced on mobile layouts.
///
/// # Examples
/// ```
/// use config::constants::MOBILE_TRIANGLE_SIZE_PX;
/// assert!(MOBILE_TRIANGLE_SIZE_PX > 0.0);
/// ```
pub const MOBILE_TRIANGLE_SIZE_PX: f64 = 45.0;

/// Triangle anchor used on mobile when no position is configured (midpoint).
///
/// # Examples
/// ```
/// use config::constants::MOBILE_TRIANGLE_POSITION;
/// assert_eq!(MOBILE_TRIANGLE_POSITION, 0.5);
/// ```
pub const MOBILE_TRIANGLE_POSITION: f64 = 0.5;

/// Triangle anchor used on desktop when no position is configured.
pub const DEFAULT_TRIANGLE_POSITION: f64 = 0.0;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Largest slant magnitude accepted, in degrees.
///
/// Configured angles are clamped to `[-MAX_ANGLE_DEGREES, MAX_ANGLE_DEGREES]`.
///
/// # Examples
/// ```
/// use config::constants::MAX_ANGLE_DEGREES;
/// let requested: f64 = 120.0;
/// assert_eq!(requested.clamp(-MAX_ANGLE_DEGREES, MAX_ANGLE_DEGREES), 90.0);
/// ```
pub const MAX_ANGLE_DEGREES: f64 = 90.0;

/// Numerical tolerance below which a length counts as zero.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Checks if a value is approximately zero within [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_zero;
/// assert!(approx_zero(1.0e-12));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

// =============================================================================
// CONFIGURATION SNAPSHOT
// =============================================================================

/// Immutable snapshot of the engine configuration.
///
/// # Examples
/// ```
/// use config::constants::AngledConfig;
/// let config = AngledConfig::default();
/// assert!(config.collapse_flat_triangles);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngledConfig {
    /// Widths at or below this value use the mobile overrides.
    pub mobile_breakpoint_px: f64,
    /// Triangle edge length applied on mobile.
    pub mobile_triangle_size_px: f64,
    /// Triangle anchor fraction applied on mobile when none is configured.
    pub mobile_triangle_position: f64,
    /// Numeric tolerance for zero checks.
    pub tolerance: f64,
    /// When set, a side with a flat (0°) edge never emits triangle vertices.
    pub collapse_flat_triangles: bool,
}

impl AngledConfig {
    /// Builds a configuration enforcing strict validation of every value.
    ///
    /// # Examples
    /// ```
    /// use config::constants::AngledConfig;
    /// let cfg = AngledConfig::new(1023.0, 30.0, 0.25, 1.0e-9, false).expect("valid config");
    /// assert_eq!(cfg.mobile_breakpoint_px, 1023.0);
    /// assert!(AngledConfig::new(1023.0, 30.0, 1.5, 1.0e-9, false).is_err());
    /// ```
    pub fn new(
        mobile_breakpoint_px: f64,
        mobile_triangle_size_px: f64,
        mobile_triangle_position: f64,
        tolerance: f64,
        collapse_flat_triangles: bool,
    ) -> Result<Self, ConfigError> {
        if !mobile_breakpoint_px.is_finite() || mobile_breakpoint_px < 0.0 {
            return Err(ConfigError::InvalidBreakpoint(mobile_breakpoint_px));
        }
        if !mobile_triangle_size_px.is_finite() || mobile_triangle_size_px < 0.0 {
            return Err(ConfigError::InvalidTriangleSize(mobile_triangle_size_px));
        }
        if !(0.0..=1.0).contains(&mobile_triangle_position) {
            return Err(ConfigError::InvalidPosition(mobile_triangle_position));
        }
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            mobile_breakpoint_px,
            mobile_triangle_size_px,
            mobile_triangle_position,
            tolerance,
            collapse_flat_triangles,
        })
    }

    /// Returns `true` when `width_px` falls inside the mobile layout.
    #[inline]
    pub fn is_mobile(&self, width_px: f64) -> bool {
        width_px <= self.mobile_breakpoint_px
    }
}

impl Default for AngledConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            mobile_triangle_size_px: MOBILE_TRIANGLE_SIZE_PX,
            mobile_triangle_position: MOBILE_TRIANGLE_POSITION,
            tolerance: EPSILON_TOLERANCE,
            collapse_flat_triangles: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the breakpoint is negative or not finite.
    InvalidBreakpoint(f64),
    /// Raised when the mobile triangle size is negative or not finite.
    InvalidTriangleSize(f64),
    /// Raised when the mobile position lies outside `[0, 1]`.
    InvalidPosition(f64),
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBreakpoint(value) => {
                write!(f, "mobile_breakpoint_px must be a non-negative number: {value}")
            }
            ConfigError::InvalidTriangleSize(value) => {
                write!(f, "mobile_triangle_size_px must be a non-negative number: {value}")
            }
            ConfigError::InvalidPosition(value) => {
                write!(f, "mobile_triangle_position must lie in [0, 1]: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
