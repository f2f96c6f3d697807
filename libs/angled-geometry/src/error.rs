//! # Error Types
//!
//! Errors raised while reading element attributes. Geometry itself is total
//! and never fails; only the string layer in front of it can.
//!
//! ## Error Policy
//!
//! - Strict parsers return these errors
//! - `AngledAttributes::set_attribute` applies the fail-soft defaults for
//!   malformed values and only surfaces [`AttributeError::UnknownAttribute`]

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while parsing attribute values.
///
/// ## Example
///
/// ```rust
/// use angled_geometry::distance::parse_number;
/// use angled_geometry::AttributeError;
///
/// match parse_number("angle-top", "steep") {
///     Err(AttributeError::InvalidNumber { attribute, .. }) => assert_eq!(attribute, "angle-top"),
///     other => unreachable!("unexpected {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttributeError {
    /// The value is not a number.
    #[error("attribute '{attribute}' is not a number: {value:?}")]
    InvalidNumber {
        /// Attribute name
        attribute: String,
        /// Raw value as received
        value: String,
    },

    /// The value parsed to NaN or an infinity.
    #[error("attribute '{attribute}' is not finite: {value:?}")]
    NonFiniteNumber {
        /// Attribute name
        attribute: String,
        /// Raw value as received
        value: String,
    },

    /// The attribute is not one the element observes.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for attribute parsing.
pub type AttributeResult<T> = Result<T, AttributeError>;

// =============================================================================
// TESTS
// =============================================================================
