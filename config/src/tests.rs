//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// VIEWPORT TESTS
// =============================================================================

#[test]
fn test_breakpoint_is_inclusive() {
    let cfg = AngledConfig::default();
    assert!(cfg.is_mobile(MOBILE_BREAKPOINT_PX));
    assert!(!cfg.is_mobile(MOBILE_BREAKPOINT_PX + 0.5));
}

#[test]
fn test_zero_width_is_mobile() {
    assert!(AngledConfig::default().is_mobile(0.0));
}

#[test]
fn test_mobile_position_is_a_fraction() {
    assert!((0.0..=1.0).contains(&MOBILE_TRIANGLE_POSITION));
    assert!((0.0..=1.0).contains(&DEFAULT_TRIANGLE_POSITION));
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON_TOLERANCE > 0.0);
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON_TOLERANCE should be small for precision");
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON_TOLERANCE / 2.0;
    assert!(approx_zero(0.0));
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    let large = EPSILON_TOLERANCE * 2.0;
    assert!(!approx_zero(large));
    assert!(!approx_zero(-large));
    assert!(!approx_zero(1.0));
}

#[test]
fn test_max_angle_is_right_angle() {
    assert_eq!(MAX_ANGLE_DEGREES, 90.0);
}
