//! # Config Crate
//!
//! Centralized configuration for the angled-edge geometry engine.
//! Breakpoints, fixed mobile overrides and numeric tolerances live here so the
//! geometry crates never carry magic numbers of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{AngledConfig, MOBILE_BREAKPOINT_PX};
//!
//! let cfg = AngledConfig::default();
//! assert_eq!(cfg.mobile_breakpoint_px, MOBILE_BREAKPOINT_PX);
//!
//! // 767px is still mobile, 768px is not.
//! assert!(cfg.is_mobile(767.0));
//! assert!(!cfg.is_mobile(768.0));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Custom snapshots go through `AngledConfig::new`

pub mod constants;

#[cfg(test)]
mod tests;
