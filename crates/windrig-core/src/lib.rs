//! Core math and error types for WindRig.
//!
//! This crate provides the foundational pieces shared by the other crates:
//! - Angle and scalar mapping helpers
//! - The workspace error type

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{angle_to_source, heading_radians, normalize_sin, scale_normalized};

/// Workspace-wide constants
pub mod constants {
    /// Stereo pan of the left channel
    pub const PAN_LEFT: f32 = -1.0;
    /// Stereo pan of the right channel
    pub const PAN_RIGHT: f32 = 1.0;
    /// Tolerance used when comparing proximity values
    pub const PROXIMITY_EPSILON: f32 = 1e-5;
}
