//! Listener and wind source inputs.

use glam::{EulerRot, Quat, Vec3};

/// Audio listener (usually the tracked head of the player).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listener {
    pub position: Vec3,
    /// Yaw around +Y in degrees. 0 faces +Z.
    pub yaw_degrees: f32,
}

impl Default for Listener {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
        }
    }
}

impl Listener {
    /// Create a listener at `position` facing `yaw_degrees`.
    #[inline]
    pub const fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }

    /// Build a listener from a world rotation.
    ///
    /// The yaw is the Y component of a YXZ Euler decomposition, wrapped into
    /// `[0, 360)` degrees. Pitch and roll of the head are ignored.
    pub fn from_rotation(position: Vec3, rotation: Quat) -> Self {
        let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
        Self::new(position, yaw.to_degrees().rem_euclid(360.0))
    }
}

/// Point the wind blows from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindSource {
    pub position: Vec3,
}

impl WindSource {
    #[inline]
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}
