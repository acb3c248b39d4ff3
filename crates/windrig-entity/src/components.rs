//! ECS components.

use glam::{Quat, Vec3};
use hecs::Entity;
use windrig_audio::{Listener, WindSource};

/// Transform component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Transform at `position` with no rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Transform at `position` turned `yaw_degrees` around +Y.
    pub fn from_position_yaw(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw_degrees.to_radians()),
            ..Default::default()
        }
    }

    pub fn listener(&self) -> Listener {
        Listener::from_rotation(self.position, self.rotation)
    }

    pub const fn wind_source(&self) -> WindSource {
        WindSource::new(self.position)
    }
}

/// Marks a listener entity and links it to its wind source and ear channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindRig {
    /// Entity whose transform is the wind source
    pub source: Entity,
    /// Entity holding the left channel
    pub left: Entity,
    /// Entity holding the right channel
    pub right: Entity,
}
