//! Stereo wind effect for head-mounted listeners.
//!
//! Each tick the [`WindEffectController`] compares the listener's heading with
//! the direction of a [`WindSource`] and derives how strongly each ear faces
//! the wind. That proximity is mapped onto volume, pitch, and Doppler level of
//! two hard-panned audio channels.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use windrig_audio::{ChannelState, Ear, Listener, WindEffectController, WindSource};
//!
//! let controller = WindEffectController::default();
//! let mut left = ChannelState::for_ear(Ear::Left);
//! let mut right = ChannelState::for_ear(Ear::Right);
//! controller.init(&mut left, &mut right);
//!
//! let listener = Listener::new(Vec3::ZERO, 0.0);
//! let source = WindSource::new(Vec3::new(10.0, 0.0, 0.0));
//! let effect = controller.update(&listener, &source, &mut left, &mut right);
//!
//! assert!(effect.proximity_right > effect.proximity_left);
//! assert!(right.volume > left.volume);
//! ```

pub mod channel;
pub mod config;
pub mod controller;
pub mod debug;
pub mod kira_sink;
pub mod listener;

pub use channel::{ChannelSink, ChannelState, Ear};
pub use config::{ParamRange, WindEffectConfig};
pub use controller::{WindEffect, WindEffectController};
pub use debug::{
    draw_wind_lines, DebugAnchors, DebugDraw, DebugLine, DebugLineBuffer, NullDebugDraw,
};
pub use kira_sink::{KiraChannel, KiraSound};
pub use listener::{Listener, WindSource};
