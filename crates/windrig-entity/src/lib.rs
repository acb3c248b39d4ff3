//! Entity integration for WindRig.
//!
//! Uses hecs as the ECS backend. A listener entity carries a [`Transform`]
//! and a [`WindRig`] pointing at its wind source and two channel entities,
//! each of which holds a [`ChannelState`] component.

mod components;
mod systems;

pub use components::{Transform, WindRig};
pub use hecs::{Entity, World};
pub use systems::{init_wind_rigs, update_wind_rigs, wind_rig_debug_lines};
pub use windrig_audio::ChannelState;
