//! Per-tick wind effect computation.

use tracing::trace;
use windrig_core::{angle_to_source, heading_radians, normalize_sin, Result};

use crate::channel::{ChannelSink, ChannelState, Ear};
use crate::config::WindEffectConfig;
use crate::listener::{Listener, WindSource};

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindEffect {
    /// Horizontal angle from listener to source, in `[0, 2π]`
    pub angle_to_source: f32,
    /// Listener heading in radians
    pub heading_radians: f32,
    /// How strongly the left ear faces the wind, in `[0, 1]`
    pub proximity_left: f32,
    /// How strongly the right ear faces the wind, in `[0, 1]`
    pub proximity_right: f32,
    pub left: ChannelState,
    pub right: ChannelState,
}

impl WindEffect {
    /// Proximity of `ear`.
    #[must_use]
    pub const fn proximity(&self, ear: Ear) -> f32 {
        match ear {
            Ear::Left => self.proximity_left,
            Ear::Right => self.proximity_right,
        }
    }

    /// Channel parameters of `ear`.
    #[must_use]
    pub const fn channel(&self, ear: Ear) -> &ChannelState {
        match ear {
            Ear::Left => &self.left,
            Ear::Right => &self.right,
        }
    }
}

/// Maps listener/source orientation onto two stereo channels.
///
/// Holds no per-tick state: the same inputs always produce the same outputs.
#[derive(Debug, Clone, Default)]
pub struct WindEffectController {
    config: WindEffectConfig,
}

impl WindEffectController {
    /// Create a controller, rejecting configs with non-finite ranges.
    pub fn new(config: WindEffectConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &WindEffectConfig {
        &self.config
    }

    /// Hard-pan the two sinks. Call once before the first tick.
    pub fn init(&self, left: &mut impl ChannelSink, right: &mut impl ChannelSink) {
        left.set_pan(Ear::Left.pan());
        right.set_pan(Ear::Right.pan());
    }

    /// Compute the effect for the current listener and source.
    pub fn compute(&self, listener: &Listener, source: &WindSource) -> WindEffect {
        let angle_to_source = angle_to_source(listener.position, source.position);
        let heading_radians = heading_radians(listener.yaw_degrees);

        let proximity_right = normalize_sin(heading_radians - angle_to_source);
        let proximity_left = 1.0 - proximity_right;

        WindEffect {
            angle_to_source,
            heading_radians,
            proximity_left,
            proximity_right,
            left: self.channel_state(Ear::Left, proximity_left),
            right: self.channel_state(Ear::Right, proximity_right),
        }
    }

    /// Compute the effect and overwrite both sinks with it.
    pub fn update(
        &self,
        listener: &Listener,
        source: &WindSource,
        left: &mut impl ChannelSink,
        right: &mut impl ChannelSink,
    ) -> WindEffect {
        let effect = self.compute(listener, source);
        left.apply(&effect.left);
        right.apply(&effect.right);

        trace!(
            proximity_left = effect.proximity_left,
            proximity_right = effect.proximity_right,
            left_volume = effect.left.volume,
            right_volume = effect.right.volume,
            "wind effect updated"
        );

        effect
    }

    fn channel_state(&self, ear: Ear, proximity: f32) -> ChannelState {
        ChannelState {
            pan: ear.pan(),
            volume: self.config.volume.scale(proximity),
            pitch: self.config.pitch.scale(proximity),
            doppler_level: self.config.doppler.scale(proximity),
        }
    }
}
