//! Audio channel parameters and the sink trait they are written through.

use windrig_core::constants::{PAN_LEFT, PAN_RIGHT};

/// One side of the stereo pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ear {
    Left,
    Right,
}

impl Ear {
    /// Both ears, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Fixed stereo pan for this ear.
    #[inline]
    #[must_use]
    pub const fn pan(self) -> f32 {
        match self {
            Self::Left => PAN_LEFT,
            Self::Right => PAN_RIGHT,
        }
    }
}

/// Parameters of a single audio channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelState {
    /// Stereo pan (-1 fully left, +1 fully right)
    pub pan: f32,
    /// Linear amplitude
    pub volume: f32,
    /// Playback rate factor
    pub pitch: f32,
    /// Doppler effect intensity
    pub doppler_level: f32,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self {
            pan: 0.0,
            volume: 1.0,
            pitch: 1.0,
            doppler_level: 1.0,
        }
    }
}

impl ChannelState {
    /// Default channel hard-panned to `ear`.
    pub fn for_ear(ear: Ear) -> Self {
        Self {
            pan: ear.pan(),
            ..Default::default()
        }
    }
}

/// Destination for computed channel parameters.
///
/// Implemented by anything the host can set audio parameters on: an audio
/// backend handle, an ECS component, or a plain [`ChannelState`].
pub trait ChannelSink {
    fn set_pan(&mut self, pan: f32);
    fn set_volume(&mut self, volume: f32);
    fn set_pitch(&mut self, pitch: f32);
    fn set_doppler_level(&mut self, level: f32);

    /// Overwrite volume, pitch, and Doppler level from `state`.
    ///
    /// Pan is left alone; it is set once at initialization.
    fn apply(&mut self, state: &ChannelState) {
        self.set_volume(state.volume);
        self.set_pitch(state.pitch);
        self.set_doppler_level(state.doppler_level);
    }
}

impl ChannelSink for ChannelState {
    fn set_pan(&mut self, pan: f32) {
        self.pan = pan;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    fn set_doppler_level(&mut self, level: f32) {
        self.doppler_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ear_pan() {
        assert_eq!(Ear::Left.pan(), -1.0);
        assert_eq!(Ear::Right.pan(), 1.0);
    }

    #[test]
    fn for_ear_sets_pan_only() {
        let state = ChannelState::for_ear(Ear::Right);
        assert_eq!(state.pan, 1.0);
        assert_eq!(state.volume, ChannelState::default().volume);
    }

    #[test]
    fn apply_keeps_pan() {
        let mut sink = ChannelState::for_ear(Ear::Left);
        let update = ChannelState {
            pan: 0.5,
            volume: 0.4,
            pitch: 2.0,
            doppler_level: 3.0,
        };
        sink.apply(&update);
        assert_eq!(sink.pan, -1.0);
        assert_eq!(sink.volume, 0.4);
        assert_eq!(sink.pitch, 2.0);
        assert_eq!(sink.doppler_level, 3.0);
    }
}
