//! Channel sink backed by a kira sound handle.

use std::time::Duration;

use kira::sound::static_sound::StaticSoundHandle;
use kira::sound::PlaybackRate;
use kira::tween::Tween;
use kira::Volume;

use crate::channel::ChannelSink;

/// Tween applied to every parameter change (about one frame at 60 Hz).
pub const DEFAULT_TWEEN: Duration = Duration::from_millis(16);

/// The subset of a kira sound handle a channel drives.
pub trait KiraSound {
    fn set_volume(&mut self, volume: Volume, tween: Tween);
    fn set_playback_rate(&mut self, rate: PlaybackRate, tween: Tween);
    fn set_panning(&mut self, panning: f64, tween: Tween);
}

impl KiraSound for StaticSoundHandle {
    fn set_volume(&mut self, volume: Volume, tween: Tween) {
        Self::set_volume(self, volume, tween);
    }

    fn set_playback_rate(&mut self, rate: PlaybackRate, tween: Tween) {
        Self::set_playback_rate(self, rate, tween);
    }

    fn set_panning(&mut self, panning: f64, tween: Tween) {
        Self::set_panning(self, panning, tween);
    }
}

/// Drives a playing kira sound.
///
/// Volume maps to amplitude and pitch to the playback rate factor. kira has
/// no Doppler control, so the level is only recorded.
pub struct KiraChannel<S = StaticSoundHandle> {
    sound: S,
    tween: Tween,
    doppler_level: f32,
}

impl<S: KiraSound> KiraChannel<S> {
    pub fn new(sound: S) -> Self {
        Self {
            sound,
            tween: Tween {
                duration: DEFAULT_TWEEN,
                ..Default::default()
            },
            doppler_level: 0.0,
        }
    }

    /// Set the tween duration used for parameter changes.
    #[must_use]
    pub fn with_tween(mut self, duration: Duration) -> Self {
        self.tween.duration = duration;
        self
    }

    /// Last Doppler level written to this channel.
    pub const fn doppler_level(&self) -> f32 {
        self.doppler_level
    }
}

impl<S: KiraSound> ChannelSink for KiraChannel<S> {
    fn set_pan(&mut self, pan: f32) {
        self.sound.set_panning(kira_panning(pan), self.tween);
    }

    fn set_volume(&mut self, volume: f32) {
        self.sound.set_volume(kira_volume(volume), self.tween);
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.sound
            .set_playback_rate(kira_playback_rate(pitch), self.tween);
    }

    fn set_doppler_level(&mut self, level: f32) {
        self.doppler_level = level;
    }
}

/// Convert a pan in `[-1, 1]` to kira's `[0, 1]` (0.5 is centered).
#[inline]
pub fn kira_panning(pan: f32) -> f64 {
    f64::from((pan.clamp(-1.0, 1.0) + 1.0) * 0.5)
}

/// Linear channel volume as a kira amplitude.
#[inline]
pub fn kira_volume(volume: f32) -> Volume {
    Volume::Amplitude(f64::from(volume))
}

/// Channel pitch as a kira playback rate factor.
#[inline]
pub fn kira_playback_rate(pitch: f32) -> PlaybackRate {
    PlaybackRate::Factor(f64::from(pitch))
}
