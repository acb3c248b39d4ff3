//! Optional audible playback through kira.

use std::path::Path;
use std::time::Duration;

use anyhow::anyhow;
use kira::manager::backend::DefaultBackend;
use kira::manager::{AudioManager, AudioManagerSettings};
use kira::sound::static_sound::StaticSoundData;
use tracing::info;
use windrig_audio::KiraChannel;

/// Two looping copies of one sound, one per ear.
pub struct Playback {
    pub left: KiraChannel,
    pub right: KiraChannel,
    _manager: AudioManager<DefaultBackend>,
}

impl Playback {
    pub fn start(path: &Path, tween: Duration) -> anyhow::Result<Self> {
        let mut manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow!("Failed to create audio manager: {e}"))?;
        let data = StaticSoundData::from_file(path)
            .map_err(|e| anyhow!("Failed to load {}: {e}", path.display()))?
            .loop_region(..);

        let left = manager
            .play(data.clone())
            .map_err(|e| anyhow!("Failed to play left channel: {e:?}"))?;
        let right = manager
            .play(data)
            .map_err(|e| anyhow!("Failed to play right channel: {e:?}"))?;

        info!(path = %path.display(), "Playback started");
        Ok(Self {
            left: KiraChannel::new(left).with_tween(tween),
            right: KiraChannel::new(right).with_tween(tween),
            _manager: manager,
        })
    }
}
