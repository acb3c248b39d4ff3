//! Output ranges for the wind effect.

use serde::{Deserialize, Serialize};
use windrig_core::{scale_normalized, Error, Result};

/// Linear output range a proximity value in `[0, 1]` is mapped onto.
///
/// `min` may exceed `max`, which inverts the mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    /// Default volume range
    pub const VOLUME: Self = Self { min: 0.3, max: 1.0 };
    /// Default pitch range
    pub const PITCH: Self = Self { min: 1.0, max: 3.0 };
    /// Default Doppler level range
    pub const DOPPLER: Self = Self { min: 0.0, max: 5.0 };

    /// Create a range, rejecting non-finite bounds.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check that both bounds are finite.
    pub fn validate(&self) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidData(format!(
                "range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )))
        }
    }

    /// Map `proximity` in `[0, 1]` onto this range.
    #[inline]
    #[must_use]
    pub fn scale(&self, proximity: f32) -> f32 {
        scale_normalized(proximity, self.min, self.max)
    }
}

/// Output ranges for the three per-channel parameters.
///
/// Deserialized configs are unchecked; `WindEffectController::new` validates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindEffectConfig {
    pub volume: ParamRange,
    pub pitch: ParamRange,
    pub doppler: ParamRange,
}

impl Default for WindEffectConfig {
    fn default() -> Self {
        Self {
            volume: ParamRange::VOLUME,
            pitch: ParamRange::PITCH,
            doppler: ParamRange::DOPPLER,
        }
    }
}

impl WindEffectConfig {
    /// Set the volume range.
    #[must_use]
    pub const fn with_volume(mut self, range: ParamRange) -> Self {
        self.volume = range;
        self
    }

    /// Set the pitch range.
    #[must_use]
    pub const fn with_pitch(mut self, range: ParamRange) -> Self {
        self.pitch = range;
        self
    }

    /// Set the Doppler level range.
    #[must_use]
    pub const fn with_doppler(mut self, range: ParamRange) -> Self {
        self.doppler = range;
        self
    }

    /// Validate every range.
    pub fn validate(&self) -> Result<()> {
        self.volume.validate()?;
        self.pitch.validate()?;
        self.doppler.validate()
    }
}
