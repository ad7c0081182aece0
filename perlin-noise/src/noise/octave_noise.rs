//! Octave-based fractal noise built on [`NoiseEngine::noise`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::improved_noise::{NO_REPEAT, NoiseEngine};

/// An error that can occur when summing noise octaves.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctaveError {
    /// At least one octave is required; zero octaves would normalize by zero.
    #[error("Octave count must be at least 1, got {0}")]
    InvalidOctaveCount(u32),
}

/// Octave count and per-octave amplitude decay for fractal noise.
///
/// Persistence is not validated. Values outside `(0, 1)` are accepted but the
/// sum is then no longer guaranteed to stay near `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctaveSettings {
    /// Number of noise layers to sum (at least 1).
    pub octaves: u32,
    /// Amplitude multiplier applied after each octave.
    pub persistence: f64,
}

impl Default for OctaveSettings {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
        }
    }
}

impl OctaveSettings {
    /// Few octaves with fast decay, for soft large-scale variation.
    #[must_use]
    pub const fn smooth() -> Self {
        Self {
            octaves: 2,
            persistence: 0.4,
        }
    }

    /// Many octaves with slow decay, for rough detailed surfaces.
    #[must_use]
    pub const fn detailed() -> Self {
        Self {
            octaves: 8,
            persistence: 0.55,
        }
    }

    /// Checks that the settings describe at least one octave.
    pub fn validate(&self) -> Result<(), OctaveError> {
        if self.octaves == 0 {
            tracing::debug!("Rejected octave settings with zero octaves");
            return Err(OctaveError::InvalidOctaveCount(self.octaves));
        }
        Ok(())
    }
}

impl NoiseEngine {
    /// Sum `octaves` layers of noise, doubling frequency and scaling amplitude
    /// by `persistence` per layer, normalized by the total amplitude.
    ///
    /// Tiling is never applied to the layers. Fails when `octaves` is zero.
    pub fn octave(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
    ) -> Result<f64, OctaveError> {
        self.octave_with(
            x,
            y,
            z,
            &OctaveSettings {
                octaves,
                persistence,
            },
        )
    }

    /// Same as [`NoiseEngine::octave`] with the parameters taken from `settings`.
    pub fn octave_with(
        &self,
        x: f64,
        y: f64,
        z: f64,
        settings: &OctaveSettings,
    ) -> Result<f64, OctaveError> {
        settings.validate()?;

        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..settings.octaves {
            total +=
                self.noise(x * frequency, y * frequency, z * frequency, NO_REPEAT) * amplitude;
            max_value += amplitude;
            amplitude *= settings.persistence;
            frequency *= 2.0;
        }

        Ok(total / max_value)
    }
}
