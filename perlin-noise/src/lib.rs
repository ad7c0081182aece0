//! Ken Perlin's improved 3D gradient noise and its octave sum.
//!
//! Everything is a pure function over an immutable permutation table. The
//! default table is built at compile time, so [`noise`] and [`octave`] can be
//! called from any thread without setup.
//!
//! ```
//! let value = perlin_noise::noise(3.14, 42.0, 7.0, perlin_noise::NO_REPEAT);
//! assert_eq!(value, 0.568_459_979_392_000_1);
//!
//! let detail = perlin_noise::octave(3.14, 42.0, 7.0, 4, 0.5).unwrap();
//! assert_eq!(detail, 0.553_001_428_514_133_5);
//! ```

pub mod math;
pub mod noise;

pub use noise::{
    DEFAULT_ENGINE, NO_REPEAT, NoiseEngine, OctaveError, OctaveSettings, PermutationError,
    PermutationTable,
};

/// Sample single-octave noise with the default permutation table.
///
/// See [`NoiseEngine::noise`].
#[inline]
#[must_use]
pub fn noise(x: f64, y: f64, z: f64, repeat: i32) -> f64 {
    DEFAULT_ENGINE.noise(x, y, z, repeat)
}

/// Sample octave noise with the default permutation table.
///
/// See [`NoiseEngine::octave`].
#[inline]
pub fn octave(
    x: f64,
    y: f64,
    z: f64,
    octaves: u32,
    persistence: f64,
) -> Result<f64, OctaveError> {
    DEFAULT_ENGINE.octave(x, y, z, octaves, persistence)
}
