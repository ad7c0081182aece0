//! Improved Perlin noise (2002) and its octave sum.
//!
//! - [`PermutationTable`] - Doubled 512-entry lattice hash table
//! - [`NoiseEngine`] - Single-octave 3D noise with optional tiling
//! - [`OctaveSettings`] - Octave count and persistence for fractal sums

mod improved_noise;
mod octave_noise;
mod permutation;

pub use improved_noise::{DEFAULT_ENGINE, NO_REPEAT, NoiseEngine};
pub use octave_noise::{OctaveError, OctaveSettings};
pub use permutation::{PERMUTATION_SIZE, PermutationError, PermutationTable};

/// Dot product of the offset `(x, y, z)` with the gradient selected by the low 4 bits of `hash`.
///
/// Entries `0xD` and `0xE` deliberately differ from the symmetric textbook
/// table (`-y + z` and `y - x`). Changing them changes every output value.
#[inline]
#[must_use]
pub(crate) const fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    match hash & 0xF {
        0x0 => x + y,
        0x1 => -x + y,
        0x2 => x - y,
        0x3 => -x - y,
        0x4 => x + z,
        0x5 => -x + z,
        0x6 => x - z,
        0x7 => -x - z,
        0x8 => y + z,
        0x9 => -y + z,
        0xA => y - z,
        0xB => -y - z,
        0xC => y + x,
        0xD => -y + z,
        0xE => y - x,
        _ => -y - z,
    }
}
