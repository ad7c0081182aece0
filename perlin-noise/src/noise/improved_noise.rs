//! Single-octave improved Perlin noise.
//!
//! Follows Ken Perlin's 2002 reference algorithm: quintic fade curves, a
//! doubled permutation table for corner hashing and 16 edge gradients. The
//! result is remapped from roughly `[-1, 1]` to roughly `[0, 1]`.

// Noise code uses mathematical single-letter variables (x, y, z, u, v, w)
#![allow(clippy::many_single_char_names)]

use crate::math::{fade, lattice_floor, lerp};

use super::grad;
use super::permutation::PermutationTable;

/// Repeat period that disables tiling.
pub const NO_REPEAT: i32 = -1;

/// Engine over the default permutation table.
pub static DEFAULT_ENGINE: NoiseEngine = NoiseEngine::new();

/// Improved Perlin noise generator.
///
/// Holds only an immutable permutation table, so sampling takes `&self` and
/// one engine can serve any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoiseEngine {
    table: PermutationTable,
}

impl NoiseEngine {
    /// Creates an engine over the default permutation table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: PermutationTable::new(),
        }
    }

    /// Creates an engine over a custom permutation table.
    #[must_use]
    pub const fn with_table(table: PermutationTable) -> Self {
        Self { table }
    }

    /// The permutation table used for corner hashing.
    #[must_use]
    pub const fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Sample 3D noise at the given coordinates.
    ///
    /// A positive `repeat` wraps every coordinate into `[0, repeat)` and makes
    /// the output tile with that period on all three axes. Zero or negative
    /// (see [`NO_REPEAT`]) disables tiling.
    ///
    /// Returns a value in approximately `[0, 1]`. The bound is practical rather
    /// than exact, and non-finite coordinates propagate to a non-finite result.
    #[must_use]
    pub fn noise(&self, x: f64, y: f64, z: f64, repeat: i32) -> f64 {
        let (x, y, z) = if repeat > 0 {
            let period = f64::from(repeat);
            (x.rem_euclid(period), y.rem_euclid(period), z.rem_euclid(period))
        } else {
            (x, y, z)
        };

        let xi = lattice_floor(x);
        let yi = lattice_floor(y);
        let zi = lattice_floor(z);

        let xf = x - x.floor();
        let yf = y - y.floor();
        let zf = z - z.floor();

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let xn = Self::inc(xi, repeat);
        let yn = Self::inc(yi, repeat);
        let zn = Self::inc(zi, repeat);

        let aaa = self.table.hash_corner(xi, yi, zi);
        let aba = self.table.hash_corner(xi, yn, zi);
        let aab = self.table.hash_corner(xi, yi, zn);
        let abb = self.table.hash_corner(xi, yn, zn);
        let baa = self.table.hash_corner(xn, yi, zi);
        let bba = self.table.hash_corner(xn, yn, zi);
        let bab = self.table.hash_corner(xn, yi, zn);
        let bbb = self.table.hash_corner(xn, yn, zn);

        // Interpolate along x, then y, then z
        let x1 = lerp(grad(aaa, xf, yf, zf), grad(baa, xf - 1.0, yf, zf), u);
        let x2 = lerp(
            grad(aba, xf, yf - 1.0, zf),
            grad(bba, xf - 1.0, yf - 1.0, zf),
            u,
        );
        let y1 = lerp(x1, x2, v);

        let x1 = lerp(
            grad(aab, xf, yf, zf - 1.0),
            grad(bab, xf - 1.0, yf, zf - 1.0),
            u,
        );
        let x2 = lerp(
            grad(abb, xf, yf - 1.0, zf - 1.0),
            grad(bbb, xf - 1.0, yf - 1.0, zf - 1.0),
            u,
        );
        let y2 = lerp(x1, x2, v);

        (lerp(y1, y2, w) + 1.0) / 2.0
    }

    /// Next lattice index along one axis, wrapped to the repeat period when tiling.
    #[inline]
    const fn inc(index: usize, repeat: i32) -> usize {
        let next = index + 1;
        if repeat > 0 {
            next % repeat as usize
        } else {
            next
        }
    }
}
