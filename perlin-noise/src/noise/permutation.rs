//! Permutation table used to hash lattice corners.
//!
//! The table stores a 256-entry permutation twice in a row so that the
//! chained lookups in [`PermutationTable::hash_corner`] never need to wrap
//! their index: every intermediate sum stays at or below 511.

use thiserror::Error;

/// Length of one copy of the permutation.
pub const PERMUTATION_SIZE: usize = 256;

/// An error that can occur when building a table from a custom permutation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationError {
    /// A value appeared more than once, so the input is not a permutation of `0..=255`.
    #[error("Value {value} at index {index} already appeared earlier in the permutation")]
    DuplicateEntry {
        /// Index of the second occurrence.
        index: usize,
        /// The repeated value.
        value: u8,
    },
}

/// Ken Perlin's reference permutation of `0..=255`.
#[rustfmt::skip]
const BASE: [u8; PERMUTATION_SIZE] = [
    151, 160, 137,  91,  90,  15, 131,  13, 201,  95,  96,  53, 194, 233,   7, 225,
    140,  36, 103,  30,  69, 142,   8,  99,  37, 240,  21,  10,  23, 190,   6, 148,
    247, 120, 234,  75,   0,  26, 197,  62,  94, 252, 219, 203, 117,  35,  11,  32,
     57, 177,  33,  88, 237, 149,  56,  87, 174,  20, 125, 136, 171, 168,  68, 175,
     74, 165,  71, 134, 139,  48,  27, 166,  77, 146, 158, 231,  83, 111, 229, 122,
     60, 211, 133, 230, 220, 105,  92,  41,  55,  46, 245,  40, 244, 102, 143,  54,
     65,  25,  63, 161,   1, 216,  80,  73, 209,  76, 132, 187, 208,  89,  18, 169,
    200, 196, 135, 130, 116, 188, 159,  86, 164, 100, 109, 198, 173, 186,   3,  64,
     52, 217, 226, 250, 124, 123,   5, 202,  38, 147, 118, 126, 255,  82,  85, 212,
    207, 206,  59, 227,  47,  16,  58,  17, 182, 189,  28,  42, 223, 183, 170, 213,
    119, 248, 152,   2,  44, 154, 163,  70, 221, 153, 101, 155, 167,  43, 172,   9,
    129,  22,  39, 253,  19,  98, 108, 110,  79, 113, 224, 232, 178, 185, 112, 104,
    218, 246,  97, 228, 251,  34, 242, 193, 238, 210, 144,  12, 191, 179, 162, 241,
     81,  51, 145, 235, 249,  14, 239, 107,  49, 192, 214,  31, 181, 199, 106, 157,
    184,  84, 204, 176, 115, 121,  50,  45, 127,   4, 150, 254, 138, 236, 205,  93,
    222, 114,  67,  29,  24,  72, 243, 141, 128, 195,  78,  66, 215,  61, 156, 180,
];

/// Doubled 512-entry permutation table.
///
/// Immutable once built. The default table is a compile-time constant, so it
/// can be shared between any number of threads without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; PERMUTATION_SIZE * 2],
}

impl PermutationTable {
    /// The base permutation every default table is built from.
    pub const BASE: [u8; PERMUTATION_SIZE] = BASE;

    /// Creates the default table from [`Self::BASE`].
    #[must_use]
    pub const fn new() -> Self {
        Self::doubled(&BASE)
    }

    /// Creates a table from a caller-supplied permutation of `0..=255`.
    pub fn from_permutation(
        permutation: &[u8; PERMUTATION_SIZE],
    ) -> Result<Self, PermutationError> {
        let mut seen = [false; PERMUTATION_SIZE];
        for (index, &value) in permutation.iter().enumerate() {
            if seen[usize::from(value)] {
                tracing::debug!("Rejected permutation: value {value} repeated at index {index}");
                return Err(PermutationError::DuplicateEntry { index, value });
            }
            seen[usize::from(value)] = true;
        }

        Ok(Self::doubled(permutation))
    }

    const fn doubled(permutation: &[u8; PERMUTATION_SIZE]) -> Self {
        let mut p = [0u8; PERMUTATION_SIZE * 2];
        let mut i = 0;
        while i < PERMUTATION_SIZE {
            p[i] = permutation[i];
            p[i + PERMUTATION_SIZE] = permutation[i];
            i += 1;
        }
        Self { p }
    }

    /// Reads a single entry. `index` must be below 512.
    #[inline]
    #[must_use]
    pub const fn get(&self, index: usize) -> usize {
        self.p[index] as usize
    }

    /// Hashes a lattice corner with three chained lookups: `p[p[p[x] + y] + z]`.
    ///
    /// Each coordinate must be at most 256 (a masked lattice index plus one).
    #[inline]
    #[must_use]
    pub const fn hash_corner(&self, x: usize, y: usize, z: usize) -> usize {
        self.get(self.get(self.get(x) + y) + z)
    }

    /// The full 512-entry table.
    #[must_use]
    pub const fn as_slice(&self) -> &[u8] {
        &self.p
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_a_permutation() {
        let mut sorted = PermutationTable::BASE;
        sorted.sort_unstable();
        for (i, value) in sorted.iter().enumerate() {
            assert_eq!(usize::from(*value), i);
        }
    }

    #[test]
    fn test_table_is_doubled() {
        let table = PermutationTable::new();
        assert_eq!(table.as_slice().len(), 512);
        for i in 0..512 {
            assert_eq!(table.get(i), table.get(i % 256), "Mismatch at index {i}");
        }
        assert_eq!(table.get(0), 151);
        assert_eq!(table.get(256), 151);
        assert_eq!(table.get(511), 180);
    }

    #[test]
    fn test_hash_corner_tolerates_max_index() {
        let table = PermutationTable::new();
        // Largest sums reachable from masked indices plus one increment per axis
        let hash = table.hash_corner(256, 256, 256);
        assert!(hash < 256);
        assert_eq!(hash, table.hash_corner(0, 256, 256));
    }

    #[test]
    fn test_from_permutation_accepts_identity() {
        let mut identity = [0u8; PERMUTATION_SIZE];
        for (i, value) in identity.iter_mut().enumerate() {
            *value = i as u8;
        }

        let table = PermutationTable::from_permutation(&identity).expect("identity is valid");
        assert_eq!(table.hash_corner(3, 4, 5), 12);
        assert_eq!(table.get(300), 44);
    }

    #[test]
    fn test_from_permutation_rejects_duplicates() {
        let mut permutation = PermutationTable::BASE;
        // 151 is already at index 0
        permutation[10] = 151;

        assert_eq!(
            PermutationTable::from_permutation(&permutation),
            Err(PermutationError::DuplicateEntry {
                index: 10,
                value: 151
            })
        );
    }

    #[test]
    fn test_default_matches_base() {
        let from_base =
            PermutationTable::from_permutation(&PermutationTable::BASE).expect("base is valid");
        assert_eq!(from_base, PermutationTable::default());
    }
}
