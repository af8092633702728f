use super::config::TableMode;
use crate::math::probability::seed::Seed;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;
use tracing::debug;

pub const TABLE_SIZE: usize = 256;

/// Lookup table hashing lattice coordinates to gradient indices.
///
/// Holds the 256-entry base twice in a row, so a lookup of
/// `perm[(i & 255) + perm[j & 255]]` never needs another wrap.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    pub fn new(seed: impl Into<Seed>, mode: TableMode) -> Self {
        let seed = seed.into();
        let table = match mode {
            TableMode::Legacy => Self::legacy(seed),
            TableMode::Shuffled => Self::shuffled(seed),
        };
        debug!(seed = seed.value(), ?mode, "built permutation table");
        table
    }

    /// Bug-compatible construction: every base entry is `floor(seed * 256)`.
    ///
    /// The seed is read once rather than per index, so the table is constant
    /// and all corners of a cell hash to the same gradient.
    pub fn legacy(seed: impl Into<Seed>) -> Self {
        Self::from_base([seed.into().table_byte(); TABLE_SIZE])
    }

    /// Fisher-Yates shuffle of `0..=255`, driven by a `StdRng` seeded from the
    /// bit pattern of `seed`.
    pub fn shuffled(seed: impl Into<Seed>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed.into().value().to_bits());
        let mut base = [0u8; TABLE_SIZE];
        for (i, slot) in base.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..TABLE_SIZE).rev() {
            base.swap(i, rng.random_range(0..=i));
        }
        Self::from_base(base)
    }

    /// Builds the doubled table from an explicit 256-entry base.
    pub fn from_base(base: [u8; TABLE_SIZE]) -> Self {
        let mut values = [0u8; TABLE_SIZE * 2];
        for (i, value) in values.iter_mut().enumerate() {
            *value = base[i & 0xff];
        }
        Self { values }
    }

    /// Entry at `index`. Callers keep `index < 512`.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.values[index] as usize
    }

    #[inline]
    pub fn base(&self) -> &[u8] {
        &self.values[..TABLE_SIZE]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}

impl fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PermutationTable {{ .. }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_table_is_constant() {
        for seed in [0.0, 0.1, 0.5, 0.8694896071683615, 0.999] {
            let table = PermutationTable::legacy(seed);
            let expected = (seed * 256.0).floor() as u8;
            assert!(table.base().iter().all(|v| *v == expected), "seed {}", seed);
            assert_eq!(table.as_slice().len(), 512);
        }
    }

    #[test]
    fn test_extension_tiles_base() {
        let mut base = [0u8; TABLE_SIZE];
        for (i, v) in base.iter_mut().enumerate() {
            *v = (255 - i) as u8;
        }
        let table = PermutationTable::from_base(base);
        for i in 0..512 {
            assert_eq!(table.get(i), base[i % 256] as usize);
        }
        assert_eq!(&table.as_slice()[..256], &table.as_slice()[256..]);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let table = PermutationTable::shuffled(0.42);
        let mut sorted = table.base().to_vec();
        sorted.sort_unstable();
        let identity: Vec<u8> = (0..=255).collect();
        assert_eq!(sorted, identity);
        assert_eq!(&table.as_slice()[..256], &table.as_slice()[256..]);
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        assert_eq!(PermutationTable::shuffled(0.42), PermutationTable::shuffled(0.42));
        assert_ne!(PermutationTable::shuffled(0.42), PermutationTable::shuffled(0.43));
    }

    #[test]
    fn test_mode_dispatch() {
        assert_eq!(
            PermutationTable::new(0.3, TableMode::Legacy),
            PermutationTable::legacy(0.3)
        );
        assert_eq!(
            PermutationTable::new(0.3, TableMode::Shuffled),
            PermutationTable::shuffled(0.3)
        );
    }
}
