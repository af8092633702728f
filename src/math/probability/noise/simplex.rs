// src/math/probability/noise/simplex.rs

use super::config::TableMode;
use super::gradient::{GRAD3, GRADIENT_COUNT, dot2};
use super::permutation::PermutationTable;
use crate::math::probability::seed::Seed;
use crate::math::utils::constants::SQRT_3;

/// Skew factor from input space onto the triangular lattice.
pub const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskew factor from the lattice back to input space.
pub const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// Empirical normalisation onto roughly `[-1, 1]`.
pub const SCALE: f64 = 70.0;

/// Squared radius of a corner's kernel support.
const KERNEL_RADIUS_SQ: f64 = 0.5;

/// 2D simplex noise over a fixed permutation table.
///
/// Immutable once built: `sample` is a pure function of its coordinates and
/// can be called from many threads on a shared field.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField2D {
    seed: Seed,
    perm: PermutationTable,
}

impl NoiseField2D {
    /// Field over the bug-compatible constant table.
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self::with_table(seed, TableMode::Legacy)
    }

    pub fn with_table(seed: impl Into<Seed>, mode: TableMode) -> Self {
        let seed = seed.into();
        Self {
            seed,
            perm: PermutationTable::new(seed, mode),
        }
    }

    /// Field over a caller-built table. [`NoiseField2D::seed`] then reports NaN.
    pub fn from_permutation(perm: PermutationTable) -> Self {
        Self {
            seed: Seed::new(f64::NAN),
            perm,
        }
    }

    /// Field with a fresh random seed; output differs between runs.
    pub fn from_entropy() -> Self {
        Self::new(Seed::random())
    }

    pub fn seed(&self) -> f64 {
        self.seed.value()
    }

    pub fn table(&self) -> &PermutationTable {
        &self.perm
    }

    /// Noise value at `(x, y)`, nominally in `[-1, 1]`.
    ///
    /// Total over all inputs; NaN coordinates give NaN.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew the input onto the lattice to find the containing cell
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        // Unskew the cell origin back and take offsets from it
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = simplex_half(x0, y0);

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = lattice_byte(i);
        let jj = lattice_byte(j);
        let i1 = i1 as usize;
        let j1 = j1 as usize;
        let gi0 = self.perm.get(ii + self.perm.get(jj)) % GRADIENT_COUNT;
        let gi1 = self.perm.get(ii + i1 + self.perm.get(jj + j1)) % GRADIENT_COUNT;
        let gi2 = self.perm.get(ii + 1 + self.perm.get(jj + 1)) % GRADIENT_COUNT;

        let n0 = corner_contribution(gi0, x0, y0);
        let n1 = corner_contribution(gi1, x1, y1);
        let n2 = corner_contribution(gi2, x2, y2);

        SCALE * (n0 + n1 + n2)
    }
}

impl Default for NoiseField2D {
    fn default() -> Self {
        Self::new(Seed::DEFAULT)
    }
}

/// Lattice step `(i1, j1)` to the middle corner of the triangle holding
/// `(x0, y0)`.
///
/// `x0 > y0` is the lower triangle `(0,0) -> (1,0) -> (1,1)`; everything else,
/// the diagonal included, is the upper triangle `(0,0) -> (0,1) -> (1,1)`.
#[inline]
pub(crate) fn simplex_half(x0: f64, y0: f64) -> (u8, u8) {
    if x0 > y0 { (1, 0) } else { (0, 1) }
}

/// Cell coordinate masked to `0..=255`, two's-complement style.
#[inline]
fn lattice_byte(cell: f64) -> usize {
    (cell as i64 & 0xff) as usize
}

/// Quartic radial falloff times the gradient ramp; zero outside the support.
#[inline]
fn corner_contribution(gradient: usize, x: f64, y: f64) -> f64 {
    let mut t = KERNEL_RADIUS_SQ - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    t *= t;
    t * t * dot2(&GRAD3[gradient], x, y)
}
