use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seed for a noise field: a real number, nominally in `[0, 1)`.
///
/// Any real is accepted; [`Seed::table_byte`] coerces it onto a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(f64);

impl Seed {
    /// Fixed process-wide default, used whenever no seed is supplied.
    pub const DEFAULT: Seed = Seed(0.8694896071683615);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Hashes `text` into `[0, 1)`. Stable for a given build of the crate.
    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        let mut hasher = DefaultHasher::new();
        text.as_ref().hash(&mut hasher);
        // obere 53 Bits -> Mantisse
        let bits = hasher.finish() >> 11;
        Self(bits as f64 / (1u64 << 53) as f64)
    }

    /// Draws a seed in `[0, 1)` from the thread-local entropy source.
    pub fn random() -> Self {
        Self(rand::random::<f64>())
    }

    /// `floor(seed * 256)` folded into a byte.
    ///
    /// Seeds in `[0, 1)` map onto `0..=255` unchanged; other reals wrap, and
    /// NaN lands on 0.
    pub fn table_byte(self) -> u8 {
        ((self.0 * 256.0).floor() as i64 & 0xff) as u8
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_seed_consistency() {
        let s1 = Seed::from_text("abc");
        let s2 = Seed::from_text("abc");
        assert_eq!(s1, s2);
        assert!((0.0..1.0).contains(&s1.value()));
        assert_ne!(s1, Seed::from_text("abd"));
    }

    #[test]
    fn test_numeric_seed() {
        let s = Seed::new(0.25);
        assert_eq!(s.value(), 0.25);
        assert_eq!(s.table_byte(), 64);
    }

    #[test]
    fn test_default_seed_is_fixed() {
        assert_eq!(Seed::default(), Seed::DEFAULT);
        assert_eq!(Seed::DEFAULT.table_byte(), 222);
    }

    #[test]
    fn test_random_seed_in_unit_interval() {
        for _ in 0..100 {
            let s = Seed::random();
            assert!((0.0..1.0).contains(&s.value()), "Seed außerhalb [0, 1): {:?}", s);
        }
    }

    #[test]
    fn test_table_byte_coercion() {
        assert_eq!(Seed::new(0.0).table_byte(), 0);
        assert_eq!(Seed::new(0.999).table_byte(), 255);
        // 1.25 * 256 = 320 -> 320 & 255 = 64
        assert_eq!(Seed::new(1.25).table_byte(), 64);
        // -0.5 * 256 = -128 -> 128
        assert_eq!(Seed::new(-0.5).table_byte(), 128);
        assert_eq!(Seed::new(f64::NAN).table_byte(), 0);
    }
}
