pub mod config;
pub mod gradient;
pub mod permutation;
pub mod simplex;

use crate::math::probability::seed::Seed;
use std::sync::OnceLock;
use tracing::debug;

pub use config::{NoiseConfig, TableMode};
pub use gradient::GRAD3;
pub use permutation::PermutationTable;
pub use simplex::NoiseField2D;

/// Construction entry point. `None` uses [`Seed::DEFAULT`], so the result is
/// reproducible; use [`NoiseField2D::from_entropy`] for a random field.
pub fn create_noise_field(seed: Option<f64>) -> NoiseField2D {
    NoiseField2D::new(seed.map(Seed::new).unwrap_or_default())
}

/// Samples the shared default field, built once from [`Seed::DEFAULT`].
pub fn perlin_noise(x: f64, y: f64) -> f64 {
    static DEFAULT_FIELD: OnceLock<NoiseField2D> = OnceLock::new();
    DEFAULT_FIELD
        .get_or_init(|| {
            debug!("initialising default noise field");
            NoiseField2D::default()
        })
        .sample(x, y)
}
