// src/math/probability/noise/config.rs
use super::simplex::NoiseField2D;
use crate::math::error::{MathError, MathResult};
use crate::math::probability::seed::Seed;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How the permutation table is derived from the seed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// Every entry is `floor(seed * 256)`; output-compatible with the
    /// historical generator.
    #[default]
    Legacy,
    /// Seeded Fisher-Yates shuffle of `0..=255`.
    Shuffled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// `None` falls back to [`Seed::DEFAULT`].
    pub seed: Option<f64>,
    pub table: TableMode,
}

impl NoiseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_table(mut self, table: TableMode) -> Self {
        self.table = table;
        self
    }

    pub fn from_json(json: &str) -> MathResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> MathResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> MathResult<()> {
        if let Some(seed) = self.seed {
            if !seed.is_finite() {
                warn!("NoiseConfig: seed must be finite, got {}.", seed);
                return Err(MathError::InvalidConfiguration {
                    message: format!("Seed must be finite, got {}", seed),
                });
            }
        }
        Ok(())
    }

    pub fn resolved_seed(&self) -> Seed {
        self.seed.map(Seed::new).unwrap_or_default()
    }

    pub fn build(&self) -> MathResult<NoiseField2D> {
        self.validate()?;
        let seed = self.resolved_seed();
        info!(
            "Building noise field with seed {} ({:?} table).",
            seed.value(),
            self.table
        );
        Ok(NoiseField2D::with_table(seed, self.table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NoiseConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.table, TableMode::Legacy);
        assert_eq!(config.resolved_seed(), Seed::DEFAULT);

        let field = config.build().unwrap();
        assert_eq!(field, NoiseField2D::default());
    }

    #[test]
    fn test_builder_matches_direct_construction() {
        let field = NoiseConfig::new()
            .with_seed(0.25)
            .with_table(TableMode::Shuffled)
            .build()
            .unwrap();
        assert_eq!(field, NoiseField2D::with_table(0.25, TableMode::Shuffled));
        assert_eq!(field.seed(), 0.25);
    }

    #[test]
    fn test_rejects_non_finite_seed() {
        for seed in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = NoiseConfig::new().with_seed(seed).build().unwrap_err();
            assert!(matches!(err, MathError::InvalidConfiguration { .. }));
        }
        // Jeder endliche Seed ist erlaubt
        assert!(NoiseConfig::new().with_seed(-1234.5).validate().is_ok());
    }

    #[test]
    fn test_json_config() {
        let config = NoiseConfig::from_json(r#"{ "seed": 0.5, "table": "shuffled" }"#).unwrap();
        assert_eq!(config.seed, Some(0.5));
        assert_eq!(config.table, TableMode::Shuffled);

        let partial = NoiseConfig::from_json(r#"{ "table": "legacy" }"#).unwrap();
        assert_eq!(partial, NoiseConfig::new());

        let json = config.to_json().unwrap();
        assert_eq!(NoiseConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_parse_error() {
        let err = NoiseConfig::from_json(r#"{ "table": "perlin" }"#).unwrap_err();
        assert!(matches!(err, MathError::ConfigParse(_)));
    }
}
