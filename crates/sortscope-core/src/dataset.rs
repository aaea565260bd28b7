//! Dataset source: the numeric arrays fed to the step generators.
//!
//! Two ways in: text typed by a user (comma-separated numbers) and random
//! datasets drawn from a seeded ChaCha PRNG. Both reject anything that is not
//! a finite number before it can reach a generator.
//!
//! Reproducibility: given the same `seed`, [`random_dataset`] returns the same
//! values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Parses comma-separated numbers such as `"5, 1, 4, 2, 8"`.
///
/// Tokens are trimmed. At least one value is required, and every token must
/// parse to a finite number.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>, CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::EmptyDataset);
    }

    text.split(',')
        .enumerate()
        .map(|(position, raw)| parse_finite(raw.trim(), position))
        .collect()
}

/// Parses a single search target.
pub fn parse_target(text: &str) -> Result<f64, CoreError> {
    parse_finite(text.trim(), 0)
}

fn parse_finite(token: &str, position: usize) -> Result<f64, CoreError> {
    let value: f64 = token.parse().map_err(|_| CoreError::NotNumeric {
        token: token.to_string(),
        position,
    })?;
    if !value.is_finite() {
        return Err(CoreError::NonFinite {
            token: token.to_string(),
        });
    }
    Ok(value)
}

/// Reads a dataset out of a JSON value.
///
/// Anything other than a JSON array degrades to an empty dataset, which the
/// generators turn into an empty step list. Array elements must be numbers.
pub fn numbers_from_json(value: &serde_json::Value) -> Result<Vec<f64>, CoreError> {
    let Some(items) = value.as_array() else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            item.as_f64().ok_or_else(|| CoreError::NotANumberElement {
                position,
                found: item.to_string(),
            })
        })
        .collect()
}

/// Parameters for random dataset generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of values. Default: 10.
    pub len: usize,
    /// Smallest value, inclusive. Default: 1.
    pub min: i64,
    /// Largest value, inclusive. Default: 100.
    pub max: i64,
    /// PRNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            len: 10,
            min: 1,
            max: 100,
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Builds a config from environment variables, falling back to defaults:
    /// - `SORTSCOPE_DATASET_LEN`: number of values (default: 10)
    /// - `SORTSCOPE_SEED`: PRNG seed (default: random)
    pub fn from_env() -> Self {
        let mut config = DatasetConfig::default();
        if let Some(len) = env_parse::<usize>("SORTSCOPE_DATASET_LEN") {
            config.len = len;
        }
        config.seed = env_parse::<u64>("SORTSCOPE_SEED");
        config
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.len == 0 {
            return Err(CoreError::InvalidDatasetConfig {
                reason: "len must be at least 1".into(),
            });
        }
        if self.min > self.max {
            return Err(CoreError::InvalidDatasetConfig {
                reason: format!("min ({}) is greater than max ({})", self.min, self.max),
            });
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}

/// Draws `config.len` integers uniformly from `config.min..=config.max`.
pub fn random_dataset(config: &DatasetConfig) -> Result<Vec<f64>, CoreError> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    Ok(random_values(config, &mut rng))
}

/// Same as [`random_dataset`] but drawing from a caller-owned RNG, so a
/// sequence of "shuffles" can share one seeded stream.
pub fn random_values(config: &DatasetConfig, rng: &mut ChaCha8Rng) -> Vec<f64> {
    (0..config.len)
        .map(|_| rng.gen_range(config.min..=config.max) as f64)
        .collect()
}
