use anyhow::bail;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub low: f64,
    pub high: f64,
    pub seed: u64,
    /// Round every sample to a whole number, e.g. for 0/1 cell states.
    pub integral: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            low: 0.0,
            high: 1.0,
            seed: 0,
            integral: false,
        }
    }
}

/// Builds a deterministic sequence for the given seed.
pub fn build_sequence(config: &GeneratorConfig) -> anyhow::Result<Vec<f64>> {
    if !(config.low.is_finite() && config.high.is_finite()) || config.low >= config.high {
        bail!(
            "generator range [{}, {}) is empty or not finite",
            config.low,
            config.high
        );
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let samples = (0..config.length)
        .map(|_| {
            let value = rng.gen_range(config.low..config.high);
            if config.integral {
                value.round()
            } else {
                value
            }
        })
        .collect();

    Ok(samples)
}
