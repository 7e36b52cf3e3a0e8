use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level scenario file.
///
/// ```toml
/// seed = 42
///
/// [[states]]
/// id = "up"
///
/// [[states]]
/// id = "down"
/// failure = true
///
/// [[transitions]]
/// from = "up"
/// to = "down"
/// rate = 0.5
///
/// [simulation]
/// initial_state = "up"
/// time_end = 20.0
/// iterations = 1000
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// States, in registration order.
    #[serde(default)]
    pub states: Vec<StateToml>,

    /// Transition rates.
    #[serde(default)]
    pub transitions: Vec<TransitionToml>,

    /// Simulation settings.
    pub simulation: SimulationToml,
}

impl ScenarioConfig {
    /// Parses a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse scenario TOML")
    }

    /// Reads and parses a scenario file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid scenario file: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateToml {
    pub id: String,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub failure: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionToml {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    pub initial_state: String,
    #[serde(default)]
    pub time_start: f64,
    pub time_end: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_true")]
    pub parallel: bool,
    #[serde(default = "default_probability_steps")]
    pub probability_steps: usize,
}

fn default_iterations() -> usize {
    1000
}
fn default_true() -> bool {
    true
}
fn default_probability_steps() -> usize {
    1000
}
