//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use chainsim_simulate::SimulationConfig;

use crate::chain::Chain;
use crate::config::{ScenarioConfig, SimulationToml};

/// Builds a [`Chain`] holding every state and transition of the scenario.
pub fn build_chain(config: &ScenarioConfig) -> Result<Chain> {
    if config.states.is_empty() {
        bail!("scenario defines no states: add at least one [[states]] entry");
    }
    let mut chain = Chain::new();
    for state in &config.states {
        let added = match state.code {
            Some(code) => chain.add_state_with_code(&state.id, code),
            None => chain.add_state(&state.id),
        };
        added.with_context(|| format!("failed to add state {:?}", state.id))?;
    }
    chain.seal().context("failed to build transition table")?;
    for t in &config.transitions {
        chain
            .define_transition(&t.from, &t.to, t.rate)
            .with_context(|| format!("failed to define transition {:?} -> {:?}", t.from, t.to))?;
    }
    Ok(chain)
}

/// Identifiers of states flagged `failure = true`.
pub fn failure_state_ids(config: &ScenarioConfig) -> Vec<String> {
    config
        .states
        .iter()
        .filter(|s| s.failure)
        .map(|s| s.id.clone())
        .collect()
}

/// Builds a [`SimulationConfig`] from the `[simulation]` table.
pub fn build_simulation_config(
    sim: &SimulationToml,
    seed: Option<u64>,
    failure_states: Vec<String>,
) -> Result<SimulationConfig> {
    let mut cfg = SimulationConfig::new(sim.time_start, sim.time_end, sim.iterations)
        .with_parallel(sim.parallel)
        .with_failure_states(failure_states);
    if let Some(s) = seed {
        cfg = cfg.with_seed(s);
    }
    cfg.validate().context("invalid [simulation] settings")?;
    Ok(cfg)
}
