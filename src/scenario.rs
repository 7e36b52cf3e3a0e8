//! End-to-end scenario runner: config -> chain -> results -> summaries.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chainsim_results::{FailureStatistics, ProbabilityMatrix, ResultError, ResultSet};

use crate::config::ScenarioConfig;
use crate::convert;

/// Everything a renderer needs from one scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// All simulated trajectories.
    pub results: ResultSet,
    /// Occupation probabilities on the configured grid.
    pub probabilities: ProbabilityMatrix,
    /// Failure statistics, or `None` if no run failed.
    pub failures: Option<FailureStatistics>,
}

/// Builds the chain described by `config`, simulates it and summarises the runs.
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioReport> {
    let _span = info_span!("scenario", initial_state = %config.simulation.initial_state).entered();

    let mut chain = convert::build_chain(config)?;
    let sim_cfg = convert::build_simulation_config(
        &config.simulation,
        config.seed,
        convert::failure_state_ids(config),
    )?;
    info!(
        n_states = chain.registry().len(),
        n_transitions = chain.transitions().map_or(0, |t| t.len()),
        iterations = sim_cfg.iterations(),
        "chain built"
    );

    let results = chain
        .simulate(&config.simulation.initial_state, &sim_cfg)
        .context("simulation failed")?;

    let probabilities = results
        .estimate_probabilities(config.simulation.probability_steps)
        .context("failed to estimate occupation probabilities")?;

    let failures = match results.estimate_failure_statistics() {
        Ok(stats) => {
            info!(mttf = stats.mean(), n_failures = stats.count(), "failure statistics");
            Some(stats)
        }
        Err(ResultError::NoFailuresRecorded) => {
            info!("no run reached a failure state");
            None
        }
        Err(e) => return Err(e).context("failed to compute failure statistics"),
    };

    Ok(ScenarioReport {
        results,
        probabilities,
        failures,
    })
}
