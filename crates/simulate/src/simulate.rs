//! Competing-exponentials trajectory simulation.

use std::sync::Arc;

use chainsim_model::{StateCode, TransitionTable};
use chainsim_results::{Knot, ResultError, ResultSet, Trajectory};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp1};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::config::SimulationConfig;
use crate::error::SimulationError;

/// Simulates `config.iterations()` runs from `initial_state` into a new result set.
///
/// # Errors
///
/// See [`simulate_into`].
pub fn simulate(
    table: &TransitionTable,
    initial_state: &str,
    config: &SimulationConfig,
) -> Result<ResultSet, SimulationError> {
    let mut results = ResultSet::new(Arc::clone(table.registry()));
    simulate_into(table, initial_state, config, &mut results)?;
    Ok(results)
}

/// Simulates runs and appends them to an existing result set.
///
/// Every check happens before the first run is drawn, so on error
/// `results` is left exactly as it was.
///
/// A master `StdRng` seeded with the configured seed emits one `u64` per
/// run, and run `i` draws from its own `StdRng` seeded with the `i`-th
/// value. With a fixed seed the output is identical whether or not runs
/// execute in parallel, and batches under different seeds do not share
/// streams. Without a seed, the master is seeded from the OS.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SimulationError::InvalidInitialState`] | `initial_state` is not registered |
/// | [`SimulationError::NonFiniteWindow`] | a window bound is NaN or infinite |
/// | [`SimulationError::NonIncreasingWindow`] | `time_start >= time_end` |
/// | [`SimulationError::NonPositiveIterations`] | zero iterations requested |
/// | [`SimulationError::InvalidFailureState`] | a failure state is not registered |
/// | [`SimulationError::RegistryMismatch`] | `results` uses another registry |
/// | [`SimulationError::Results`] | `results` already holds a different window |
#[tracing::instrument(
    skip(table, config, results),
    fields(iterations = config.iterations(), parallel = config.parallel())
)]
pub fn simulate_into(
    table: &TransitionTable,
    initial_state: &str,
    config: &SimulationConfig,
    results: &mut ResultSet,
) -> Result<(), SimulationError> {
    let registry = table.registry();
    let initial = registry
        .code_of(initial_state)
        .map_err(|_| SimulationError::InvalidInitialState {
            id: initial_state.to_string(),
        })?;
    config.validate()?;
    let failure_codes = resolve_failure_states(table, config)?;

    if !Arc::ptr_eq(registry, results.registry()) {
        return Err(SimulationError::RegistryMismatch);
    }
    let window = config.window();
    if let Some((start, end)) = results.window() {
        if (start, end) != window {
            return Err(ResultError::IncompatibleWindow {
                expected_start: start,
                expected_end: end,
                got_start: window.0,
                got_end: window.1,
            }
            .into());
        }
    }

    let n = config.iterations();
    let run_seeds = derive_run_seeds(config.seed(), n);
    debug!(
        seed = ?config.seed(),
        n_failure_states = failure_codes.len(),
        "starting simulation"
    );

    let draw = |(i, seed): (usize, u64)| {
        let mut rng = StdRng::seed_from_u64(seed);
        let trajectory = simulate_trajectory(table, initial, window, &failure_codes, &mut rng);
        if let Ok(t) = &trajectory {
            trace!(run = i, n_jumps = t.n_jumps(), failure_time = ?t.failure_time(), "run complete");
        }
        trajectory
    };
    let trajectories: Vec<Trajectory> = if config.parallel() {
        run_seeds
            .into_par_iter()
            .enumerate()
            .map(draw)
            .collect::<Result<_, _>>()?
    } else {
        run_seeds
            .into_iter()
            .enumerate()
            .map(draw)
            .collect::<Result<_, _>>()?
    };

    // Single-writer merge.
    for t in &trajectories {
        results.check(t)?;
    }
    let before = results.failure_times().len();
    for t in trajectories {
        results.insert(t)?;
    }
    info!(
        n_runs = n,
        n_failures = results.failure_times().len() - before,
        total_runs = results.len(),
        "simulation complete"
    );
    Ok(())
}

/// One seed per run, drawn from a master generator.
fn derive_run_seeds(seed: Option<u64>, n: usize) -> Vec<u64> {
    let mut master = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    (0..n).map(|_| master.random()).collect()
}

/// Codes counted as failures: the named states, or every absorbing state if none are named.
fn resolve_failure_states(
    table: &TransitionTable,
    config: &SimulationConfig,
) -> Result<Vec<StateCode>, SimulationError> {
    if config.failure_states().is_empty() {
        return Ok(table.absorbing_codes());
    }
    let registry = table.registry();
    let mut codes = config
        .failure_states()
        .iter()
        .map(|id| {
            registry
                .code_of(id)
                .map_err(|_| SimulationError::InvalidFailureState { id: id.clone() })
        })
        .collect::<Result<Vec<_>, _>>()?;
    codes.sort();
    codes.dedup();
    Ok(codes)
}

/// Draws one trajectory over `window` starting in `initial`.
///
/// Each step draws one exponential waiting time per outgoing transition
/// (mean `1 / rate`) and takes the earliest; ties go to the transition
/// listed first. A jump landing at or past the window end is discarded.
/// The path ends with a knot at `window.1` holding the last state.
///
/// A waiting time too small to move `time` at its float precision ends
/// the run, holding the current state until the window closes.
///
/// `failure_codes` must be sorted. The returned failure time is the
/// first time the path is in one of them, which is the window start if
/// `initial` is a failure state.
///
/// # Errors
///
/// Returns [`SimulationError::Results`] if the window is empty or not
/// finite.
pub fn simulate_trajectory(
    table: &TransitionTable,
    initial: StateCode,
    window: (f64, f64),
    failure_codes: &[StateCode],
    rng: &mut impl Rng,
) -> Result<Trajectory, SimulationError> {
    let (start, end) = window;
    let is_failure = |code: StateCode| failure_codes.binary_search(&code).is_ok();

    let mut time = start;
    let mut state = initial;
    let mut knots = vec![Knot::new(time, state)];
    let mut failure_time = is_failure(state).then_some(time);

    loop {
        let outgoing = table.outgoing(state);
        if outgoing.is_empty() {
            break;
        }

        let mut wait = f64::INFINITY;
        let mut next = state;
        for transition in outgoing {
            let candidate: f64 = Exp1.sample(rng);
            let candidate = candidate / transition.rate();
            if candidate < wait {
                wait = candidate;
                next = transition.destination();
            }
        }

        let next_time = time + wait;
        if next_time >= end {
            break;
        }
        if next_time <= time {
            debug!(time, wait, "waiting time below float resolution, holding state");
            break;
        }
        time = next_time;
        state = next;
        knots.push(Knot::new(time, state));
        if failure_time.is_none() && is_failure(state) {
            failure_time = Some(time);
        }
    }

    knots.push(Knot::new(end, state));
    Ok(Trajectory::new(knots, failure_time)?)
}
