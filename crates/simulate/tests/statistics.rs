use std::sync::Arc;

use approx::assert_abs_diff_eq;
use chainsim_model::{StateRegistry, TransitionTable};
use chainsim_simulate::{SimulationConfig, SimulationError, simulate, simulate_into};

/// Builds a table from `(origin, destination, rate)` triples over `ids`.
fn chain(ids: &[&str], edges: &[(&str, &str, f64)]) -> TransitionTable {
    let mut reg = StateRegistry::new();
    for id in ids {
        reg.add(*id).unwrap();
    }
    let mut table = TransitionTable::new(Arc::new(reg)).unwrap();
    for &(from, to, rate) in edges {
        table.add(from, to, rate).unwrap();
    }
    table
}

// ---------------------------------------------------------------------------
// 1. mttf_converges_to_inverse_rate
// ---------------------------------------------------------------------------
#[test]
fn mttf_converges_to_inverse_rate() {
    let rate = 0.5;
    let table = chain(&["a", "b"], &[("a", "b", rate)]);
    let config = SimulationConfig::new(0.0, 200.0, 5_000).with_seed(2024);

    let results = simulate(&table, "a", &config).unwrap();
    let stats = results.estimate_failure_statistics().unwrap();

    assert_eq!(stats.count(), 5_000, "every run should be absorbed");
    let expected = 1.0 / rate;
    assert!(
        (stats.mean() - expected).abs() < 0.1 * expected,
        "MTTF {} not within 10% of {expected}",
        stats.mean()
    );
    // Exponential: sd equals mean.
    assert!((stats.std_dev() - expected).abs() < 0.15 * expected);
}

// ---------------------------------------------------------------------------
// 2. race_picks_destination_by_rate
// ---------------------------------------------------------------------------
#[test]
fn race_picks_destination_by_rate() {
    let table = chain(&["a", "b", "c"], &[("a", "b", 1.0), ("a", "c", 3.0)]);
    let config = SimulationConfig::new(0.0, 100.0, 4_000).with_seed(17);
    let results = simulate(&table, "a", &config).unwrap();

    let c = table.registry().code_of("c").unwrap();
    let in_c = results
        .trajectories()
        .iter()
        .filter(|t| t.final_state() == c)
        .count() as f64;
    assert_abs_diff_eq!(in_c / 4_000.0, 0.75, epsilon = 0.03);

    // Holding time in "a" is exponential with the summed rate.
    let stats = results.estimate_failure_statistics().unwrap();
    assert_abs_diff_eq!(stats.mean(), 0.25, epsilon = 0.025);
}

// ---------------------------------------------------------------------------
// 3. two_state_transient_probabilities
// ---------------------------------------------------------------------------
#[test]
fn two_state_transient_probabilities() {
    let (lambda, mu) = (1.0, 3.0);
    let table = chain(&["up", "down"], &[("up", "down", lambda), ("down", "up", mu)]);
    let config = SimulationConfig::new(0.0, 10.0, 4_000).with_seed(8);
    let results = simulate(&table, "up", &config).unwrap();

    let probs = results.estimate_probabilities(20).unwrap();
    let up = probs.column("up").unwrap();
    for (i, &t) in probs.grid().iter().enumerate() {
        let exact = mu / (lambda + mu) + lambda / (lambda + mu) * (-(lambda + mu) * t).exp();
        assert_abs_diff_eq!(up[i], exact, epsilon = 0.03);
    }
    for row in probs.rows() {
        assert_abs_diff_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 4. no_failures_without_absorption
// ---------------------------------------------------------------------------
#[test]
fn no_failures_without_absorption() {
    let table = chain(&["up", "down"], &[("up", "down", 1.0), ("down", "up", 1.0)]);
    let config = SimulationConfig::new(0.0, 5.0, 50).with_seed(1);
    let results = simulate(&table, "up", &config).unwrap();
    assert!(results.failure_times().is_empty());
    assert!(matches!(
        results.estimate_failure_statistics(),
        Err(chainsim_results::ResultError::NoFailuresRecorded)
    ));
}

// ---------------------------------------------------------------------------
// 5. validation_before_mutation
// ---------------------------------------------------------------------------
#[test]
fn validation_before_mutation() {
    let table = chain(&["a", "b"], &[("a", "b", 1.0)]);
    let mut results = simulate(&table, "a", &SimulationConfig::new(0.0, 10.0, 20).with_seed(3))
        .unwrap();
    let snapshot = results.trajectories().to_vec();

    let zero = SimulationConfig::new(0.0, 10.0, 0);
    assert_eq!(
        simulate_into(&table, "a", &zero, &mut results),
        Err(SimulationError::NonPositiveIterations { iterations: 0 })
    );

    let reversed = SimulationConfig::new(10.0, 0.0, 5);
    assert!(matches!(
        simulate_into(&table, "a", &reversed, &mut results),
        Err(SimulationError::NonIncreasingWindow { .. })
    ));

    let other_window = SimulationConfig::new(0.0, 11.0, 5);
    assert!(matches!(
        simulate_into(&table, "a", &other_window, &mut results),
        Err(SimulationError::Results(
            chainsim_results::ResultError::IncompatibleWindow { .. }
        ))
    ));

    assert_eq!(results.trajectories(), snapshot.as_slice());
}

// ---------------------------------------------------------------------------
// 6. accumulate_more_runs
// ---------------------------------------------------------------------------
#[test]
fn accumulate_more_runs() {
    let table = chain(&["a", "b"], &[("a", "b", 2.0)]);
    let first = SimulationConfig::new(0.0, 10.0, 30).with_seed(1);
    let mut results = simulate(&table, "a", &first).unwrap();
    let second = SimulationConfig::new(0.0, 10.0, 20).with_seed(1_000);
    simulate_into(&table, "a", &second, &mut results).unwrap();
    assert_eq!(results.len(), 50);
    assert_eq!(results.window(), Some((0.0, 10.0)));
}

// ---------------------------------------------------------------------------
// 7. window_contract_all_runs
// ---------------------------------------------------------------------------
#[test]
fn window_contract_all_runs() {
    let table = chain(
        &["ok", "warn", "fail"],
        &[("ok", "warn", 2.0), ("warn", "ok", 1.0), ("warn", "fail", 0.2)],
    );
    let config = SimulationConfig::new(-3.0, 7.5, 300).with_seed(12);
    let results = simulate(&table, "ok", &config).unwrap();
    for t in results.trajectories() {
        assert_eq!(t.time_start(), -3.0);
        assert_eq!(t.time_end(), 7.5);
        assert!(t.knots().windows(2).all(|w| w[0].time <= w[1].time));
    }
    let stats = results.estimate_failure_statistics().unwrap();
    assert!(stats.samples().iter().all(|&t| (-3.0..=7.5).contains(&t)));
    assert_eq!(
        stats.mean(),
        chainsim_stats::mean(results.failure_times())
    );
}
