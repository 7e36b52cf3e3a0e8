//! Configuration for trajectory simulation.

use crate::error::SimulationError;

/// Window, run count and randomness settings for a simulation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use chainsim_simulate::SimulationConfig;
///
/// let config = SimulationConfig::new(0.0, 100.0, 5_000)
///     .with_seed(7)
///     .with_failure_states(["failed"]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    time_start: f64,
    time_end: f64,
    iterations: usize,
    seed: Option<u64>,
    parallel: bool,
    failure_states: Vec<String>,
}

impl SimulationConfig {
    /// Creates a configuration covering `[time_start, time_end]` with `iterations` runs.
    ///
    /// Defaults: `seed = None`, `parallel = true`, no explicit failure
    /// states (every absorbing state then counts as a failure).
    pub fn new(time_start: f64, time_end: f64, iterations: usize) -> Self {
        Self {
            time_start,
            time_end,
            iterations,
            seed: None,
            parallel: true,
            failure_states: Vec::new(),
        }
    }

    /// Sets the seed of the master generator that seeds every run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables drawing runs on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Names the states whose first entry counts as a failure.
    pub fn with_failure_states<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failure_states = ids.into_iter().map(Into::into).collect();
        self
    }

    // --- Accessors ---

    /// Returns the window start.
    pub fn time_start(&self) -> f64 {
        self.time_start
    }

    /// Returns the window end.
    pub fn time_end(&self) -> f64 {
        self.time_end
    }

    /// Returns `(time_start, time_end)`.
    pub fn window(&self) -> (f64, f64) {
        (self.time_start, self.time_end)
    }

    /// Returns the number of runs.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the base seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether runs are drawn in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the explicitly designated failure states.
    pub fn failure_states(&self) -> &[String] {
        &self.failure_states
    }

    /// Validates the window and run count.
    ///
    /// Checks that both bounds are finite, that `time_start < time_end`,
    /// and that at least one iteration is requested.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let (start, end) = self.window();
        if !start.is_finite() || !end.is_finite() {
            return Err(SimulationError::NonFiniteWindow { start, end });
        }
        if start >= end {
            return Err(SimulationError::NonIncreasingWindow { start, end });
        }
        if self.iterations == 0 {
            return Err(SimulationError::NonPositiveIterations {
                iterations: self.iterations,
            });
        }
        Ok(())
    }
}
