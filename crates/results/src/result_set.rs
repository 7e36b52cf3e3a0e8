//! Collection of trajectories sharing one time window.

use std::sync::Arc;

use chainsim_model::StateRegistry;
use tracing::debug;

use crate::error::ResultError;
use crate::failure::FailureStatistics;
use crate::probability::ProbabilityMatrix;
use crate::trajectory::Trajectory;

/// Trajectories produced against a single window, plus their failure times.
///
/// The first inserted trajectory fixes the window; later insertions must
/// match it exactly. Renderers read the set through [`labeled_knots`],
/// [`estimate_probabilities`] and [`estimate_failure_statistics`].
///
/// [`labeled_knots`]: ResultSet::labeled_knots
/// [`estimate_probabilities`]: ResultSet::estimate_probabilities
/// [`estimate_failure_statistics`]: ResultSet::estimate_failure_statistics
#[derive(Debug, Clone)]
pub struct ResultSet {
    registry: Arc<StateRegistry>,
    trajectories: Vec<Trajectory>,
    failure_times: Vec<f64>,
}

impl ResultSet {
    /// Creates an empty set bound to `registry`.
    pub fn new(registry: Arc<StateRegistry>) -> Self {
        Self {
            registry,
            trajectories: Vec::new(),
            failure_times: Vec::new(),
        }
    }

    /// Returns the registry used to label states.
    pub fn registry(&self) -> &Arc<StateRegistry> {
        &self.registry
    }

    /// Appends a trajectory, recording its failure time if it has one.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ResultError::IncompatibleWindow`] | window differs from stored trajectories |
    /// | [`ResultError::UnknownState`] | a knot's state is not in the registry |
    pub fn insert(&mut self, trajectory: Trajectory) -> Result<(), ResultError> {
        self.check(&trajectory)?;
        if let Some(t) = trajectory.failure_time() {
            self.failure_times.push(t);
        }
        self.trajectories.push(trajectory);
        Ok(())
    }

    /// Checks that `trajectory` could be inserted, without inserting it.
    pub fn check(&self, trajectory: &Trajectory) -> Result<(), ResultError> {
        if let Some((start, end)) = self.window() {
            let (got_start, got_end) = trajectory.window();
            if got_start != start || got_end != end {
                return Err(ResultError::IncompatibleWindow {
                    expected_start: start,
                    expected_end: end,
                    got_start,
                    got_end,
                });
            }
        }
        if let Some(k) = trajectory
            .knots()
            .iter()
            .find(|k| !self.registry.contains_code(k.state))
        {
            return Err(ResultError::UnknownState {
                code: k.state.get(),
            });
        }
        Ok(())
    }

    /// Number of stored trajectories.
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// The shared window, or `None` while empty.
    pub fn window(&self) -> Option<(f64, f64)> {
        self.trajectories.first().map(Trajectory::window)
    }

    /// All stored trajectories in insertion order.
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Failure times of the runs that failed, in insertion order.
    pub fn failure_times(&self) -> &[f64] {
        &self.failure_times
    }

    /// Fraction of runs that entered a failure state within the window.
    ///
    /// Returns 0.0 for an empty set.
    pub fn failure_fraction(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.failure_times.len() as f64 / self.len() as f64
    }

    /// Returns the trajectory at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::NoResults`] if the set is empty and
    /// [`ResultError::IndexOutOfRange`] if `index` is past the end.
    pub fn trajectory(&self, index: usize) -> Result<&Trajectory, ResultError> {
        if self.is_empty() {
            return Err(ResultError::NoResults);
        }
        self.trajectories
            .get(index)
            .ok_or(ResultError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns the most recently inserted trajectory.
    pub fn last_trajectory(&self) -> Result<&Trajectory, ResultError> {
        self.trajectories.last().ok_or(ResultError::NoResults)
    }

    /// Knots of one run as `(time, state id)` pairs, ready for plotting.
    pub fn labeled_knots(&self, index: usize) -> Result<Vec<(f64, String)>, ResultError> {
        let trajectory = self.trajectory(index)?;
        trajectory
            .knots()
            .iter()
            .map(|k| -> Result<(f64, String), ResultError> {
                Ok((k.time, self.registry.id_of(k.state)?.to_string()))
            })
            .collect()
    }

    /// Identifier of the state run `index` occupies at time `t`.
    pub fn state_at(&self, index: usize, t: f64) -> Result<&str, ResultError> {
        let code = self.trajectory(index)?.state_at(t);
        Ok(self.registry.id_of(code)?)
    }

    /// Occupation probability of every state on a uniform grid of `steps + 1` points.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::NoResults`] if the set is empty.
    pub fn estimate_probabilities(&self, steps: usize) -> Result<ProbabilityMatrix, ResultError> {
        debug!(n_trajectories = self.len(), steps, "estimating occupation probabilities");
        ProbabilityMatrix::estimate(self, steps)
    }

    /// Mean time to failure and the sample it was computed from.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::NoFailuresRecorded`] if no run failed.
    pub fn estimate_failure_statistics(&self) -> Result<FailureStatistics, ResultError> {
        FailureStatistics::from_samples(self.failure_times.clone())
    }
}
