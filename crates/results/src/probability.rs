//! Occupation probabilities on a uniform time grid.

use chainsim_model::StateCode;

use crate::error::ResultError;
use crate::result_set::ResultSet;

/// Estimated probability of each state at each grid time.
///
/// Rows are grid points, columns are states in ascending code order.
/// Each row is the average of one-hot encoded states across all runs, so
/// it sums to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    grid: Vec<f64>,
    codes: Vec<StateCode>,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ProbabilityMatrix {
    /// Estimates occupation probabilities from every run in `results`.
    ///
    /// The grid has `steps + 1` evenly spaced points spanning the window
    /// (a single point at the window start when `steps == 0`). Each run is
    /// sampled with previous-knot-wins lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::NoResults`] if `results` is empty.
    pub fn estimate(results: &ResultSet, steps: usize) -> Result<Self, ResultError> {
        let (start, end) = results.window().ok_or(ResultError::NoResults)?;
        let grid = chainsim_stats::linspace(start, end, steps + 1);

        let registry = results.registry();
        let codes = registry.sorted_codes();
        let labels = codes
            .iter()
            .map(|&c| registry.id_of(c).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        let n_states = codes.len();
        let mut values = vec![0.0; grid.len() * n_states];
        for trajectory in results.trajectories() {
            for (row, state) in trajectory.resample(&grid).into_iter().enumerate() {
                let col = codes
                    .binary_search(&state)
                    .map_err(|_| ResultError::UnknownState { code: state.get() })?;
                values[row * n_states + col] += 1.0;
            }
        }

        let n = results.len() as f64;
        for v in &mut values {
            *v /= n;
        }

        Ok(Self {
            grid,
            codes,
            labels,
            values,
        })
    }

    /// Grid times, ascending.
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// State codes in column order.
    pub fn codes(&self) -> &[StateCode] {
        &self.codes
    }

    /// State identifiers in column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of grid points.
    pub fn n_rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of states.
    pub fn n_states(&self) -> usize {
        self.codes.len()
    }

    /// Probabilities at grid point `index`, in column order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_rows()`.
    pub fn row(&self, index: usize) -> &[f64] {
        let n = self.n_states();
        &self.values[index * n..(index + 1) * n]
    }

    /// Iterates over rows in grid order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.n_states().max(1))
    }

    /// Probability curve of the state `id` over the grid.
    pub fn column(&self, id: &str) -> Option<Vec<f64>> {
        let col = self.labels.iter().position(|l| l == id)?;
        Some(self.rows().map(|r| r[col]).collect())
    }

    /// Probability of state `id` at grid point `index`.
    pub fn probability(&self, index: usize, id: &str) -> Option<f64> {
        let col = self.labels.iter().position(|l| l == id)?;
        self.values.get(index * self.n_states() + col).copied()
    }
}
