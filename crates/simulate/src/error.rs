//! Error types for the chainsim-simulate crate.

use chainsim_model::ModelError;
use chainsim_results::ResultError;

/// Error type for all fallible operations in the chainsim-simulate crate.
///
/// Every variant is detected before the first trajectory is drawn, so an
/// error never leaves a partially filled [`ResultSet`](chainsim_results::ResultSet).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Model lookup error.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Result storage error.
    #[error(transparent)]
    Results(#[from] ResultError),

    /// Returned when the initial state is not registered.
    #[error("initial state {id:?} does not exist")]
    InvalidInitialState {
        /// The unknown identifier.
        id: String,
    },

    /// Returned when `time_start >= time_end`.
    #[error("time interval is not increasing: [{start}, {end}]")]
    NonIncreasingWindow {
        /// Window start.
        start: f64,
        /// Window end.
        end: f64,
    },

    /// Returned when either window bound is NaN or infinite.
    #[error("time interval bounds must be finite: [{start}, {end}]")]
    NonFiniteWindow {
        /// Window start.
        start: f64,
        /// Window end.
        end: f64,
    },

    /// Returned when zero iterations are requested.
    #[error("number of iterations must be positive, got {iterations}")]
    NonPositiveIterations {
        /// The requested count.
        iterations: usize,
    },

    /// Returned when a designated failure state is not registered.
    #[error("failure state {id:?} does not exist")]
    InvalidFailureState {
        /// The unknown identifier.
        id: String,
    },

    /// Returned when the result set was built for a different registry.
    #[error("result set is bound to a different state registry")]
    RegistryMismatch,
}
