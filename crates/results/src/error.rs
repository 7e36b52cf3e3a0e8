//! Error types for the chainsim-results crate.

use chainsim_model::ModelError;

/// Error type for all fallible operations in the chainsim-results crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResultError {
    /// Registry lookup error.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Returned when a trajectory's window differs from the stored ones.
    #[error(
        "incompatible window: results cover [{expected_start}, {expected_end}], \
         trajectory covers [{got_start}, {got_end}]"
    )]
    IncompatibleWindow {
        /// Start of the window already stored.
        expected_start: f64,
        /// End of the window already stored.
        expected_end: f64,
        /// Start of the rejected trajectory.
        got_start: f64,
        /// End of the rejected trajectory.
        got_end: f64,
    },

    /// Returned when a query needs at least one trajectory.
    #[error("no simulation results available")]
    NoResults,

    /// Returned when failure statistics are requested but no run failed.
    #[error("no failure times recorded")]
    NoFailuresRecorded,

    /// Returned when a trajectory index is past the end.
    #[error("trajectory index {index} out of range (have {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of stored trajectories.
        len: usize,
    },

    /// Returned when knots do not form a valid step function.
    #[error("invalid trajectory: {reason}")]
    InvalidTrajectory {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a trajectory visits a code the registry does not know.
    #[error("trajectory visits unregistered state code {code}")]
    UnknownState {
        /// The unregistered code.
        code: u32,
    },
}
