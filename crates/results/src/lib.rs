//! Storage and statistics for simulated continuous-time Markov chain runs.
//!
//! A [`ResultSet`] collects [`Trajectory`] values that share one time
//! window and derives two summaries from them:
//!
//! - [`ProbabilityMatrix`]: per-state occupation probability on a uniform
//!   time grid, from previous-knot-wins resampling and one-hot averaging.
//! - [`FailureStatistics`]: mean time to failure and the raw failure
//!   times it was computed from.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use chainsim_model::StateRegistry;
//! use chainsim_results::{Knot, ResultSet, Trajectory};
//!
//! let mut registry = StateRegistry::new();
//! let up = registry.add("up").unwrap();
//! let down = registry.add("down").unwrap();
//!
//! let mut results = ResultSet::new(Arc::new(registry));
//! let run = Trajectory::new(
//!     vec![Knot::new(0.0, up), Knot::new(3.0, down), Knot::new(10.0, down)],
//!     Some(3.0),
//! )
//! .unwrap();
//! results.insert(run).unwrap();
//!
//! let probs = results.estimate_probabilities(10).unwrap();
//! assert_eq!(probs.row(5), &[0.0, 1.0]);
//! assert_eq!(results.estimate_failure_statistics().unwrap().mean(), 3.0);
//! ```

pub mod error;
pub mod failure;
pub mod probability;
pub mod result_set;
pub mod trajectory;

pub use error::ResultError;
pub use failure::{FailureStatistics, Histogram};
pub use probability::ProbabilityMatrix;
pub use result_set::ResultSet;
pub use trajectory::{Knot, Trajectory};
