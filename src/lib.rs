//! # chainsim
//!
//! Trajectory simulation for continuous-time Markov chains (CTMCs).
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["Chain::add_state"] --> B["Chain::define_transition"]
//!     B -->|"Chain::simulate()"| C["ResultSet"]
//!     C -->|"estimate_probabilities()"| D["ProbabilityMatrix"]
//!     C -->|"estimate_failure_statistics()"| E["FailureStatistics"]
//! ```
//!
//! The building blocks live in separate crates and are re-exported here:
//! `chainsim-model` (states and rates), `chainsim-simulate` (the
//! competing-exponentials engine) and `chainsim-results` (aggregation).
//! Scenarios can also be described in TOML and run with [`run_scenario`].
//!
//! ## Quick Start
//!
//! ```
//! use chainsim::{Chain, SimulationConfig};
//!
//! let mut chain = Chain::new();
//! chain.add_state("up").unwrap();
//! chain.add_state("down").unwrap();
//! chain.define_transition("up", "down", 0.5).unwrap();
//! chain.define_transition("down", "up", 4.0).unwrap();
//!
//! let config = SimulationConfig::new(0.0, 10.0, 500).with_seed(1);
//! let results = chain.simulate("up", &config).unwrap();
//! let probs = results.estimate_probabilities(100).unwrap();
//! assert_eq!(probs.labels(), &["up", "down"]);
//! ```

mod chain;
mod config;
mod convert;
pub mod logging;
mod scenario;

pub use chain::Chain;
pub use config::{ScenarioConfig, SimulationToml, StateToml, TransitionToml};
pub use scenario::{ScenarioReport, run_scenario};

pub use chainsim_model::{ModelError, StateCode, StateRegistry, Transition, TransitionTable};
pub use chainsim_results::{
    FailureStatistics, Histogram, Knot, ProbabilityMatrix, ResultError, ResultSet, Trajectory,
};
pub use chainsim_simulate::{
    SimulationConfig, SimulationError, simulate, simulate_into, simulate_trajectory,
};
