//! Stochastic simulation of continuous-time Markov chains.
//!
//! Each run is drawn with the competing-exponentials race: in the current
//! state every outgoing transition draws an exponential waiting time and
//! the earliest one fires. Runs are independent, each with its own seeded
//! generator, and may be drawn on the rayon thread pool.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────────┐     ┌──────────────────────┐     ┌──────────────┐
//!  │ TransitionTable   │────▶│ simulate_trajectory  │────▶│  ResultSet   │
//!  │ + SimulationConfig│     │ (one run per seed)   │     │  (merge)     │
//!  └──────────────────┘     └──────────────────────┘     └──────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use chainsim_model::{StateRegistry, TransitionTable};
//! use chainsim_simulate::{SimulationConfig, simulate};
//!
//! let mut registry = StateRegistry::new();
//! registry.add("working").unwrap();
//! registry.add("broken").unwrap();
//! let mut table = TransitionTable::new(Arc::new(registry)).unwrap();
//! table.add("working", "broken", 0.5).unwrap();
//!
//! let config = SimulationConfig::new(0.0, 100.0, 200).with_seed(42);
//! let results = simulate(&table, "working", &config).unwrap();
//!
//! assert_eq!(results.len(), 200);
//! assert!(results.estimate_failure_statistics().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod simulate;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use simulate::{simulate, simulate_into, simulate_trajectory};
