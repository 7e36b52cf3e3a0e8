//! Structure of a continuous-time Markov chain.
//!
//! A chain is described by a [`StateRegistry`], which maps human-readable
//! state identifiers to compact [`StateCode`]s, and a [`TransitionTable`]
//! bound to it, which stores the exponential rate of every allowed jump.
//!
//! ```text
//!  ┌────────────────┐   Arc    ┌───────────────────┐
//!  │ StateRegistry  │─────────▶│  TransitionTable  │
//!  │ (id <-> code)  │          │ (origin -> rates) │
//!  └────────────────┘          └───────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use chainsim_model::{StateRegistry, TransitionTable};
//!
//! let mut registry = StateRegistry::new();
//! registry.add("up").unwrap();
//! registry.add("down").unwrap();
//!
//! let mut table = TransitionTable::new(Arc::new(registry)).unwrap();
//! table.add("up", "down", 0.25).unwrap();
//! table.add("down", "up", 2.0).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! ```

pub mod error;
pub mod registry;
pub mod state;
pub mod transition;

pub use error::ModelError;
pub use registry::StateRegistry;
pub use state::StateCode;
pub use transition::{Transition, TransitionTable};
