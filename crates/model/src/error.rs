//! Error types for the chainsim-model crate.

/// Error type for all fallible operations in the chainsim-model crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Returned when a state identifier is registered twice.
    #[error("state {id:?} is already defined")]
    DuplicateIdentifier {
        /// The repeated identifier.
        id: String,
    },

    /// Returned when an explicit code is already bound to another state.
    #[error("code {code} is already assigned to state {existing:?}")]
    DuplicateValue {
        /// The requested code.
        code: u32,
        /// Identifier currently holding the code.
        existing: String,
    },

    /// Returned when an explicit code is negative or does not fit in a `u32`.
    #[error("invalid state code: {value} (must be in 0..={})", u32::MAX)]
    InvalidValue {
        /// The rejected value.
        value: i64,
    },

    /// Returned when a state identifier is not registered.
    #[error("state {id:?} is not defined")]
    UnknownIdentifier {
        /// The unknown identifier.
        id: String,
    },

    /// Returned when no state is bound to a code.
    #[error("there is no state with code {code}")]
    UnknownValue {
        /// The unknown code.
        code: u32,
    },

    /// Returned when a transition table is built from an empty registry.
    #[error("no states defined")]
    EmptyModel,

    /// Returned when a transition would leave and enter the same state.
    #[error("self loop on state {id:?} is not allowed")]
    SelfLoop {
        /// The state on both ends.
        id: String,
    },

    /// Returned when a transition between two states already exists.
    #[error("transition from {origin:?} to {destination:?} is already defined")]
    DuplicateTransition {
        /// Origin identifier.
        origin: String,
        /// Destination identifier.
        destination: String,
    },

    /// Returned when modifying a transition that was never added.
    #[error("transition from {origin:?} to {destination:?} is not defined")]
    UndefinedTransition {
        /// Origin identifier.
        origin: String,
        /// Destination identifier.
        destination: String,
    },

    /// Returned when a rate is non-finite or not strictly positive.
    #[error("invalid rate for {origin:?} -> {destination:?}: {rate} (must be finite and > 0)")]
    InvalidRate {
        /// Origin identifier.
        origin: String,
        /// Destination identifier.
        destination: String,
        /// The rejected rate.
        rate: f64,
    },

    /// Returned when a state is added after the transition table was built.
    #[error("cannot add state {id:?}: transitions are already defined")]
    ModelSealed {
        /// The identifier that was rejected.
        id: String,
    },
}
