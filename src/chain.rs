//! Incrementally built chain: states first, then transitions, then runs.

use std::sync::Arc;

use chainsim_model::{ModelError, StateCode, StateRegistry, TransitionTable};
use chainsim_results::ResultSet;
use chainsim_simulate::{SimulationConfig, SimulationError};

/// A continuous-time Markov chain under construction.
///
/// States are added first. The first call to [`define_transition`]
/// (or [`simulate`]) builds the transition table and seals the state set;
/// later [`add_state`] calls fail with [`ModelError::ModelSealed`].
///
/// [`define_transition`]: Chain::define_transition
/// [`simulate`]: Chain::simulate
/// [`add_state`]: Chain::add_state
///
/// # Example
///
/// ```
/// use chainsim::{Chain, SimulationConfig};
///
/// let mut chain = Chain::new();
/// chain.add_state("up").unwrap();
/// chain.add_state("down").unwrap();
/// chain.define_transition("up", "down", 0.1).unwrap();
///
/// let config = SimulationConfig::new(0.0, 50.0, 100).with_seed(3);
/// let results = chain.simulate("up", &config).unwrap();
/// assert_eq!(results.len(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chain {
    registry: Arc<StateRegistry>,
    transitions: Option<TransitionTable>,
}

impl Chain {
    /// Creates a chain with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state under the smallest free code.
    pub fn add_state(&mut self, id: impl Into<String>) -> Result<StateCode, ModelError> {
        let id = id.into();
        self.unsealed_registry(&id)?.add(id)
    }

    /// Adds a state under an explicit code.
    pub fn add_state_with_code(
        &mut self,
        id: impl Into<String>,
        value: i64,
    ) -> Result<StateCode, ModelError> {
        let id = id.into();
        self.unsealed_registry(&id)?.add_with_code(id, value)
    }

    fn unsealed_registry(&mut self, id: &str) -> Result<&mut StateRegistry, ModelError> {
        if self.transitions.is_some() {
            return Err(ModelError::ModelSealed { id: id.to_string() });
        }
        Ok(Arc::make_mut(&mut self.registry))
    }

    /// Defines the rate of jumping from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyModel`] if no states exist yet, otherwise
    /// whatever [`TransitionTable::add`] returns.
    pub fn define_transition(
        &mut self,
        origin: &str,
        destination: &str,
        rate: f64,
    ) -> Result<(), ModelError> {
        self.seal()?.add(origin, destination, rate)
    }

    /// Changes the rate of an already defined transition.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownIdentifier`] for an unregistered id and
    /// [`ModelError::UndefinedTransition`] if no transitions exist yet,
    /// otherwise whatever [`TransitionTable::modify`] returns.
    pub fn modify_transition(
        &mut self,
        origin: &str,
        destination: &str,
        rate: f64,
    ) -> Result<(), ModelError> {
        self.registry.code_of(origin)?;
        self.registry.code_of(destination)?;
        match self.transitions.as_mut() {
            Some(table) => table.modify(origin, destination, rate),
            None => Err(ModelError::UndefinedTransition {
                origin: origin.to_string(),
                destination: destination.to_string(),
            }),
        }
    }

    /// Builds the transition table if needed and returns it.
    pub fn seal(&mut self) -> Result<&mut TransitionTable, ModelError> {
        if self.transitions.is_none() {
            self.transitions = Some(TransitionTable::new(Arc::clone(&self.registry))?);
        }
        self.transitions.as_mut().ok_or(ModelError::EmptyModel)
    }

    /// Returns the state registry.
    pub fn registry(&self) -> &Arc<StateRegistry> {
        &self.registry
    }

    /// Returns the transition table, if one has been built.
    pub fn transitions(&self) -> Option<&TransitionTable> {
        self.transitions.as_ref()
    }

    /// Simulates runs from `initial_state`; see [`chainsim_simulate::simulate`].
    pub fn simulate(
        &mut self,
        initial_state: &str,
        config: &SimulationConfig,
    ) -> Result<ResultSet, SimulationError> {
        if !self.registry.contains(initial_state) {
            return Err(SimulationError::InvalidInitialState {
                id: initial_state.to_string(),
            });
        }
        let table = self.seal()?;
        chainsim_simulate::simulate(table, initial_state, config)
    }
}
