//! Per-origin transition rates for a continuous-time Markov chain.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ModelError;
use crate::registry::StateRegistry;
use crate::state::StateCode;

/// One outgoing edge: the destination state and its exponential rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    destination: StateCode,
    rate: f64,
}

impl Transition {
    /// Returns the destination code.
    pub fn destination(&self) -> StateCode {
        self.destination
    }

    /// Returns the rate (events per unit time).
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

/// Adjacency lists of `(destination, rate)` pairs keyed by origin code.
///
/// The table is bound to one [`StateRegistry`], shared through an [`Arc`]
/// so that simulation workers and result sets can hold it read-only.
/// Every registered code has a list, possibly empty; an empty list marks
/// an absorbing state.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    registry: Arc<StateRegistry>,
    outgoing: BTreeMap<StateCode, Vec<Transition>>,
}

impl TransitionTable {
    /// Creates a table with no transitions for every state in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyModel`] if the registry has no states.
    pub fn new(registry: Arc<StateRegistry>) -> Result<Self, ModelError> {
        if registry.is_empty() {
            return Err(ModelError::EmptyModel);
        }
        let outgoing = registry.codes().map(|c| (c, Vec::new())).collect();
        Ok(Self { registry, outgoing })
    }

    /// Returns the registry this table was built against.
    pub fn registry(&self) -> &Arc<StateRegistry> {
        &self.registry
    }

    /// Adds a transition from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::UnknownIdentifier`] | either state is not registered |
    /// | [`ModelError::SelfLoop`] | `origin == destination` |
    /// | [`ModelError::DuplicateTransition`] | the pair already has a rate |
    /// | [`ModelError::InvalidRate`] | `rate` is non-finite or `<= 0` |
    pub fn add(&mut self, origin: &str, destination: &str, rate: f64) -> Result<(), ModelError> {
        let from = self.registry.code_of(origin)?;
        let to = self.registry.code_of(destination)?;
        if from == to {
            return Err(ModelError::SelfLoop {
                id: origin.to_string(),
            });
        }
        if self.position(from, to).is_some() {
            return Err(ModelError::DuplicateTransition {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }
        validate_rate(origin, destination, rate)?;
        self.outgoing.entry(from).or_default().push(Transition {
            destination: to,
            rate,
        });
        Ok(())
    }

    /// Replaces the rate of an existing transition, keeping its list position.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::UnknownIdentifier`] | either state is not registered |
    /// | [`ModelError::UndefinedTransition`] | the pair was never added |
    /// | [`ModelError::InvalidRate`] | `rate` is non-finite or `<= 0` |
    pub fn modify(
        &mut self,
        origin: &str,
        destination: &str,
        rate: f64,
    ) -> Result<(), ModelError> {
        let from = self.registry.code_of(origin)?;
        let to = self.registry.code_of(destination)?;
        let Some(idx) = self.position(from, to) else {
            return Err(ModelError::UndefinedTransition {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        };
        validate_rate(origin, destination, rate)?;
        if let Some(list) = self.outgoing.get_mut(&from) {
            list[idx].rate = rate;
        }
        Ok(())
    }

    fn position(&self, from: StateCode, to: StateCode) -> Option<usize> {
        self.outgoing
            .get(&from)?
            .iter()
            .position(|t| t.destination == to)
    }

    /// Returns a copy of the outgoing transitions of `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownValue`] if no state has this code.
    pub fn transitions_from(&self, origin: StateCode) -> Result<Vec<Transition>, ModelError> {
        self.outgoing
            .get(&origin)
            .cloned()
            .ok_or(ModelError::UnknownValue { code: origin.get() })
    }

    /// Borrowed view of the outgoing transitions of `origin`.
    ///
    /// Unknown codes yield an empty slice.
    pub fn outgoing(&self, origin: StateCode) -> &[Transition] {
        self.outgoing
            .get(&origin)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the rate from `origin` to `destination`, if defined.
    pub fn rate(&self, origin: &str, destination: &str) -> Result<Option<f64>, ModelError> {
        let from = self.registry.code_of(origin)?;
        let to = self.registry.code_of(destination)?;
        Ok(self.position(from, to).map(|i| self.outgoing[&from][i].rate))
    }

    /// Total rate of leaving `origin`; the holding time there has mean `1 / exit_rate`.
    pub fn exit_rate(&self, origin: StateCode) -> f64 {
        self.outgoing(origin).iter().map(|t| t.rate).sum()
    }

    /// Returns `true` if `code` has no outgoing transitions.
    pub fn is_absorbing(&self, code: StateCode) -> bool {
        self.outgoing(code).is_empty()
    }

    /// Codes of all absorbing states, ascending.
    pub fn absorbing_codes(&self) -> Vec<StateCode> {
        self.outgoing
            .iter()
            .filter(|(_, list)| list.is_empty())
            .map(|(&c, _)| c)
            .collect()
    }

    /// Total number of transitions.
    pub fn len(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    /// Returns `true` if no transitions are defined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_rate(origin: &str, destination: &str, rate: f64) -> Result<(), ModelError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ModelError::InvalidRate {
            origin: origin.to_string(),
            destination: destination.to_string(),
            rate,
        });
    }
    Ok(())
}
