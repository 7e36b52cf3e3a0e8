//! Bidirectional mapping between state identifiers and integer codes.

use std::collections::{BTreeMap, HashMap};

use crate::error::ModelError;
use crate::state::StateCode;

/// Registry of named states.
///
/// Every identifier maps to exactly one [`StateCode`] and every code maps
/// back to exactly one identifier. States are only ever added, never
/// renamed or removed, so the two maps stay mutually inverse for the
/// lifetime of the registry.
///
/// # Example
///
/// ```
/// use chainsim_model::{StateCode, StateRegistry};
///
/// let mut registry = StateRegistry::new();
/// registry.add_with_code("failed", 2).unwrap();
/// let up = registry.add("up").unwrap();
///
/// assert_eq!(up, StateCode::new(0));
/// assert_eq!(registry.id_of(StateCode::new(2)).unwrap(), "failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateRegistry {
    codes: HashMap<String, StateCode>,
    ids: BTreeMap<StateCode, String>,
    order: Vec<StateCode>,
}

impl StateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` under the smallest code not yet in use.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateIdentifier`] if `id` is already
    /// registered.
    pub fn add(&mut self, id: impl Into<String>) -> Result<StateCode, ModelError> {
        let id = id.into();
        if self.codes.contains_key(&id) {
            return Err(ModelError::DuplicateIdentifier { id });
        }
        let code = self.next_free_code()?;
        self.bind(id, code);
        Ok(code)
    }

    /// Registers `id` under an explicit code.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ModelError::DuplicateIdentifier`] | `id` is already registered |
    /// | [`ModelError::DuplicateValue`] | `value` is bound to another state |
    /// | [`ModelError::InvalidValue`] | `value` is negative or exceeds `u32::MAX` |
    pub fn add_with_code(
        &mut self,
        id: impl Into<String>,
        value: i64,
    ) -> Result<StateCode, ModelError> {
        let id = id.into();
        if self.codes.contains_key(&id) {
            return Err(ModelError::DuplicateIdentifier { id });
        }
        let code = u32::try_from(value)
            .map(StateCode::new)
            .map_err(|_| ModelError::InvalidValue { value })?;
        if let Some(existing) = self.ids.get(&code) {
            return Err(ModelError::DuplicateValue {
                code: code.get(),
                existing: existing.clone(),
            });
        }
        self.bind(id, code);
        Ok(code)
    }

    fn bind(&mut self, id: String, code: StateCode) {
        self.codes.insert(id.clone(), code);
        self.ids.insert(code, id);
        self.order.push(code);
    }

    /// First gap in the ascending set of used codes, or one past the maximum.
    fn next_free_code(&self) -> Result<StateCode, ModelError> {
        let mut candidate: u32 = 0;
        for code in self.ids.keys() {
            if code.get() != candidate {
                break;
            }
            candidate = candidate
                .checked_add(1)
                .ok_or(ModelError::InvalidValue {
                    value: i64::from(u32::MAX) + 1,
                })?;
        }
        Ok(StateCode::new(candidate))
    }

    /// Returns the code bound to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownIdentifier`] if `id` is not registered.
    pub fn code_of(&self, id: &str) -> Result<StateCode, ModelError> {
        self.codes
            .get(id)
            .copied()
            .ok_or_else(|| ModelError::UnknownIdentifier { id: id.to_string() })
    }

    /// Returns the identifier bound to `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownValue`] if no state has this code.
    pub fn id_of(&self, code: StateCode) -> Result<&str, ModelError> {
        self.ids
            .get(&code)
            .map(String::as_str)
            .ok_or(ModelError::UnknownValue { code: code.get() })
    }

    /// Returns `true` if `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.codes.contains_key(id)
    }

    /// Returns `true` if some state has this code.
    pub fn contains_code(&self, code: StateCode) -> bool {
        self.ids.contains_key(&code)
    }

    /// Returns `true` if no states are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of registered states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().filter_map(|c| self.ids.get(c).map(String::as_str))
    }

    /// Codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = StateCode> + '_ {
        self.ids.keys().copied()
    }

    /// `(id, code)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, StateCode)> + '_ {
        self.order
            .iter()
            .filter_map(|&c| self.ids.get(&c).map(|id| (id.as_str(), c)))
    }

    /// Codes in ascending order, collected.
    pub fn sorted_codes(&self) -> Vec<StateCode> {
        self.codes().collect()
    }
}
