//! Integer state codes.

use std::fmt;

/// Compact integer code identifying a registered state.
///
/// Codes are what trajectories and transition lists store; the
/// [`StateRegistry`](crate::StateRegistry) maps them back to identifiers.
/// Ordering follows the numeric value, which fixes column order in
/// probability estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateCode(u32);

impl StateCode {
    /// Wraps a raw code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the code as a `usize`.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for StateCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
