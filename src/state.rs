//! Crossing configurations and the legal-move rule.
//!
//! A `State` records which bank each item occupies, nothing more. Search
//! provenance (how a state was reached) lives in the engine's arena, so
//! equality and hashing depend on the flags alone.

use std::fmt;

use smallvec::SmallVec;

/// Inline flag storage; rosters up to 16 items never touch the heap.
type Flags = SmallVec<[bool; 16]>;

/// One bank assignment per item, `true` = left bank.
///
/// Item 0 is the ferry operator and takes part in every crossing. Two
/// states with the same flags are the same state; states of different
/// lengths (different rosters) are unequal, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    items_left: Flags,
}

impl State {
    /// Builds a state from per-item left-bank flags.
    pub fn new(items_left: impl IntoIterator<Item = bool>) -> Self {
        Self {
            items_left: items_left.into_iter().collect(),
        }
    }

    /// Number of items tracked by this configuration.
    pub fn len(&self) -> usize {
        self.items_left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items_left.is_empty()
    }

    /// The raw flag sequence, index-aligned with the roster.
    pub fn flags(&self) -> &[bool] {
        &self.items_left
    }

    /// All configurations reachable in one crossing.
    ///
    /// The operator crosses alone first, then once with each item that
    /// currently shares its bank, in roster index order. Items on the
    /// opposite bank yield nothing. The receiver is never modified, so
    /// repeated calls return the same list.
    pub fn successors(&self) -> Vec<State> {
        if self.items_left.is_empty() {
            return Vec::new();
        }
        let bank = self.items_left[0];
        let mut next = Vec::with_capacity(self.items_left.len());

        let mut alone = self.clone();
        alone.items_left[0] = !bank;
        next.push(alone);

        for i in 1..self.items_left.len() {
            if self.items_left[i] == bank {
                let mut paired = self.clone();
                paired.items_left[0] = !bank;
                paired.items_left[i] = !bank;
                next.push(paired);
            }
        }
        next
    }
}

impl fmt::Display for State {
    /// Formats the configuration in its file token form: `0 1 1 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &left) in self.items_left.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if left { "1" } else { "0" })?;
        }
        Ok(())
    }
}
