//! Forward/inverse label-to-code tables.
//!
//! A `Codebook` assigns each distinct label a positive integer code in
//! first-seen order and keeps the exact inverse alongside. Code 0 is
//! reserved for unknown values and is never assigned, so lookups of
//! unseen labels can fall back to it without touching the tables.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Reserved code for labels absent from the forward map.
pub const UNKNOWN_CODE: u32 = 0;

/// Bidirectional label <-> code mapping with codes assigned 1..=N.
///
/// Lookups never mutate the tables: `code_for` returns [`UNKNOWN_CODE`]
/// for absent keys instead of inserting a default entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Codebook<L>
where
    L: Eq + Hash,
{
    codes: HashMap<L, u32>,
    /// Labels in assignment order; code `c` inverts to `labels[c - 1]`.
    labels: Vec<L>,
}

impl<L> Codebook<L>
where
    L: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Codebook {
            codes: HashMap::new(),
            labels: Vec::new(),
        }
    }

    /// Assign the next unused code to a first-seen label.
    ///
    /// Labels already in the table keep their original code.
    pub fn observe(&mut self, label: L) {
        if self.codes.contains_key(&label) {
            return;
        }
        let code = self.labels.len() as u32 + 1;
        self.codes.insert(label.clone(), code);
        self.labels.push(label);
    }

    /// Code for `label`, or [`UNKNOWN_CODE`] if it was never observed.
    pub fn code_for(&self, label: &L) -> u32 {
        self.codes.get(label).copied().unwrap_or(UNKNOWN_CODE)
    }

    /// Label assigned to `code`, or `None` for code 0 and unassigned codes.
    pub fn label_for(&self, code: u32) -> Option<&L> {
        if code == UNKNOWN_CODE {
            return None;
        }
        self.labels.get(code as usize - 1)
    }

    /// Number of distinct labels observed.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in code-assignment order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl<L> Default for Codebook<L>
where
    L: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
