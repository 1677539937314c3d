//! Decision ledger and its summary projection
//!
//! The ledger is a stack of decisions, each tagged with the queue position
//! that produced it, so undo can pop exactly the entry of the rewound card
//! and nothing else.

use crate::gesture::Action;
use crate::queue::PackingCandidate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Packed,
    Deferred,
}

impl Outcome {
    /// Discard has no outcome: nothing is recorded for it.
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::Pack => Some(Outcome::Packed),
            Action::Defer => Some(Outcome::Deferred),
            Action::Discard => None,
        }
    }
}

/// A committed (non-discarded) triage result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub outcome: Outcome,
}

impl Decision {
    pub fn from_candidate(candidate: &PackingCandidate, quantity: u32, outcome: Outcome) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            category: candidate.category.clone(),
            quantity: quantity.max(1),
            outcome,
        }
    }

    pub fn is_deferred(&self) -> bool {
        self.outcome == Outcome::Deferred
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    position: usize,
    decision: Decision,
}

/// Append / pop-back record of decisions keyed by queue position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the decision made for the card at `position`
    pub fn push(&mut self, position: usize, decision: Decision) {
        debug_assert!(self.entries.last().map_or(true, |e| e.position < position));
        self.entries.push(Entry { position, decision });
    }

    /// Pop the last entry if it was recorded at `position`
    ///
    /// Returns `None` when the card at `position` was discarded.
    pub fn pop_at(&mut self, position: usize) -> Option<Decision> {
        match self.entries.last() {
            Some(entry) if entry.position == position => self.entries.pop().map(|e| e.decision),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn decisions(&self) -> impl Iterator<Item = &Decision> {
        self.entries.iter().map(|e| &e.decision)
    }

    pub fn to_vec(&self) -> Vec<Decision> {
        self.decisions().cloned().collect()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_decisions(self.decisions())
    }
}

/// Per-category totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub quantity: u64,
    pub entries: usize,
}

/// Read model for the summary screen and running totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// In order of first appearance
    pub categories: Vec<CategoryTotal>,
    pub total_quantity: u64,
    pub packed_count: usize,
    pub deferred: Vec<Decision>,
}

impl LedgerSummary {
    pub fn from_decisions<'a, I>(decisions: I) -> Self
    where
        I: IntoIterator<Item = &'a Decision>,
    {
        let mut summary = Self::default();

        for decision in decisions {
            match summary.categories.iter_mut().find(|c| c.name == decision.category) {
                Some(total) => {
                    total.quantity += u64::from(decision.quantity);
                    total.entries += 1;
                }
                None => summary.categories.push(CategoryTotal {
                    name: decision.category.clone(),
                    quantity: u64::from(decision.quantity),
                    entries: 1,
                }),
            }

            summary.total_quantity += u64::from(decision.quantity);
            match decision.outcome {
                Outcome::Packed => summary.packed_count += 1,
                Outcome::Deferred => summary.deferred.push(decision.clone()),
            }
        }

        summary
    }

    /// Total quantity for a category; 0 when nothing was kept in it
    pub fn category_total(&self, category: &str) -> u64 {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map_or(0, |c| c.quantity)
    }

    pub fn deferred_count(&self) -> usize {
        self.deferred.len()
    }

    pub fn entry_count(&self) -> usize {
        self.packed_count + self.deferred.len()
    }
}
