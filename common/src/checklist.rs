//! Final checklist
//!
//! What the summary screen edits after the game: the finished ledger plus
//! hand-added items, minus anything the user deleted.

use crate::ledger::{Decision, LedgerSummary, Outcome};
use crate::types::PackingPlan;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<Decision>,
}

impl Checklist {
    pub fn from_decisions(items: Vec<Decision>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Decision] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Decision> + 'a {
        self.items.iter().filter(move |i| i.category == category)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Add a packed item of quantity 1. Blank names are rejected.
    pub fn add_custom(&mut self, category: &str, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = (0..)
            .map(|n| format!("custom-{}", n))
            .find(|id| !self.items.iter().any(|i| &i.id == id))?;
        self.items.push(Decision {
            id: id.clone(),
            name: name.to_string(),
            category: category.to_string(),
            quantity: 1,
            outcome: Outcome::Packed,
        });
        Some(id)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_decisions(&self.items)
    }

    pub fn share_card(&self, plan: Option<&PackingPlan>) -> ShareCard {
        let summary = self.summary();
        ShareCard {
            weather: plan.map(|p| p.weather.summary.clone()).unwrap_or_default(),
            total_quantity: summary.total_quantity,
            entries: self.items.len(),
            later: summary.deferred_count(),
        }
    }
}

/// Shareable one-glance summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCard {
    pub weather: String,
    pub total_quantity: u64,
    pub entries: usize,
    pub later: usize,
}
