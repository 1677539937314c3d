//! Item queue builder
//!
//! Flattens the generated categories into the card sequence the triage
//! session walks through.

use crate::types::CategorySuggestion;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One suggested item waiting to be triaged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingCandidate {
    /// `{category}-{index within category}`; a repeated category name gets
    /// `#n` appended to the category part
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub default_quantity: u32,
}

impl PackingCandidate {
    pub fn new(category: &str, index: usize, name: &str) -> Self {
        Self {
            id: candidate_id(category, index),
            name: name.to_string(),
            category: category.to_string(),
            reason: None,
            default_quantity: 1,
        }
    }
}

pub fn candidate_id(category: &str, index: usize) -> String {
    format!("{}-{}", category, index)
}

/// Build the triage queue: category order first, then item order
///
/// Absent (or zero) default quantities fall back to 1.
pub fn build_queue(categories: &[CategorySuggestion]) -> Vec<PackingCandidate> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut queue = Vec::new();

    for cat in categories {
        let occurrence = seen.entry(cat.name.as_str()).or_insert(0);
        *occurrence += 1;
        let id_prefix = if *occurrence == 1 {
            cat.name.clone()
        } else {
            format!("{}#{}", cat.name, occurrence)
        };

        queue.extend(cat.items.iter().enumerate().map(|(idx, item)| PackingCandidate {
            id: candidate_id(&id_prefix, idx),
            name: item.name.clone(),
            category: cat.name.clone(),
            reason: item.reason.clone().filter(|r| !r.trim().is_empty()),
            default_quantity: item.default_quantity.filter(|&q| q > 0).unwrap_or(1),
        }));
    }

    queue
}
