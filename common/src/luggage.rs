//! Editable luggage set
//!
//! Seeded from the model's recommendation, then adjusted by the user before
//! the packing game starts.

use crate::types::{LuggageKind, LuggageRecommendation};
use serde::{Deserialize, Serialize};

pub const MIN_SIZE: u32 = 10;
pub const MAX_SIZE: u32 = 34;
/// One tap on the size control
pub const SIZE_STEP: i32 = 2;
const FALLBACK_SIZE: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuggageItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LuggageKind,
    pub size: u32,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuggageSet {
    items: Vec<LuggageItem>,
}

impl LuggageSet {
    pub fn from_recommendation(recommendation: &LuggageRecommendation) -> Self {
        let items = recommendation
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| LuggageItem {
                id: format!("init-{}", idx),
                kind: item.kind,
                size: if item.size == 0 { FALLBACK_SIZE } else { item.size },
                label: item.kind.label().to_string(),
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[LuggageItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a piece of luggage at its default size, returning its id
    ///
    /// The id is the first `new-{n}` not already in the set.
    pub fn add(&mut self, kind: LuggageKind) -> String {
        let id = (0..)
            .map(|n| format!("new-{}", n))
            .find(|id| !self.items.iter().any(|i| &i.id == id))
            .unwrap_or_default();
        self.items.push(LuggageItem {
            id: id.clone(),
            kind,
            size: kind.default_size(),
            label: kind.label().to_string(),
        });
        id
    }

    /// Remove by id. The last remaining piece cannot be removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Change the size by `delta`, clamped to [MIN_SIZE, MAX_SIZE]
    pub fn adjust_size(&mut self, id: &str, delta: i32) -> Option<u32> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        let size = (i64::from(item.size) + i64::from(delta)).clamp(i64::from(MIN_SIZE), i64::from(MAX_SIZE));
        item.size = size as u32;
        Some(item.size)
    }
}
