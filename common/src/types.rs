//! Generation-service response types
//!
//! Shared by the CLI, the plan cache and the chat assistant:
//! - PackingPlan: the whole generated document
//! - Weather / LuggageRecommendation: passed through to presentation and chat
//! - CategorySuggestion: the only part the triage core consumes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generated packing plan (weather, tips, luggage, categorized items)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingPlan {
    pub weather: Weather,
    pub destination_tips: Vec<String>,
    pub luggage_recommendation: LuggageRecommendation,
    pub categories: Vec<CategorySuggestion>,
}

/// Inferred weather at the destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weather {
    pub summary: String,     // e.g. "Hot and Humid"
    pub temp_range: String,  // e.g. "25°C - 32°C"
    pub rain_prob: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuggageRecommendation {
    pub package_name: String,
    pub items: Vec<SuggestedLuggage>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedLuggage {
    #[serde(rename = "type")]
    pub kind: LuggageKind,

    /// Inches for suitcases, liters for bags. 0 when the model omitted it.
    #[serde(default)]
    pub size: u32,

    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuggageKind {
    Suitcase,
    Backpack,
    Handbag,
}

impl LuggageKind {
    pub const ALL: [LuggageKind; 3] = [LuggageKind::Suitcase, LuggageKind::Backpack, LuggageKind::Handbag];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            LuggageKind::Suitcase => "Suitcase",
            LuggageKind::Backpack => "Backpack",
            LuggageKind::Handbag => "Handbag",
        }
    }

    /// Size given to luggage the user adds by hand
    pub fn default_size(&self) -> u32 {
        match self {
            LuggageKind::Suitcase => 24,
            LuggageKind::Backpack | LuggageKind::Handbag => 20,
        }
    }
}

impl fmt::Display for LuggageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for LuggageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "suitcase" | "s" => Ok(LuggageKind::Suitcase),
            "backpack" | "b" => Ok(LuggageKind::Backpack),
            "handbag" | "h" => Ok(LuggageKind::Handbag),
            _ => Err(format!("Unknown luggage type: {}. Use suitcase, backpack, or handbag", s)),
        }
    }
}

/// One category of suggested items, in model order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub name: String,
    pub items: Vec<SuggestedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedItem {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_quantity: Option<u32>,
}

impl PackingPlan {
    /// Total number of suggested items across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_plan() {
        let json = r#"{
            "weather": {"summary": "Hot and Humid", "tempRange": "25°C - 32°C", "rainProb": "High"},
            "destinationTips": ["Chongqing has many stairs"],
            "luggageRecommendation": {
                "packageName": "Urban Light Travel Setup",
                "items": [{"type": "backpack", "size": 30, "reason": "stairs"}],
                "reason": "Light and mobile"
            },
            "categories": [
                {"name": "Clothing", "items": [{"name": "T-shirt", "reason": "heat", "defaultQuantity": 3}]}
            ]
        }"#;
        let plan: PackingPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.weather.temp_range, "25°C - 32°C");
        assert_eq!(plan.luggage_recommendation.items[0].kind, LuggageKind::Backpack);
        assert_eq!(plan.categories[0].items[0].default_quantity, Some(3));
        assert_eq!(plan.item_count(), 1);
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let json = r#"{"weather": {}, "destinationTips": [], "categories": []}"#;
        assert!(serde_json::from_str::<PackingPlan>(json).is_err());
    }

    #[test]
    fn test_optional_item_fields() {
        let item: SuggestedItem = serde_json::from_str(r#"{"name": "Passport"}"#).unwrap();
        assert_eq!(item.reason, None);
        assert_eq!(item.default_quantity, None);
    }

    #[test]
    fn test_luggage_kind_from_str() {
        assert_eq!("Suitcase".parse::<LuggageKind>(), Ok(LuggageKind::Suitcase));
        assert_eq!("b".parse::<LuggageKind>(), Ok(LuggageKind::Backpack));
        assert!("trunk".parse::<LuggageKind>().is_err());
    }
}
