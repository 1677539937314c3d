//! Prompt builders
//!
//! - TRIP_TAGS: quick tags offered next to the free-text trip description
//! - compose_trip_description: free text + tags → the text sent to the model
//! - build_plan_prompt: generation request
//! - build_assistant_instruction / assistant_greeting: chat priming

use crate::types::PackingPlan;

/// Quick tags
pub const TRIP_TAGS: &[&str] = &[
    "Domestic",
    "Family Visit",
    "Hiking",
    "International",
    "Business",
    "Beach",
];

/// Combine the free-text plan and the selected tags
///
/// Returns `None` when there is nothing to send.
pub fn compose_trip_description<S: AsRef<str>>(text: &str, tags: &[S]) -> Option<String> {
    let text = text.trim();
    let tags = tags
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if text.is_empty() && tags.is_empty() {
        return None;
    }

    Some(format!("User Plan: {}\nTags: {}", text, tags).trim().to_string())
}

/// Generation prompt
///
/// # Arguments
/// * `trip` - composed trip description
pub fn build_plan_prompt(trip: &str) -> String {
    format!(
        r#"User Travel Plan: "{trip}"

Generate a comprehensive travel packing list and luggage recommendation.

CRITICAL INSTRUCTIONS:
1. LANGUAGE: All output MUST be in English.
2. INTELLIGENCE:
   - INFER the likely weather for the date/location (do not ask the user).
   - INFER destination specific terrain/challenges (e.g. many stairs -> suggest a backpack).
3. LUGGAGE: Create a "Package Name" (e.g. "Family Light Travel Set"). Luggage type is one of suitcase, backpack, handbag.
4. ITEMS: Be granular. Every item has a name, a short reason and an integer defaultQuantity.

Output ONLY a JSON object in this format:
{{
  "weather": {{"summary": "", "tempRange": "", "rainProb": ""}},
  "destinationTips": [""],
  "luggageRecommendation": {{
    "packageName": "",
    "items": [{{"type": "suitcase", "size": 24, "reason": ""}}],
    "reason": ""
  }},
  "categories": [
    {{"name": "", "items": [{{"name": "", "reason": "", "defaultQuantity": 1}}]}}
  ]
}}"#
    )
}

/// System instruction for the assistant chat: the trip and the whole plan
/// are fixed context for every turn.
pub fn build_assistant_instruction(trip: &str, plan: &PackingPlan) -> String {
    let plan_json = serde_json::to_string_pretty(plan).unwrap_or_default();
    format!(
        r#"You are Packwise Assistant, a friendly travel packing expert.
Answer in English, briefly and practically. Use the trip and the generated packing plan below as context.

Trip:
{trip}

Packing plan:
{plan_json}"#
    )
}

pub fn assistant_greeting(plan: &PackingPlan) -> String {
    format!(
        "Hi! I'm your Packwise Assistant. I know you're heading to a place where it's {}. Ask me anything!",
        plan.weather.summary
    )
}
