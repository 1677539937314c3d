//! Model response parser
//!
//! Extracts the JSON document from a raw model reply (Gemini text part or
//! the stdout of an external CLI) and parses it into a PackingPlan.

use crate::error::{Error, Result};
use crate::types::PackingPlan;

/// Extract the JSON part of a model reply
///
/// Extraction order:
/// 1. a ```json ... ``` block
/// 2. the outermost raw {...} object
/// 3. error
///
/// # Examples
/// ```
/// use packwise_common::extract_json;
///
/// let response = "Sure! {\"key\": \"value\"} Have a nice trip.";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"key\": \"value\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON object found in response".into()))
}

/// Parse a generation reply into a PackingPlan
///
/// # Returns
/// * `Ok(PackingPlan)` - all four sections present
/// * `Err` - no JSON found, or a required section is missing/malformed
pub fn parse_packing_plan(response: &str) -> Result<PackingPlan> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("packing plan JSON: {}", e)))
}
