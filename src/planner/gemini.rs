//! Gemini REST client
//!
//! - generate_plan: one structured-output request (responseSchema) per trip
//! - chat: one request per turn, with the plan as systemInstruction and the
//!   running transcript as contents

use crate::config::Config;
use crate::error::{PackwiseError, Result};
use packwise_common::{build_plan_prompt, parse_packing_plan, ChatTranscript, PackingPlan, Role};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// OpenAPI-subset schema mirroring PackingPlan
pub fn plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "weather": {
                "type": "OBJECT",
                "properties": {
                    "summary": { "type": "STRING" },
                    "tempRange": { "type": "STRING" },
                    "rainProb": { "type": "STRING" }
                }
            },
            "destinationTips": { "type": "ARRAY", "items": { "type": "STRING" } },
            "luggageRecommendation": {
                "type": "OBJECT",
                "properties": {
                    "packageName": { "type": "STRING" },
                    "items": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "type": { "type": "STRING", "enum": ["suitcase", "backpack", "handbag"] },
                                "size": { "type": "INTEGER" },
                                "reason": { "type": "STRING" }
                            }
                        }
                    },
                    "reason": { "type": "STRING" }
                },
                "required": ["items", "reason", "packageName"]
            },
            "categories": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "items": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "reason": { "type": "STRING" },
                                    "defaultQuantity": { "type": "INTEGER" }
                                },
                                "required": ["name", "defaultQuantity"]
                            }
                        }
                    },
                    "required": ["name", "items"]
                }
            }
        },
        "required": ["luggageRecommendation", "categories", "weather", "destinationTips"]
    })
}

pub fn build_plan_request(trip: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content::text(None, build_plan_prompt(trip))],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".into(),
            response_schema: plan_response_schema(),
        }),
    }
}

/// Chat request for the transcript as it stands
///
/// The greeting is UI only; history sent to the API starts at the first
/// user message.
pub fn build_chat_request(transcript: &ChatTranscript) -> GeminiRequest {
    let contents = transcript
        .messages()
        .iter()
        .skip_while(|m| m.role == Role::Model)
        .map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Model => "model",
            };
            Content::text(Some(role), m.text.clone())
        })
        .collect();

    GeminiRequest {
        contents,
        system_instruction: Some(Content::text(None, transcript.system_instruction())),
        generation_config: None,
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn generate_plan(&self, trip: &str) -> Result<PackingPlan> {
        let text = self.generate(&build_plan_request(trip)).await?;
        Ok(parse_packing_plan(&text)?)
    }

    pub async fn chat(&self, transcript: &ChatTranscript) -> Result<String> {
        self.generate(&build_chat_request(transcript)).await
    }

    async fn generate(&self, request: &GeminiRequest) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!(model = %self.model, contents = request.contents.len(), "gemini: request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PackwiseError::ApiCall(format!("Gemini returned {}: {}", status, body)));
        }

        let payload: GeminiResponse = response.json().await?;
        let text = first_text(payload)?;
        debug!(len = text.len(), "gemini: response");
        Ok(text)
    }
}

fn first_text(payload: GeminiResponse) -> Result<String> {
    payload
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text.filter(|t| !t.trim().is_empty()))
        .ok_or_else(|| PackwiseError::ApiParse("No response from AI".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> ChatTranscript {
        let mut plan = PackingPlan::default();
        plan.weather.summary = "Sunny".into();
        ChatTranscript::new("Lisbon in May", &plan)
    }

    #[test]
    fn test_plan_request_shape() {
        let body = serde_json::to_value(build_plan_request("Lisbon in May")).unwrap();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["required"].as_array().unwrap().len(), 4);
        assert!(body["contents"][0]["parts"][0]["text"].as_str().unwrap().contains("Lisbon in May"));
        assert!(body.get("systemInstruction").is_none());
        assert!(body["contents"][0].get("role").is_none());
    }

    #[test]
    fn test_chat_request_skips_greeting() {
        let mut chat = transcript();
        chat.begin_turn("Sunscreen?");
        chat.complete_turn("Yes.");
        chat.begin_turn("Hat?");

        let body = serde_json::to_value(build_chat_request(&chat)).unwrap();
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert!(body["systemInstruction"]["parts"][0]["text"].as_str().unwrap().contains("Lisbon"));
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_first_text() {
        let payload: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "hello"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(first_text(payload).unwrap(), "hello");
    }

    #[test]
    fn test_first_text_empty() {
        let payload: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(first_text(payload), Err(PackwiseError::ApiParse(_))));

        let blocked: GeminiResponse = serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(first_text(blocked).is_err());
    }
}
