//! Assistant chat transcript
//!
//! Holds the conversation and enforces one outstanding request at a time.
//! Sending is left to the caller (Gemini client or external CLI).

use crate::prompts::{assistant_greeting, build_assistant_instruction};
use crate::types::PackingPlan;
use serde::{Deserialize, Serialize};

pub const FALLBACK_REPLY: &str = "Sorry, I had trouble connecting. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ChatTranscript {
    system_instruction: String,
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl ChatTranscript {
    pub fn new(trip: &str, plan: &PackingPlan) -> Self {
        Self {
            system_instruction: build_assistant_instruction(trip, plan),
            messages: vec![ChatMessage {
                role: Role::Model,
                text: assistant_greeting(plan),
            }],
            awaiting_reply: false,
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Start a turn. Blank input, or input while a reply is pending, is
    /// refused and returns None.
    pub fn begin_turn(&mut self, text: &str) -> Option<&[ChatMessage]> {
        if self.awaiting_reply || text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            text: text.to_string(),
        });
        self.awaiting_reply = true;
        Some(&self.messages)
    }

    pub fn complete_turn(&mut self, reply: &str) {
        self.push_reply(reply.to_string());
    }

    /// The request failed: answer with the fallback text
    pub fn fail_turn(&mut self) {
        self.push_reply(FALLBACK_REPLY.to_string());
    }

    fn push_reply(&mut self, text: String) {
        if !self.awaiting_reply {
            return;
        }
        self.messages.push(ChatMessage { role: Role::Model, text });
        self.awaiting_reply = false;
    }

    /// Flatten the conversation for backends without a history API
    pub fn render_prompt(&self) -> String {
        let mut prompt = format!("{}\n\nConversation so far:\n", self.system_instruction);
        for message in &self.messages {
            let speaker = match message.role {
                Role::User => "User",
                Role::Model => "Assistant",
            };
            prompt.push_str(&format!("{}: {}\n", speaker, message.text));
        }
        prompt.push_str("Assistant:");
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> ChatTranscript {
        let mut plan = PackingPlan::default();
        plan.weather.summary = "Cold".into();
        ChatTranscript::new("Oslo in January", &plan)
    }

    #[test]
    fn test_starts_with_greeting() {
        let chat = transcript();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Model);
        assert!(chat.messages()[0].text.contains("Cold"));
        assert!(chat.system_instruction().contains("Oslo in January"));
    }

    #[test]
    fn test_turn_discipline() {
        let mut chat = transcript();
        assert!(chat.begin_turn("   ").is_none());
        assert!(chat.begin_turn("Do I need gloves?").is_some());
        assert!(chat.is_awaiting_reply());
        assert!(chat.begin_turn("Hello?").is_none());

        chat.complete_turn("Yes, bring warm gloves.");
        assert!(!chat.is_awaiting_reply());
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn test_failure_appends_fallback() {
        let mut chat = transcript();
        chat.begin_turn("Umbrella?");
        chat.fail_turn();
        assert_eq!(chat.messages().last().map(|m| m.text.as_str()), Some(FALLBACK_REPLY));
        assert!(!chat.is_awaiting_reply());
    }

    #[test]
    fn test_reply_without_turn_is_dropped() {
        let mut chat = transcript();
        chat.complete_turn("unsolicited");
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_render_prompt() {
        let mut chat = transcript();
        chat.begin_turn("What shoes?");
        let prompt = chat.render_prompt();
        assert!(prompt.contains("User: What shoes?"));
        assert!(prompt.ends_with("Assistant:"));
    }
}
