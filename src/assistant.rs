//! Assistant chat REPL

use crate::ai_provider::AiProvider;
use crate::config::Config;
use crate::error::Result;
use crate::planner::{self, SavedPlan};
use dialoguer::Input;
use packwise_common::ChatTranscript;
use tracing::warn;

/// Send one turn; a failed request becomes the fallback reply
pub async fn send(
    transcript: &mut ChatTranscript,
    text: &str,
    provider: AiProvider,
    config: &Config,
) -> Option<String> {
    transcript.begin_turn(text)?;

    match planner::ask_assistant(transcript, provider, config).await {
        Ok(reply) => transcript.complete_turn(&reply),
        Err(e) => {
            warn!(error = %e, "assistant request failed");
            transcript.fail_turn();
        }
    }

    transcript.messages().last().map(|m| m.text.clone())
}

/// Interactive chat; empty line or `exit` ends it
pub async fn run_chat(saved: &SavedPlan, provider: AiProvider, config: &Config) -> Result<()> {
    let mut transcript = ChatTranscript::new(&saved.trip, &saved.plan);
    if let Some(greeting) = transcript.messages().first() {
        println!("🤖 {}\n", greeting.text);
    }

    loop {
        let line: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("exit") {
            return Ok(());
        }

        if let Some(reply) = send(&mut transcript, line, provider, config).await {
            println!("🤖 {}\n", reply);
        }
    }
}
