//! External CLI backends (claude / codex)
//!
//! The prompt goes in as an argument, the reply comes back on stdout and is
//! parsed with the same extractor as the Gemini text.

use crate::ai_provider::AiProvider;
use crate::error::{PackwiseError, Result};
use packwise_common::{build_plan_prompt, parse_packing_plan, ChatTranscript, PackingPlan};
use tokio::process::Command;
use tracing::debug;

pub async fn generate_plan(provider: AiProvider, trip: &str) -> Result<PackingPlan> {
    let response = run_cli(provider, &build_plan_prompt(trip)).await?;
    parse_packing_plan(&response)
        .map_err(|e| PackwiseError::ApiParse(format!("{} reply: {}", provider_name(provider), e)))
}

pub async fn chat(provider: AiProvider, transcript: &ChatTranscript) -> Result<String> {
    let response = run_cli(provider, &transcript.render_prompt()).await?;
    Ok(response.trim().to_string())
}

/// Arguments after the program name
pub fn cli_args(provider: AiProvider, prompt: &str) -> Result<Vec<String>> {
    match provider {
        AiProvider::Claude => Ok(vec![
            "-p".into(),
            prompt.into(),
            "--output-format".into(),
            "text".into(),
        ]),
        AiProvider::Codex => Ok(vec!["exec".into(), prompt.into()]),
        AiProvider::Gemini => Err(PackwiseError::CliExecution(
            "gemini is served over HTTP, not a CLI".into(),
        )),
    }
}

fn provider_name(provider: AiProvider) -> &'static str {
    provider.command_name().unwrap_or("gemini")
}

async fn run_cli(provider: AiProvider, prompt: &str) -> Result<String> {
    let program = provider
        .command_name()
        .ok_or_else(|| PackwiseError::CliExecution("provider has no CLI".into()))?;
    let args = cli_args(provider, prompt)?;
    debug!(program, prompt_len = prompt.len(), "cli backend: spawning");

    // Windows needs cmd /c to resolve npm shims
    #[cfg(windows)]
    let output = Command::new("cmd")
        .arg("/c")
        .arg(program)
        .args(&args)
        .output()
        .await;

    #[cfg(not(windows))]
    let output = Command::new(program).args(&args).output().await;

    let output = output.map_err(|e| PackwiseError::CliExecution(format!("{}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PackwiseError::ApiCall(format!(
            "{} failed (code {:?}): {}",
            program,
            output.status.code(),
            stderr
        )));
    }

    let response = String::from_utf8_lossy(&output.stdout).to_string();
    debug!(len = response.len(), "cli backend: response");
    Ok(response)
}
