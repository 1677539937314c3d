pub mod cache;
pub mod cli_backend;
pub mod gemini;

pub use cache::{cache_key, CacheFile};
pub use gemini::GeminiClient;

use crate::ai_provider::AiProvider;
use crate::config::Config;
use crate::error::{PackwiseError, Result};
use packwise_common::{ChatTranscript, PackingPlan};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Plan file written by `packwise plan` and read by `pack` / `chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub trip: String,
    pub plan: PackingPlan,
}

impl SavedPlan {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PackwiseError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn backend_id(provider: AiProvider, config: &Config) -> String {
    match provider {
        AiProvider::Gemini => format!("gemini/{}", config.model),
        other => other.command_name().unwrap_or_default().to_string(),
    }
}

/// Ask the generation service for a plan
///
/// With `use_cache`, a plan generated earlier for the same trip and backend
/// is returned without a request.
pub async fn generate_plan(
    trip: &str,
    provider: AiProvider,
    config: &Config,
    use_cache: bool,
) -> Result<PackingPlan> {
    if trip.trim().is_empty() {
        return Err(PackwiseError::EmptyTrip);
    }

    let key = cache_key(&backend_id(provider, config), trip);
    let cache_dir = if use_cache { CacheFile::default_dir().ok() } else { None };

    if let Some(dir) = cache_dir.as_deref() {
        if let Some(plan) = CacheFile::load(dir).get(&key) {
            info!("plan cache hit");
            return Ok(plan.clone());
        }
    }

    debug!(?provider, trip_len = trip.len(), "generate_plan: requesting");
    let plan = match provider {
        AiProvider::Gemini => GeminiClient::from_config(config)?.generate_plan(trip).await?,
        other => cli_backend::generate_plan(other, trip).await?,
    };

    if let Some(dir) = cache_dir.as_deref() {
        let mut cache = CacheFile::load(dir);
        cache.insert(key, trip.to_string(), plan.clone());
        cache.save(dir)?;
    }

    Ok(plan)
}

/// Send the pending chat turn and return the reply text
pub async fn ask_assistant(
    transcript: &ChatTranscript,
    provider: AiProvider,
    config: &Config,
) -> Result<String> {
    match provider {
        AiProvider::Gemini => GeminiClient::from_config(config)?.chat(transcript).await,
        other => cli_backend::chat(other, transcript).await,
    }
}
