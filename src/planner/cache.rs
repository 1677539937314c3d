//! Plan cache
//!
//! Keyed by a SHA-256 of provider, model and trip text so the same trip is
//! not sent to the model twice.

use crate::error::{PackwiseError, Result};
use packwise_common::PackingPlan;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::warn;

const CACHE_FILE_NAME: &str = "plans.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    version: u32,
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub trip: String,
    pub created_at: String,
    pub plan: PackingPlan,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    /// Default location: `<cache dir>/packwise`
    pub fn default_dir() -> Result<PathBuf> {
        let base = dirs::cache_dir()
            .ok_or_else(|| PackwiseError::Config("cache directory not found".into()))?;
        Ok(base.join("packwise"))
    }

    pub fn cache_path(dir: &Path) -> PathBuf {
        dir.join(CACHE_FILE_NAME)
    }

    /// Load, falling back to an empty cache on any problem
    pub fn load(dir: &Path) -> Self {
        let cache_path = Self::cache_path(dir);
        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        match serde_json::from_reader::<_, CacheFile>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(cache) => {
                warn!(found = cache.version, "plan cache version mismatch, starting fresh");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "plan cache unreadable, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let file = File::create(Self::cache_path(dir))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Returns whether a cache file existed
    pub fn clear(dir: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(dir);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn get(&self, key: &str) -> Option<&PackingPlan> {
        self.entries.get(key).map(|e| &e.plan)
    }

    pub fn insert(&mut self, key: String, trip: String, plan: PackingPlan) {
        let created_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.entries.insert(key, CacheEntry { trip, created_at, plan });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// Cache key for a trip under a given backend
pub fn cache_key(backend: &str, trip: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(backend.as_bytes());
    hasher.update([0u8]);
    hasher.update(trip.trim().as_bytes());
    hex::encode(hasher.finalize())
}
