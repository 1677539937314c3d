//! Plan cache
//!
//! Save/load round trip through a temp directory and the fallbacks for
//! missing or unreadable cache files.

use packwise::planner::{cache_key, CacheFile, SavedPlan};
use packwise_common::{CategorySuggestion, PackingPlan, SuggestedItem};
use tempfile::tempdir;

fn sample_plan() -> PackingPlan {
    PackingPlan {
        categories: vec![CategorySuggestion {
            name: "Clothing".to_string(),
            items: vec![SuggestedItem {
                name: "Jacket".to_string(),
                reason: Some("Cold nights".to_string()),
                default_quantity: Some(1),
            }],
        }],
        ..Default::default()
    }
}

/// No cache file yet
#[test]
fn test_cache_file_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = CacheFile::load(dir.path());

    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

/// Insert, save, load again
#[test]
fn test_cache_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let key = cache_key("gemini/gemini-2.5-flash", "Oslo, 3 nights");

    let mut cache = CacheFile::load(dir.path());
    cache.insert(key.clone(), "Oslo, 3 nights".to_string(), sample_plan());
    cache.save(dir.path()).expect("cache save failed");

    let loaded = CacheFile::load(dir.path());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(&key), Some(&sample_plan()));
    assert!(loaded.get(&cache_key("claude", "Oslo, 3 nights")).is_none());
}

/// A corrupt file is treated as an empty cache
#[test]
fn test_cache_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(CacheFile::cache_path(dir.path()), "{ not json").unwrap();

    let cache = CacheFile::load(dir.path());
    assert!(cache.is_empty());
}

/// A cache written by another version is ignored
#[test]
fn test_cache_version_mismatch() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        CacheFile::cache_path(dir.path()),
        r#"{"version": 99, "entries": {}}"#,
    )
    .unwrap();

    assert!(CacheFile::load(dir.path()).is_empty());
}

/// clear reports whether there was anything to delete
#[test]
fn test_cache_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    assert!(!CacheFile::clear(dir.path()).unwrap());

    CacheFile::default().save(dir.path()).unwrap();
    assert!(CacheFile::clear(dir.path()).unwrap());
    assert!(!CacheFile::cache_path(dir.path()).exists());
}

/// Saved plan files keep the trip text next to the plan
#[test]
fn test_saved_plan_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("plan.json");

    let saved = SavedPlan { trip: "Oslo [Hiking]".to_string(), plan: sample_plan() };
    saved.save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"luggageRecommendation\""));

    let loaded = SavedPlan::load(&path).unwrap();
    assert_eq!(loaded.trip, "Oslo [Hiking]");
    assert_eq!(loaded.plan, sample_plan());
}
