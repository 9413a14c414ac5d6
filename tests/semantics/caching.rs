//! Integration tests for the analysis cache and generation-keyed
//! invalidation.

use glossa::semantics::{AnalysisCache, AnalysisOutcome, NoMatchReason};

fn miss() -> AnalysisOutcome {
    AnalysisOutcome::NoMatch(NoMatchReason::NoPatternMatched)
}

// =============================================================================
// Keying
// =============================================================================

#[test]
fn keys_separate_text_language_and_generation() {
    let base = AnalysisCache::key("toggle .a", "en", 1);
    assert_eq!(base, AnalysisCache::key("toggle .a", "en", 1));
    assert_ne!(base, AnalysisCache::key("toggle .b", "en", 1));
    assert_ne!(base, AnalysisCache::key("toggle .a", "ja", 1));
    assert_ne!(base, AnalysisCache::key("toggle .a", "en", 2));
}

// =============================================================================
// Storage
// =============================================================================

#[test]
fn negative_outcomes_are_cached_too() {
    let cache = AnalysisCache::new(8);
    let key = AnalysisCache::key("gibberish", "en", 1);
    cache.insert(key, miss());
    assert_eq!(cache.get(key), Some(miss()));
}

#[test]
fn capacity_is_enforced_with_lru_eviction() {
    let cache = AnalysisCache::new(3);
    for key in 0..3u64 {
        cache.insert(key, miss());
    }
    // Refresh 0 and 1 so 2 is the eviction victim.
    let _ = cache.get(0);
    let _ = cache.get(1);
    cache.insert(3, miss());
    assert_eq!(cache.len(), 3);
    assert!(cache.get(2).is_none());
    assert!(cache.get(0).is_some());
    assert!(cache.get(3).is_some());
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let cache = AnalysisCache::new(0);
    cache.insert(1, miss());
    cache.insert(2, miss());
    assert_eq!(cache.len(), 1);
}

#[test]
fn clear_resets_the_cache() {
    let cache = AnalysisCache::new(8);
    cache.insert(1, miss());
    cache.insert(2, miss());
    assert!(!cache.is_empty());
    cache.clear();
    assert!(cache.is_empty());
}
