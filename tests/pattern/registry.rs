//! Integration tests for the pattern registry and its generation
//! counters.

use glossa::foundation::SemanticRole;
use glossa::languages;
use glossa::pattern::{
    HAND_AUTHORED_PRIORITY, LanguagePattern, PatternRegistry, TemplateElement, generate,
};

fn custom(id: &str) -> LanguagePattern {
    LanguagePattern::hand_authored(
        id,
        "en",
        "toggle",
        vec![
            TemplateElement::literal("toggle"),
            TemplateElement::positional(SemanticRole::Patient),
        ],
    )
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn replace_installs_a_priority_sorted_set() {
    let mut registry = PatternRegistry::new();
    let profile = languages::english();
    let mut patterns = generate(&profile);
    patterns.push(custom("en:toggle:custom"));
    registry.replace("en", patterns).unwrap();

    let set = registry.get("en").unwrap();
    let first = set.iter().next().unwrap();
    assert_eq!(first.priority, HAND_AUTHORED_PRIORITY);
}

#[test]
fn extend_layers_on_top_of_generated_patterns() {
    let mut registry = PatternRegistry::new();
    let profile = languages::english();
    registry.replace("en", generate(&profile)).unwrap();
    let before = registry.get("en").unwrap().len();

    registry.extend("en", vec![custom("en:toggle:custom")]).unwrap();
    let set = registry.get("en").unwrap();
    assert_eq!(set.len(), before + 1);
    assert_eq!(set.iter().next().unwrap().id, "en:toggle:custom");
}

#[test]
fn for_command_filters_in_priority_order() {
    let mut registry = PatternRegistry::new();
    registry
        .replace("en", generate(&languages::english()))
        .unwrap();
    registry.extend("en", vec![custom("en:toggle:custom")]).unwrap();

    let set = registry.get("en").unwrap();
    let ids: Vec<_> = set.for_command("toggle").map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["en:toggle:custom", "en:toggle:generated"]);
}

// =============================================================================
// Generations
// =============================================================================

#[test]
fn every_mutation_bumps_the_generation() {
    let mut registry = PatternRegistry::new();
    assert_eq!(registry.generation("en"), 0);
    registry
        .replace("en", generate(&languages::english()))
        .unwrap();
    assert_eq!(registry.generation("en"), 1);
    registry.extend("en", vec![custom("en:toggle:custom")]).unwrap();
    assert_eq!(registry.generation("en"), 2);
}

#[test]
fn generations_are_per_language() {
    let mut registry = PatternRegistry::new();
    registry
        .replace("en", generate(&languages::english()))
        .unwrap();
    registry
        .replace("ja", generate(&languages::japanese()))
        .unwrap();
    registry.extend("en", vec![custom("en:toggle:custom")]).unwrap();
    assert_eq!(registry.generation("en"), 2);
    assert_eq!(registry.generation("ja"), 1);
}

#[test]
fn snapshots_survive_later_registrations() {
    let mut registry = PatternRegistry::new();
    registry
        .replace("en", generate(&languages::english()))
        .unwrap();
    let snapshot = registry.get("en").unwrap();
    let before = snapshot.len();
    registry.extend("en", vec![custom("en:toggle:custom")]).unwrap();
    // The old snapshot is unchanged; a fresh one sees the extension.
    assert_eq!(snapshot.len(), before);
    assert_eq!(registry.get("en").unwrap().len(), before + 1);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn invalid_templates_never_enter_the_registry() {
    let mut registry = PatternRegistry::new();
    registry
        .replace("en", generate(&languages::english()))
        .unwrap();
    let bad = LanguagePattern::hand_authored("en:bad", "en", "toggle", vec![]);
    assert!(registry.extend("en", vec![custom("ok"), bad]).is_err());
    // Neither pattern landed and the generation did not move.
    assert_eq!(registry.generation("en"), 1);
    assert!(!registry.get("en").unwrap().iter().any(|p| p.id == "ok"));
}

#[test]
fn languages_lists_registered_codes_sorted() {
    let mut registry = PatternRegistry::new();
    registry
        .replace("ja", generate(&languages::japanese()))
        .unwrap();
    registry
        .replace("en", generate(&languages::english()))
        .unwrap();
    assert_eq!(registry.languages(), vec!["en", "ja"]);
}
