//! Integration tests for the matcher: extraction rules, full-match
//! discipline, and ranking.

use glossa::foundation::{
    MarkerPosition, RoleMarker, SemanticRole, SemanticValue, Token, TokenStream,
};
use glossa::languages;
use glossa::pattern::{
    HAND_AUTHORED_PRIORITY, LanguagePattern, Matcher, TemplateElement, generate,
};
use glossa::profile::tokenize;

fn stream(text: &str, profile: &glossa::LanguageProfile) -> TokenStream {
    tokenize(text, profile)
}

fn profile_matcher(
    profile: &glossa::LanguageProfile,
) -> Matcher<impl Fn(&str, &Token) -> bool + '_> {
    Matcher::new(move |expected: &str, token: &Token| profile.surface_eq(expected, token))
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn positional_and_marked_roles_extract_together() {
    let profile = languages::english();
    let patterns = generate(&profile);
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    let matcher = profile_matcher(&profile);
    let result = matcher
        .try_pattern(&stream("toggle .active on #button", &profile), toggle)
        .unwrap();
    assert_eq!(
        result.bindings[&SemanticRole::Patient],
        SemanticValue::Selector(".active".to_string())
    );
    assert_eq!(
        result.bindings[&SemanticRole::Destination],
        SemanticValue::Selector("#button".to_string())
    );
}

#[test]
fn marker_alternatives_are_accepted() {
    let profile = languages::english();
    let patterns = generate(&profile);
    let add = patterns.iter().find(|p| p.command == "add").unwrap();
    let matcher = profile_matcher(&profile);
    for text in ["add .item on #list", "add .item to #list", "add .item into #list"] {
        let result = matcher.try_pattern(&stream(text, &profile), add);
        assert!(result.is_some(), "{text}");
    }
}

#[test]
fn synonym_verbs_match_through_surface_eq() {
    let profile = languages::english();
    let patterns = generate(&profile);
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    let matcher = profile_matcher(&profile);
    assert!(matcher
        .try_pattern(&stream("flip .active", &profile), toggle)
        .is_some());
}

#[test]
fn free_word_order_matches_in_japanese() {
    let profile = languages::japanese();
    let patterns = generate(&profile);
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    let matcher = profile_matcher(&profile);
    // Destination before patient and patient before destination both bind.
    for text in ["#buttonに.activeを切り替え", ".activeを#buttonに切り替え"] {
        let result = matcher
            .try_pattern(&stream(text, &profile), toggle)
            .unwrap_or_else(|| panic!("no match for {text}"));
        assert_eq!(
            result.bindings[&SemanticRole::Patient],
            SemanticValue::Selector(".active".to_string()),
            "{text}"
        );
        assert_eq!(
            result.bindings[&SemanticRole::Destination],
            SemanticValue::Selector("#button".to_string()),
            "{text}"
        );
    }
}

#[test]
fn leftover_significant_tokens_reject_the_match() {
    let profile = languages::english();
    let patterns = generate(&profile);
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    let matcher = profile_matcher(&profile);
    assert!(matcher
        .try_pattern(&stream("toggle .active mysterious extra", &profile), toggle)
        .is_none());
}

#[test]
fn trailing_punctuation_is_tolerated() {
    let profile = languages::english();
    let patterns = generate(&profile);
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    let matcher = profile_matcher(&profile);
    assert!(matcher
        .try_pattern(&stream("toggle .active!", &profile), toggle)
        .is_some());
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn hand_authored_patterns_outrank_generated_ones() {
    let profile = languages::english();
    let mut candidates = generate(&profile);
    candidates.push(LanguagePattern::hand_authored(
        "en:toggle:custom",
        "en",
        "toggle",
        vec![
            TemplateElement::literal("toggle"),
            TemplateElement::positional(SemanticRole::Patient),
            TemplateElement::optional(vec![TemplateElement::marked(
                SemanticRole::Destination,
                RoleMarker::new("on", MarkerPosition::Before),
            )]),
        ],
    ));
    let matcher = profile_matcher(&profile);
    let best = matcher
        .best_match(&stream("toggle .active", &profile), candidates.iter())
        .unwrap();
    assert_eq!(best.pattern_id, "en:toggle:custom");
    assert_eq!(best.priority, HAND_AUTHORED_PRIORITY);
}

#[test]
fn more_matched_optional_groups_win_at_equal_priority() {
    let profile = languages::english();
    let rigid = LanguagePattern::generated(
        "en:toggle:rigid",
        "en",
        "toggle",
        vec![
            TemplateElement::literal("toggle"),
            TemplateElement::positional(SemanticRole::Patient),
            TemplateElement::marked(
                SemanticRole::Destination,
                RoleMarker::new("on", MarkerPosition::Before),
            ),
        ],
    );
    let flexible = LanguagePattern::generated(
        "en:toggle:flexible",
        "en",
        "toggle",
        vec![
            TemplateElement::literal("toggle"),
            TemplateElement::positional(SemanticRole::Patient),
            TemplateElement::optional(vec![TemplateElement::marked(
                SemanticRole::Destination,
                RoleMarker::new("on", MarkerPosition::Before),
            )]),
        ],
    );
    let matcher = profile_matcher(&profile);
    let best = matcher
        .best_match(
            &stream("toggle .active on #button", &profile),
            [&rigid, &flexible],
        )
        .unwrap();
    assert_eq!(best.pattern_id, "en:toggle:flexible");
    assert_eq!(best.optional_groups_matched, 1);
}

#[test]
fn registration_order_breaks_remaining_ties() {
    let profile = languages::english();
    let make = |id: &str| {
        LanguagePattern::generated(
            id,
            "en",
            "toggle",
            vec![
                TemplateElement::literal("toggle"),
                TemplateElement::positional(SemanticRole::Patient),
            ],
        )
    };
    let first = make("en:toggle:first");
    let second = make("en:toggle:second");
    let matcher = profile_matcher(&profile);
    let best = matcher
        .best_match(&stream("toggle .active", &profile), [&first, &second])
        .unwrap();
    assert_eq!(best.pattern_id, "en:toggle:first");
}

// =============================================================================
// Coverage Accounting
// =============================================================================

#[test]
fn coverage_is_one_for_fully_consumed_input() {
    let profile = languages::english();
    let patterns = generate(&profile);
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    let matcher = profile_matcher(&profile);
    let result = matcher
        .try_pattern(&stream("toggle .active on #button", &profile), toggle)
        .unwrap();
    assert!((result.coverage - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.tokens_consumed, 4);
}

#[test]
fn punctuation_does_not_dilute_coverage() {
    let profile = languages::english();
    let patterns = generate(&profile);
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    let matcher = profile_matcher(&profile);
    let result = matcher
        .try_pattern(&stream("toggle .active!", &profile), toggle)
        .unwrap();
    assert!((result.coverage - 1.0).abs() < f64::EPSILON);
}
