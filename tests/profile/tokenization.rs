//! Integration tests for the four tokenization boundary strategies,
//! exercised through the sample profiles.

use glossa::foundation::TokenKind;
use glossa::languages;
use glossa::profile::tokenize;

fn words(text: &str, profile: &glossa::LanguageProfile) -> Vec<String> {
    tokenize(text, profile)
        .iter()
        .map(|t| t.text.clone())
        .collect()
}

// =============================================================================
// Space Boundary (English)
// =============================================================================

#[test]
fn space_splits_on_whitespace() {
    let profile = languages::english();
    assert_eq!(
        words("toggle .active on #button", &profile),
        vec!["toggle", ".active", "on", "#button"]
    );
}

#[test]
fn space_splits_trailing_punctuation() {
    let profile = languages::english();
    let stream = tokenize("toggle .menu!", &profile);
    assert_eq!(stream.len(), 3);
    assert_eq!(stream.get(2).unwrap().kind, TokenKind::Punctuation);
}

#[test]
fn space_keeps_quoted_strings_whole() {
    let profile = languages::english();
    let stream = tokenize("log \"hello world\"", &profile);
    assert_eq!(stream.len(), 2);
    assert_eq!(stream.get(1).unwrap().text, "\"hello world\"");
    assert_eq!(stream.get(1).unwrap().kind, TokenKind::Literal);
}

#[test]
fn space_never_detaches_from_english_words() {
    // "pluto" ends in "to" and "on" ends a preposition, but English does
    // not carry attached markers, so words stay whole.
    let profile = languages::english();
    assert_eq!(
        words("put pluto on #table", &profile),
        vec!["put", "pluto", "on", "#table"]
    );
}

// =============================================================================
// Particle Boundary (Japanese)
// =============================================================================

#[test]
fn particle_detaches_known_surfaces() {
    let profile = languages::japanese();
    assert_eq!(
        words("#buttonに.activeを切り替え", &profile),
        vec!["#button", "に", ".active", "を", "切り替え"]
    );
}

#[test]
fn particle_marks_particles_as_markers() {
    let profile = languages::japanese();
    let stream = tokenize("メニューを表示", &profile);
    let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Reference, TokenKind::Marker, TokenKind::Keyword]
    );
}

// =============================================================================
// Character Boundary (Chinese)
// =============================================================================

#[test]
fn character_segments_without_delimiters() {
    let profile = languages::chinese();
    assert_eq!(
        words("切换.active在#button", &profile),
        vec!["切换", ".active", "在", "#button"]
    );
}

#[test]
fn character_extracts_numbers_from_runs() {
    let profile = languages::chinese();
    let stream = tokenize("重复3次切换.light", &profile);
    let count = stream.iter().find(|t| t.text == "3").unwrap();
    assert_eq!(count.kind, TokenKind::Literal);
}

// =============================================================================
// Suffix Boundary (Turkish)
// =============================================================================

#[test]
fn suffix_strips_case_endings() {
    let profile = languages::turkish();
    assert_eq!(
        words("#buttona .activeyi değiştir", &profile),
        vec!["#button", "a", ".active", "yi", "değiştir"]
    );
}

#[test]
fn suffix_prefers_the_longest_ending() {
    // "yi" must win over its one-character tail "i".
    let profile = languages::turkish();
    let stream = tokenize(".activeyi değiştir", &profile);
    assert_eq!(stream.get(0).unwrap().text, ".active");
    assert_eq!(stream.get(1).unwrap().text, "yi");
}

#[test]
fn suffix_leaves_command_words_whole() {
    // "ekle" ends in the destination suffix "e" but is a command surface.
    let profile = languages::turkish();
    assert_eq!(words("ekle", &profile), vec!["ekle"]);
}

// =============================================================================
// Attached Markers over Spaces (Korean)
// =============================================================================

#[test]
fn korean_detaches_fused_postpositions() {
    let profile = languages::korean();
    assert_eq!(
        words("#button에 .active를 전환", &profile),
        vec!["#button", "에", ".active", "를", "전환"]
    );
}

#[test]
fn korean_keeps_short_stems_whole() {
    // A one-character stem would be mangled by detachment.
    let profile = languages::korean();
    let stream = tokenize("에", &profile);
    assert_eq!(stream.len(), 1);
}

// =============================================================================
// Shared Behavior
// =============================================================================

#[test]
fn empty_input_is_empty_for_every_language() {
    for profile in languages::all() {
        assert!(tokenize("", &profile).is_empty(), "{}", profile.code);
        assert!(tokenize("   ", &profile).is_empty(), "{}", profile.code);
    }
}

#[test]
fn unknown_words_become_references() {
    for profile in languages::all() {
        let stream = tokenize("zzzqqq", &profile);
        assert_eq!(stream.len(), 1, "{}", profile.code);
    }
}
