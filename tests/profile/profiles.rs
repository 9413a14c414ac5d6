//! Integration tests for language profile lookups.

use glossa::foundation::{MarkerPosition, SemanticRole, Token, TokenKind};
use glossa::languages;

// =============================================================================
// Surface Lookup
// =============================================================================

#[test]
fn primary_surface_is_the_first_declared() {
    let profile = languages::english();
    assert_eq!(profile.primary_surface("toggle"), Some("toggle"));
    assert_eq!(profile.primary_surface("log"), Some("log"));
    assert_eq!(profile.primary_surface("frobnicate"), None);
}

#[test]
fn synonyms_resolve_to_the_canonical_command() {
    let profile = languages::english();
    for surface in ["toggle", "switch", "flip"] {
        assert_eq!(profile.command_for_surface(surface), Some("toggle"));
    }
    let profile = languages::spanish();
    assert_eq!(profile.command_for_surface("cambiar"), Some("toggle"));
}

#[test]
fn surface_eq_treats_synonyms_as_equal() {
    let profile = languages::english();
    let token = Token::new(TokenKind::Keyword, "flip", 0, 4);
    assert!(profile.surface_eq("toggle", &token));
    assert!(!profile.surface_eq("hide", &token));
}

// =============================================================================
// Marker Tables
// =============================================================================

#[test]
fn english_markers_sit_before_their_values() {
    let profile = languages::english();
    let marker = profile.marker(SemanticRole::Destination).unwrap();
    assert_eq!(marker.position, MarkerPosition::Before);
    assert!(marker.accepts("on"));
    assert!(marker.accepts("into"));
}

#[test]
fn japanese_markers_sit_after_their_values() {
    let profile = languages::japanese();
    let marker = profile.marker(SemanticRole::Patient).unwrap();
    assert_eq!(marker.position, MarkerPosition::After);
    assert!(marker.accepts("を"));
}

#[test]
fn turkish_marker_covers_vowel_harmony_variants() {
    let profile = languages::turkish();
    let marker = profile.marker(SemanticRole::Patient).unwrap();
    for variant in ["i", "ı", "u", "ü", "yi", "yı", "yu", "yü"] {
        assert!(marker.accepts(variant), "missing variant {variant}");
    }
    // The primary is what rendering emits.
    assert_eq!(marker.primary, "i");
}

#[test]
fn trailing_surfaces_are_longest_first() {
    let profile = languages::turkish();
    let surfaces = profile.trailing_marker_surfaces();
    let olarak_at = surfaces.iter().position(|s| *s == "olarak").unwrap();
    let i_at = surfaces.iter().position(|s| *s == "i").unwrap();
    assert!(olarak_at < i_at);
}

// =============================================================================
// Structure Surfaces
// =============================================================================

#[test]
fn event_position_matches_typology() {
    assert_eq!(
        languages::english().structure().event_position,
        Some(MarkerPosition::Before)
    );
    assert_eq!(
        languages::japanese().structure().event_position,
        Some(MarkerPosition::After)
    );
}

#[test]
fn structure_surfaces_are_recognized() {
    let profile = languages::english();
    assert!(profile.is_structure_surface("when"));
    assert!(profile.is_structure_surface("then"));
    assert!(profile.is_structure_surface("repeat"));
    assert!(!profile.is_structure_surface("toggle"));
}
