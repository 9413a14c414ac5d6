//! Integration tests for default pattern generation over the sample
//! profiles.

use glossa::foundation::builtin_shapes;
use glossa::languages;
use glossa::pattern::{
    ExtractionRule, GENERATED_PRIORITY, Provenance, TemplateElement, generate,
};

// =============================================================================
// Coverage
// =============================================================================

#[test]
fn one_pattern_per_builtin_for_every_sample_profile() {
    let commands = builtin_shapes().len();
    for profile in languages::all() {
        let patterns = generate(&profile);
        assert_eq!(patterns.len(), commands, "{}", profile.code);
        assert!(patterns.iter().all(|p| p.provenance == Provenance::Generated));
        assert!(patterns.iter().all(|p| p.priority == GENERATED_PRIORITY));
    }
}

#[test]
fn generated_ids_are_deterministic() {
    let profile = languages::english();
    let a: Vec<String> = generate(&profile).into_iter().map(|p| p.id).collect();
    let b: Vec<String> = generate(&profile).into_iter().map(|p| p.id).collect();
    assert_eq!(a, b);
    assert!(a.contains(&"en:toggle:generated".to_string()));
}

#[test]
fn every_generated_pattern_validates_and_has_an_example() {
    for profile in languages::all() {
        for pattern in generate(&profile) {
            pattern.validate().unwrap();
            let example = pattern.example.as_ref().expect("generated example");
            assert_eq!(example.command, pattern.command);
        }
    }
}

// =============================================================================
// Word Order
// =============================================================================

#[test]
fn svo_patterns_open_with_an_anchored_verb() {
    for profile in [languages::english(), languages::spanish(), languages::chinese()] {
        for pattern in generate(&profile) {
            assert!(
                matches!(
                    pattern.elements.first(),
                    Some(TemplateElement::Literal { floating: false, .. })
                ),
                "{}",
                pattern.id
            );
        }
    }
}

#[test]
fn sov_patterns_close_with_a_floating_verb() {
    for profile in [languages::japanese(), languages::korean(), languages::turkish()] {
        for pattern in generate(&profile) {
            let verb = pattern
                .elements
                .iter()
                .rev()
                .find(|e| matches!(e, TemplateElement::Literal { .. }))
                .unwrap_or_else(|| panic!("{} has no verb literal", pattern.id));
            assert!(
                matches!(verb, TemplateElement::Literal { floating: true, .. }),
                "{}",
                pattern.id
            );
        }
    }
}

// =============================================================================
// Role Slots
// =============================================================================

#[test]
fn preposition_primary_argument_is_positional() {
    let patterns = generate(&languages::english());
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    assert!(matches!(
        toggle.elements[1],
        TemplateElement::Role {
            rule: ExtractionRule::Position,
            ..
        }
    ));
}

#[test]
fn particle_primary_argument_is_marked() {
    let patterns = generate(&languages::japanese());
    let toggle = patterns.iter().find(|p| p.command == "toggle").unwrap();
    assert!(toggle.elements.iter().any(|e| matches!(
        e,
        TemplateElement::Role {
            rule: ExtractionRule::Marker(_),
            ..
        }
    )));
}

#[test]
fn optional_roles_without_markers_are_dropped() {
    // Japanese declares no Quantity marker, so increment generates no
    // optional group.
    let patterns = generate(&languages::japanese());
    let increment = patterns.iter().find(|p| p.command == "increment").unwrap();
    assert!(!increment
        .elements
        .iter()
        .any(|e| matches!(e, TemplateElement::Optional(_))));
}

#[test]
fn profile_defaults_append_default_elements() {
    let patterns = generate(&languages::english());
    let send = patterns.iter().find(|p| p.command == "send").unwrap();
    assert!(matches!(
        send.elements.last(),
        Some(TemplateElement::Role {
            rule: ExtractionRule::Default(_),
            ..
        })
    ));
}
