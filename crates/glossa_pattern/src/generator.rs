//! Default pattern generation.
//!
//! Synthesizes one template per localized command straight from a language
//! profile: the profile's word order decides element placement, its marking
//! strategy decides whether role slots bind positionally or by marker, and
//! its declared defaults become non-consuming default bindings. Generated
//! patterns sit below the hand-authored priority floor so a single
//! hand-written pattern can override generation for any one command.

use tracing::debug;

use glossa_foundation::{
    CommandNode, CommandShape, SemanticRole, SemanticValue, builtin_shapes,
};
use glossa_profile::{LanguageProfile, MarkingStrategy, WordOrder};

use crate::template::{LanguagePattern, TemplateElement};

/// Generates default patterns for every command the profile localizes.
///
/// Commands without a surface form in the profile are skipped; the profile's
/// own shapes override builtin shapes of the same name.
#[must_use]
pub fn generate(profile: &LanguageProfile) -> Vec<LanguagePattern> {
    let shapes = effective_shapes(profile);
    let mut patterns = Vec::new();
    for shape in &shapes {
        let Some(surface) = profile.primary_surface(&shape.command) else {
            continue;
        };
        patterns.push(generate_for_shape(profile, shape, surface));
    }
    debug!(
        language = %profile.code,
        patterns = patterns.len(),
        "generated default patterns"
    );
    patterns
}

/// Builtin shapes with the profile's own shapes overriding by command name.
fn effective_shapes(profile: &LanguageProfile) -> Vec<CommandShape> {
    let mut shapes = builtin_shapes();
    for shape in profile.shapes() {
        if let Some(existing) = shapes.iter_mut().find(|s| s.command == shape.command) {
            *existing = shape.clone();
        } else {
            shapes.push(shape.clone());
        }
    }
    shapes
}

fn generate_for_shape(
    profile: &LanguageProfile,
    shape: &CommandShape,
    surface: &str,
) -> LanguagePattern {
    // Marker-marking languages identify the verb by its surface rather than
    // its position, so the literal floats and word order is free on input.
    let marker_based = matches!(
        profile.marking,
        MarkingStrategy::Postposition | MarkingStrategy::Particle | MarkingStrategy::Suffix
    );
    let verb = if marker_based {
        TemplateElement::floating_literal(surface)
    } else {
        TemplateElement::literal(surface)
    };

    let mut required = Vec::new();
    for (index, role) in shape.required.iter().enumerate() {
        match profile.marker(*role) {
            // The first required role in a preposition language is
            // positional; later ones need a marker to be distinguishable.
            Some(marker) if marker_based || index > 0 => {
                required.push(TemplateElement::marked(*role, marker.clone()));
            }
            _ => required.push(TemplateElement::positional(*role)),
        }
    }

    let mut optionals = Vec::new();
    for role in &shape.optional {
        // An optional role without a marker cannot be told apart from the
        // primary argument, so it is not generated.
        if let Some(marker) = profile.marker(*role) {
            optionals.push(TemplateElement::optional(vec![TemplateElement::marked(
                *role,
                marker.clone(),
            )]));
        }
    }

    let mut elements = Vec::new();
    match profile.word_order {
        WordOrder::Svo | WordOrder::Vso => {
            elements.push(verb);
            elements.extend(required);
            elements.extend(optionals);
        }
        WordOrder::Sov => {
            elements.extend(optionals);
            elements.extend(required);
            elements.push(verb);
        }
    }
    for (role, value) in profile.defaults(&shape.command) {
        elements.push(TemplateElement::defaulted(*role, value.clone()));
    }

    let id = format!("{}:{}:generated", profile.code, shape.command);
    LanguagePattern::generated(id, profile.code.clone(), shape.command.clone(), elements)
        .with_example(example_for_shape(profile, shape))
}

/// A canonical example AST for a shape, used by the self-consistency suite.
fn example_for_shape(profile: &LanguageProfile, shape: &CommandShape) -> CommandNode {
    let mut node = CommandNode::leaf(&shape.command, std::collections::BTreeMap::new());
    for role in shape.required.iter().copied() {
        node = node.with_role(role, sample_value(role));
    }
    // Declared defaults take precedence over optional sample values so the
    // example stays on the canonical rendering path.
    for (role, value) in profile.defaults(&shape.command) {
        if node.role(*role).is_none() {
            node = node.with_role(*role, value.clone());
        }
    }
    for role in shape.optional.iter().copied() {
        if profile.marker(role).is_some() && node.role(role).is_none() {
            node = node.with_role(role, sample_value(role));
        }
    }
    node
}

/// A plausible sample value for each role, used in generated examples.
fn sample_value(role: SemanticRole) -> SemanticValue {
    match role {
        SemanticRole::Patient => SemanticValue::Selector(".item".to_string()),
        SemanticRole::Destination => SemanticValue::Selector("#panel".to_string()),
        SemanticRole::Source => SemanticValue::Selector("#origin".to_string()),
        SemanticRole::Style => SemanticValue::Reference("smooth".to_string()),
        SemanticRole::Event => SemanticValue::Reference("refresh".to_string()),
        SemanticRole::Duration => SemanticValue::Literal("2s".to_string()),
        SemanticRole::Condition => SemanticValue::Expression("(count > 0)".to_string()),
        SemanticRole::Quantity => SemanticValue::Literal("3".to_string()),
        SemanticRole::Content => SemanticValue::Literal("42".to_string()),
        SemanticRole::Instrument => SemanticValue::Reference("tool".to_string()),
        SemanticRole::Manner => SemanticValue::Reference("gently".to_string()),
    }
}
