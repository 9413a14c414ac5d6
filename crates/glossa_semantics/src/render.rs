//! Rendering canonical trees back to natural-language text.
//!
//! The inverse of analysis: walk the chosen pattern's template in element
//! order, emitting primary surfaces only. Rendering is total over trees the
//! analyzer can produce; it fails only when a language lacks a pattern or a
//! structure surface for a node.

use glossa_foundation::{
    CONDITIONAL_COMMAND, CommandNode, EVENT_COMMAND, Error, LOOP_COMMAND, MarkerPosition, Result,
    SEQUENCE_COMMAND, SemanticRole, SemanticValue,
};
use glossa_pattern::{ExtractionRule, LanguagePattern, PatternSet, TemplateElement};
use glossa_profile::{BoundaryStrategy, LanguageProfile, MarkingStrategy};

/// Renders a command tree as text in the profile's language.
///
/// # Errors
///
/// `NoTranslation` when the language has no pattern for a command or no
/// structure surface for a wrapper node, `MissingRole` when the tree lacks
/// a binding the chosen pattern requires.
pub fn render(
    node: &CommandNode,
    profile: &LanguageProfile,
    patterns: &PatternSet,
) -> Result<String> {
    let mut buffer = RenderBuffer::new();
    render_node(node, profile, patterns, &mut buffer)?;
    Ok(buffer.finish(separator(profile)))
}

/// Word separator for the profile's boundary strategy.
fn separator(profile: &LanguageProfile) -> &'static str {
    match profile.boundary {
        BoundaryStrategy::Space | BoundaryStrategy::Suffix => " ",
        BoundaryStrategy::Particle | BoundaryStrategy::Character => "",
    }
}

/// Whether marker surfaces fuse onto the preceding word.
fn markers_attach(profile: &LanguageProfile) -> bool {
    profile.attached_markers
        || matches!(
            profile.marking,
            MarkingStrategy::Particle | MarkingStrategy::Suffix
        )
}

/// Accumulates output words; attached markers fuse onto the previous part.
struct RenderBuffer {
    parts: Vec<String>,
}

impl RenderBuffer {
    fn new() -> Self {
        Self { parts: Vec::new() }
    }

    fn push(&mut self, text: impl Into<String>) {
        self.parts.push(text.into());
    }

    fn attach(&mut self, text: &str) {
        match self.parts.last_mut() {
            Some(last) => last.push_str(text),
            None => self.parts.push(text.to_string()),
        }
    }

    fn finish(self, sep: &str) -> String {
        self.parts.join(sep)
    }
}

fn render_node(
    node: &CommandNode,
    profile: &LanguageProfile,
    patterns: &PatternSet,
    buffer: &mut RenderBuffer,
) -> Result<()> {
    match node.command.as_str() {
        EVENT_COMMAND => render_event(node, profile, patterns, buffer),
        CONDITIONAL_COMMAND => render_conditional(node, profile, patterns, buffer),
        LOOP_COMMAND => render_loop(node, profile, patterns, buffer),
        SEQUENCE_COMMAND => render_sequence(&node.body, profile, patterns, buffer),
        _ => render_leaf(node, profile, patterns, buffer),
    }
}

fn render_leaf(
    node: &CommandNode,
    profile: &LanguageProfile,
    patterns: &PatternSet,
    buffer: &mut RenderBuffer,
) -> Result<()> {
    // Priority order puts hand-authored patterns first for free.
    let pattern = patterns.for_command(&node.command).next().ok_or_else(|| {
        Error::no_translation(format!(
            "no pattern for command {} in language {}",
            node.command, profile.code
        ))
    })?;
    let defaults = collect_defaults(pattern);
    emit_elements(&pattern.elements, node, profile, &defaults, buffer)
}

/// Default bindings declared by the pattern, used to suppress redundant
/// optional groups.
fn collect_defaults(pattern: &LanguagePattern) -> Vec<(SemanticRole, &SemanticValue)> {
    fn walk<'a>(
        elements: &'a [TemplateElement],
        out: &mut Vec<(SemanticRole, &'a SemanticValue)>,
    ) {
        for element in elements {
            match element {
                TemplateElement::Role {
                    role,
                    rule: ExtractionRule::Default(value),
                } => out.push((*role, value)),
                TemplateElement::Optional(inner) => walk(inner, out),
                _ => {}
            }
        }
    }
    let mut out = Vec::new();
    walk(&pattern.elements, &mut out);
    out
}

fn emit_elements(
    elements: &[TemplateElement],
    node: &CommandNode,
    profile: &LanguageProfile,
    defaults: &[(SemanticRole, &SemanticValue)],
    buffer: &mut RenderBuffer,
) -> Result<()> {
    for element in elements {
        match element {
            TemplateElement::Literal { text, .. } => buffer.push(text.clone()),
            TemplateElement::Role { role, rule } => match rule {
                ExtractionRule::Position => {
                    let value = node
                        .role(*role)
                        .ok_or_else(|| Error::missing_role(&node.command, *role))?;
                    buffer.push(value.surface());
                }
                ExtractionRule::Marker(marker) => {
                    let value = node
                        .role(*role)
                        .ok_or_else(|| Error::missing_role(&node.command, *role))?;
                    match marker.position {
                        MarkerPosition::Before => {
                            buffer.push(marker.primary.clone());
                            buffer.push(value.surface());
                        }
                        MarkerPosition::After => {
                            buffer.push(value.surface());
                            if markers_attach(profile) {
                                buffer.attach(&marker.primary);
                            } else {
                                buffer.push(marker.primary.clone());
                            }
                        }
                    }
                }
                // Defaults are implicit on the surface.
                ExtractionRule::Default(_) => {}
            },
            TemplateElement::Optional(inner) => {
                if optional_group_applies(inner, node, defaults) {
                    emit_elements(inner, node, profile, defaults, buffer)?;
                }
            }
        }
    }
    Ok(())
}

/// An optional group is emitted only when every role inside it is bound,
/// and at least one binding differs from its declared default.
fn optional_group_applies(
    elements: &[TemplateElement],
    node: &CommandNode,
    defaults: &[(SemanticRole, &SemanticValue)],
) -> bool {
    let mut roles = Vec::new();
    collect_consuming_roles(elements, &mut roles);
    if roles.is_empty() || !roles.iter().all(|role| node.role(*role).is_some()) {
        return false;
    }
    roles.iter().any(|role| {
        let bound = node.role(*role);
        match defaults.iter().find(|(r, _)| r == role) {
            Some((_, value)) => bound != Some(*value),
            None => true,
        }
    })
}

fn collect_consuming_roles(elements: &[TemplateElement], out: &mut Vec<SemanticRole>) {
    for element in elements {
        match element {
            TemplateElement::Role {
                role,
                rule: ExtractionRule::Position | ExtractionRule::Marker(_),
            } => out.push(*role),
            TemplateElement::Optional(inner) => collect_consuming_roles(inner, out),
            _ => {}
        }
    }
}

fn render_event(
    node: &CommandNode,
    profile: &LanguageProfile,
    patterns: &PatternSet,
    buffer: &mut RenderBuffer,
) -> Result<()> {
    let structure = profile.structure();
    let prefix = structure.event_prefix.first().ok_or_else(|| {
        Error::no_translation(format!("no event surface in language {}", profile.code))
    })?;
    let event = node
        .role(SemanticRole::Event)
        .ok_or_else(|| Error::missing_role(EVENT_COMMAND, SemanticRole::Event))?;
    match structure.event_position.unwrap_or(MarkerPosition::Before) {
        MarkerPosition::Before => {
            buffer.push(prefix.clone());
            buffer.push(event.surface());
        }
        MarkerPosition::After => {
            buffer.push(event.surface());
            buffer.push(prefix.clone());
        }
    }
    render_sequence(&node.body, profile, patterns, buffer)
}

fn render_conditional(
    node: &CommandNode,
    profile: &LanguageProfile,
    patterns: &PatternSet,
    buffer: &mut RenderBuffer,
) -> Result<()> {
    let structure = profile.structure();
    let opener = structure.conditional.first().ok_or_else(|| {
        Error::no_translation(format!(
            "no conditional surface in language {}",
            profile.code
        ))
    })?;
    let condition = node
        .role(SemanticRole::Condition)
        .ok_or_else(|| Error::missing_role(CONDITIONAL_COMMAND, SemanticRole::Condition))?;
    buffer.push(opener.clone());
    buffer.push(condition.surface());
    if let Some(connector) = structure.connectors.first() {
        buffer.push(connector.clone());
    }
    // Two sequence arms encode then/else; anything else is a plain body.
    let arms = match node.body.as_slice() {
        [then, otherwise]
            if then.command == SEQUENCE_COMMAND && otherwise.command == SEQUENCE_COMMAND =>
        {
            Some((then, otherwise))
        }
        _ => None,
    };
    match arms {
        Some((then, otherwise)) => {
            render_sequence(&then.body, profile, patterns, buffer)?;
            let marker = structure.conditional_else.first().ok_or_else(|| {
                Error::no_translation(format!("no else surface in language {}", profile.code))
            })?;
            buffer.push(marker.clone());
            render_sequence(&otherwise.body, profile, patterns, buffer)
        }
        None => render_sequence(&node.body, profile, patterns, buffer),
    }
}

fn render_loop(
    node: &CommandNode,
    profile: &LanguageProfile,
    patterns: &PatternSet,
    buffer: &mut RenderBuffer,
) -> Result<()> {
    let structure = profile.structure();
    let keyword = structure.loop_keyword.first().ok_or_else(|| {
        Error::no_translation(format!("no loop surface in language {}", profile.code))
    })?;
    let count = node
        .role(SemanticRole::Quantity)
        .ok_or_else(|| Error::missing_role(LOOP_COMMAND, SemanticRole::Quantity))?;
    buffer.push(keyword.clone());
    buffer.push(count.surface());
    if let Some(unit) = structure.loop_unit.first() {
        buffer.push(unit.clone());
    }
    render_sequence(&node.body, profile, patterns, buffer)
}

fn render_sequence(
    body: &[CommandNode],
    profile: &LanguageProfile,
    patterns: &PatternSet,
    buffer: &mut RenderBuffer,
) -> Result<()> {
    for (i, child) in body.iter().enumerate() {
        if i > 0 {
            let connector = profile.structure().connectors.first().ok_or_else(|| {
                Error::no_translation(format!(
                    "no connector surface in language {}",
                    profile.code
                ))
            })?;
            buffer.push(connector.clone());
        }
        render_node(child, profile, patterns, buffer)?;
    }
    Ok(())
}
