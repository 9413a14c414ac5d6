//! Compound sentence segmentation.
//!
//! Runs before pattern matching: a token stream is cut into a tree of
//! command segments using the profile's structure surfaces (event markers,
//! conditionals, loop keywords, connectors). Each leaf is later matched
//! independently, so command patterns never have to know about compound
//! forms.
//!
//! Recognition order is fixed: event handler, then conditional, then loop,
//! then connector split, then a plain command leaf. A sentence that trips
//! none of the structure checks is a single leaf.

use glossa_foundation::{MarkerPosition, Token, TokenKind};
use glossa_profile::LanguageProfile;

/// A structural segment over a borrowed token range.
#[derive(Debug, PartialEq)]
pub enum Segment<'a> {
    /// A single command to be pattern-matched.
    Command(&'a [Token]),
    /// An event handler: run the body when the event fires.
    Event {
        /// The event name token.
        event: &'a Token,
        /// The handler body.
        body: Box<Segment<'a>>,
    },
    /// A guarded command with an optional else branch.
    Conditional {
        /// Condition tokens, carried verbatim.
        condition: &'a [Token],
        /// Commands to run when the condition holds.
        then: Box<Segment<'a>>,
        /// Commands to run otherwise.
        otherwise: Option<Box<Segment<'a>>>,
    },
    /// A counted repetition.
    Loop {
        /// The iteration count token.
        count: &'a Token,
        /// The loop body.
        body: Box<Segment<'a>>,
    },
    /// Commands joined by connectors, run in order.
    Sequence(Vec<Segment<'a>>),
}

/// Segments a token range into a structure tree.
#[must_use]
pub fn segment<'a>(tokens: &'a [Token], profile: &LanguageProfile) -> Segment<'a> {
    if let Some(found) = try_event(tokens, profile) {
        return found;
    }
    if let Some(found) = try_conditional(tokens, profile) {
        return found;
    }
    if let Some(found) = try_loop(tokens, profile) {
        return found;
    }
    if let Some(found) = try_sequence(tokens, profile) {
        return found;
    }
    Segment::Command(tokens)
}

fn surface_in(list: &[String], token: &Token) -> bool {
    list.iter().any(|s| s == &token.normalized)
}

/// Event form: `[prefix] [event] [body...]` or `[event] [prefix] [body...]`
/// depending on the profile's event marker position.
fn try_event<'a>(tokens: &'a [Token], profile: &LanguageProfile) -> Option<Segment<'a>> {
    let structure = profile.structure();
    if structure.event_prefix.is_empty() || tokens.len() < 3 {
        return None;
    }
    let position = structure.event_position.unwrap_or(MarkerPosition::Before);
    let (marker, event) = match position {
        MarkerPosition::Before => (&tokens[0], &tokens[1]),
        MarkerPosition::After => (&tokens[1], &tokens[0]),
    };
    if !surface_in(&structure.event_prefix, marker) {
        return None;
    }
    // The event name must be an ordinary word, not a command opening.
    if profile.is_command_surface(&event.normalized) {
        return None;
    }
    Some(Segment::Event {
        event,
        body: Box::new(segment(&tokens[2..], profile)),
    })
}

/// Conditional form: `[if] [condition...] [then?] [branch...] [else?] [branch...]`.
///
/// The condition runs up to the first command surface or connector; a
/// connector at the boundary is swallowed.
fn try_conditional<'a>(tokens: &'a [Token], profile: &LanguageProfile) -> Option<Segment<'a>> {
    let structure = profile.structure();
    if structure.conditional.is_empty()
        || tokens.len() < 3
        || !surface_in(&structure.conditional, &tokens[0])
    {
        return None;
    }
    let boundary = tokens.iter().enumerate().skip(1).find_map(|(i, t)| {
        if surface_in(&structure.connectors, t) || profile.is_command_surface(&t.normalized) {
            Some(i)
        } else {
            None
        }
    })?;
    let condition = &tokens[1..boundary];
    if condition.is_empty() {
        return None;
    }
    let mut rest_start = boundary;
    if surface_in(&structure.connectors, &tokens[rest_start]) {
        rest_start += 1;
    }
    let rest = &tokens[rest_start..];
    if rest.is_empty() {
        return None;
    }
    let (then_tokens, else_tokens) = match rest
        .iter()
        .position(|t| surface_in(&structure.conditional_else, t))
    {
        Some(at) if at > 0 && at + 1 < rest.len() => (&rest[..at], Some(&rest[at + 1..])),
        _ => (rest, None),
    };
    Some(Segment::Conditional {
        condition,
        then: Box::new(segment(then_tokens, profile)),
        otherwise: else_tokens.map(|t| Box::new(segment(t, profile))),
    })
}

/// Loop form: `[repeat] [count] [times?] [body...]`. The count must be a
/// literal; anything else falls through to ordinary matching.
fn try_loop<'a>(tokens: &'a [Token], profile: &LanguageProfile) -> Option<Segment<'a>> {
    let structure = profile.structure();
    if structure.loop_keyword.is_empty()
        || tokens.len() < 3
        || !surface_in(&structure.loop_keyword, &tokens[0])
        || tokens[1].kind != TokenKind::Literal
    {
        return None;
    }
    let count = &tokens[1];
    let mut body_start = 2;
    if body_start < tokens.len() && surface_in(&structure.loop_unit, &tokens[body_start]) {
        body_start += 1;
    }
    let body = &tokens[body_start..];
    if body.is_empty() {
        return None;
    }
    Some(Segment::Loop {
        count,
        body: Box::new(segment(body, profile)),
    })
}

/// Splits on top-level connectors into a sequence of two or more segments.
fn try_sequence<'a>(tokens: &'a [Token], profile: &LanguageProfile) -> Option<Segment<'a>> {
    let structure = profile.structure();
    if structure.connectors.is_empty() {
        return None;
    }
    let mut chunks: Vec<&'a [Token]> = Vec::new();
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if surface_in(&structure.connectors, token) {
            if start < i {
                chunks.push(&tokens[start..i]);
            }
            start = i + 1;
        }
    }
    if start < tokens.len() {
        chunks.push(&tokens[start..]);
    }
    if chunks.len() < 2 {
        return None;
    }
    Some(Segment::Sequence(
        chunks
            .into_iter()
            .map(|chunk| segment(chunk, profile))
            .collect(),
    ))
}
