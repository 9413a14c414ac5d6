//! The pattern matcher.
//!
//! Aligns a token stream against candidate templates left to right,
//! extracting role bindings. Marker search is an explicit linear scan over
//! the unconsumed remainder using an injected surface equality, so
//! matching behavior stays auditable and independent of any regex dialect.
//!
//! Tokens consumed by one role are removed from further consideration;
//! a token bound to an earlier role can never serve as a later role's
//! marker or value. There is no backtracking across alternative marker
//! placements: the first placement found wins, which keeps matching
//! deterministic and linear.

use std::collections::BTreeMap;

use tracing::trace;

use glossa_foundation::{SemanticRole, SemanticValue, Token, TokenStream};

use crate::template::{ExtractionRule, LanguagePattern, Provenance, TemplateElement};

/// A successful alignment of a token stream against one pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternMatchResult {
    /// Id of the matched pattern.
    pub pattern_id: String,
    /// Canonical command name.
    pub command: String,
    /// The pattern's priority.
    pub priority: i32,
    /// The pattern's provenance.
    pub provenance: Provenance,
    /// Extracted role bindings.
    pub bindings: BTreeMap<SemanticRole, SemanticValue>,
    /// Number of tokens consumed.
    pub tokens_consumed: usize,
    /// Number of optional groups that actually matched.
    pub optional_groups_matched: usize,
    /// Fraction of significant input tokens consumed, in `[0, 1]`.
    pub coverage: f64,
}

#[derive(Clone)]
struct MatchState {
    consumed: Vec<bool>,
    bindings: BTreeMap<SemanticRole, SemanticValue>,
    optional_groups: usize,
}

/// Matches token streams against candidate patterns.
///
/// `F` is the injected literal equality: exact normalized comparison plus
/// whatever synonym awareness the caller's profile provides.
pub struct Matcher<F>
where
    F: Fn(&str, &Token) -> bool,
{
    surface_eq: F,
}

impl Matcher<fn(&str, &Token) -> bool> {
    /// A matcher using exact normalized equality only.
    #[must_use]
    pub fn exact() -> Self {
        Self {
            surface_eq: |expected, token| expected == token.normalized,
        }
    }
}

impl<F> Matcher<F>
where
    F: Fn(&str, &Token) -> bool,
{
    /// Creates a matcher with an injected surface equality.
    pub fn new(surface_eq: F) -> Self {
        Self { surface_eq }
    }

    /// Returns the best full match, or `None` if no candidate matches.
    ///
    /// Candidates are expected in priority order (the registry's order).
    /// All full matches are ranked by declared priority, then number of
    /// optional groups matched, then coverage, then candidate order.
    pub fn best_match<'a, I>(
        &self,
        stream: &TokenStream,
        candidates: I,
    ) -> Option<PatternMatchResult>
    where
        I: IntoIterator<Item = &'a LanguagePattern>,
    {
        let mut results: Vec<(usize, PatternMatchResult)> = Vec::new();
        for (index, pattern) in candidates.into_iter().enumerate() {
            if let Some(result) = self.try_pattern(stream, pattern) {
                trace!(pattern = %pattern.id, coverage = result.coverage, "pattern matched");
                results.push((index, result));
            }
        }
        results.sort_by(|(ia, a), (ib, b)| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| b.optional_groups_matched.cmp(&a.optional_groups_matched))
                .then_with(|| b.coverage.total_cmp(&a.coverage))
                .then_with(|| ia.cmp(ib))
        });
        results.into_iter().next().map(|(_, r)| r)
    }

    /// Attempts a single pattern against the stream.
    #[must_use]
    pub fn try_pattern(
        &self,
        stream: &TokenStream,
        pattern: &LanguagePattern,
    ) -> Option<PatternMatchResult> {
        let tokens = stream.as_slice();
        if tokens.is_empty() {
            return None;
        }
        let mut state = MatchState {
            consumed: vec![false; tokens.len()],
            bindings: BTreeMap::new(),
            optional_groups: 0,
        };

        self.apply_elements(&pattern.elements, tokens, &mut state)?;

        // Everything outside bound role spans must be consumed; trailing
        // punctuation is excepted.
        if tokens
            .iter()
            .enumerate()
            .any(|(i, t)| !state.consumed[i] && !t.is_punctuation())
        {
            return None;
        }

        let significant = tokens.iter().filter(|t| !t.is_punctuation()).count();
        let consumed = state.consumed.iter().filter(|c| **c).count();
        #[allow(clippy::cast_precision_loss)]
        let coverage = if significant == 0 {
            0.0
        } else {
            consumed as f64 / significant as f64
        };

        Some(PatternMatchResult {
            pattern_id: pattern.id.clone(),
            command: pattern.command.clone(),
            priority: pattern.priority,
            provenance: pattern.provenance,
            bindings: state.bindings,
            tokens_consumed: consumed,
            optional_groups_matched: state.optional_groups,
            coverage,
        })
    }

    fn apply_elements(
        &self,
        elements: &[TemplateElement],
        tokens: &[Token],
        state: &mut MatchState,
    ) -> Option<()> {
        for element in elements {
            match element {
                TemplateElement::Literal { text, floating } => {
                    self.apply_literal(text, *floating, tokens, state)?;
                }
                TemplateElement::Role { role, rule } => {
                    self.apply_role(*role, rule, tokens, state)?;
                }
                TemplateElement::Optional(inner) => {
                    let mut trial = state.clone();
                    if self.apply_elements(inner, tokens, &mut trial).is_some() {
                        trial.optional_groups += 1;
                        *state = trial;
                    }
                }
            }
        }
        Some(())
    }

    fn apply_literal(
        &self,
        text: &str,
        floating: bool,
        tokens: &[Token],
        state: &mut MatchState,
    ) -> Option<()> {
        if floating {
            let index = (0..tokens.len())
                .find(|&i| !state.consumed[i] && (self.surface_eq)(text, &tokens[i]))?;
            state.consumed[index] = true;
        } else {
            let index = next_unconsumed(tokens, state, |t| !t.is_punctuation())?;
            if !(self.surface_eq)(text, &tokens[index]) {
                return None;
            }
            state.consumed[index] = true;
        }
        Some(())
    }

    fn apply_role(
        &self,
        role: SemanticRole,
        rule: &ExtractionRule,
        tokens: &[Token],
        state: &mut MatchState,
    ) -> Option<()> {
        match rule {
            ExtractionRule::Position => {
                let index =
                    next_unconsumed(tokens, state, |t| !t.is_marker() && !t.is_punctuation())?;
                state.consumed[index] = true;
                state
                    .bindings
                    .insert(role, SemanticValue::from_token(&tokens[index]));
            }
            ExtractionRule::Marker(marker) => {
                let marker_index = (0..tokens.len()).find(|&i| {
                    !state.consumed[i] && marker.accepts(&tokens[i].normalized)
                })?;
                let value_index = adjacent_value(tokens, state, marker_index, marker.position)?;
                state.consumed[marker_index] = true;
                state.consumed[value_index] = true;
                state
                    .bindings
                    .insert(role, SemanticValue::from_token(&tokens[value_index]));
            }
            ExtractionRule::Default(value) => {
                state.bindings.entry(role).or_insert_with(|| value.clone());
            }
        }
        Some(())
    }
}

/// First unconsumed token index satisfying the filter.
fn next_unconsumed(
    tokens: &[Token],
    state: &MatchState,
    accept: impl Fn(&Token) -> bool,
) -> Option<usize> {
    (0..tokens.len()).find(|&i| !state.consumed[i] && accept(&tokens[i]))
}

/// The value token adjacent to a marker, on the marker's declared side.
fn adjacent_value(
    tokens: &[Token],
    state: &MatchState,
    marker_index: usize,
    position: glossa_foundation::MarkerPosition,
) -> Option<usize> {
    let usable = |i: usize| {
        !state.consumed[i] && !tokens[i].is_marker() && !tokens[i].is_punctuation()
    };
    match position {
        // Marker follows its value: nearest unconsumed token before it.
        glossa_foundation::MarkerPosition::After => (0..marker_index).rev().find(|&i| usable(i)),
        // Marker precedes its value: nearest unconsumed token after it.
        glossa_foundation::MarkerPosition::Before => {
            (marker_index + 1..tokens.len()).find(|&i| usable(i))
        }
    }
}
