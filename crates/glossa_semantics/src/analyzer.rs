//! Confidence-scored analysis of raw text.
//!
//! Ties the pipeline together: tokenize, segment, match each leaf, build
//! the canonical tree, and score the result. Failure to understand a
//! sentence is a value ([`AnalysisOutcome::NoMatch`]), never an `Err`;
//! errors are reserved for misconfiguration.

use tracing::debug;

use glossa_foundation::{CommandNode, SemanticValue, Token, TokenKind, TokenStream};
use glossa_pattern::{Matcher, PatternMatchResult, PatternSet, Provenance};
use glossa_profile::{BoundaryStrategy, LanguageProfile, tokenize};

use crate::builder::{AstBuilder, conditional_node, event_node, loop_node, sequence_node};
use crate::structure::{Segment, segment};

/// Minimum confidence for an analysis to count as a match.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Confidence at or above which an analysis may be acted on without
/// confirmation.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence band for arbitration policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// Act without confirmation.
    High,
    /// Usable, but worth confirming.
    Medium,
    /// Below the match threshold.
    Low,
}

/// A successful analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// The canonical command tree.
    pub ast: CommandNode,
    /// Overall confidence in `[0, 1]`. For compound sentences this is the
    /// minimum over all matched segments.
    pub confidence: f64,
    /// Id of the matched pattern; for compound sentences, the first leaf's.
    pub pattern_id: String,
    /// Language the text was analyzed as.
    pub language: String,
}

impl Analysis {
    /// The confidence band this analysis falls in.
    #[must_use]
    pub fn band(&self) -> ConfidenceBand {
        if self.confidence >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceBand::High
        } else if self.confidence >= DEFAULT_CONFIDENCE_THRESHOLD {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

/// Why an analysis produced no match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoMatchReason {
    /// The input was empty or whitespace.
    EmptyInput,
    /// No pattern aligned with the token stream.
    NoPatternMatched,
    /// A pattern matched, but its confidence fell below the threshold.
    BelowThreshold,
    /// A pattern matched but the AST builder rejected the bindings.
    BuildFailed(String),
}

/// The result of analyzing one text.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    /// The text was understood.
    Match(Analysis),
    /// The text was not understood.
    NoMatch(NoMatchReason),
}

impl AnalysisOutcome {
    /// Returns true for a match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    /// The analysis, if this is a match.
    #[must_use]
    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            Self::Match(analysis) => Some(analysis),
            Self::NoMatch(_) => None,
        }
    }
}

/// Analyzes text against one language's profile and pattern set.
#[derive(Clone, Debug)]
pub struct Analyzer {
    threshold: f64,
    builder: AstBuilder,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer at the default confidence threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            builder: AstBuilder::new(),
        }
    }

    /// Overrides the match threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Analyzes one text.
    #[must_use]
    pub fn analyze(
        &self,
        text: &str,
        profile: &LanguageProfile,
        patterns: &PatternSet,
    ) -> AnalysisOutcome {
        let stream = tokenize(text, profile);
        if stream.is_empty() {
            return AnalysisOutcome::NoMatch(NoMatchReason::EmptyInput);
        }
        let builder = self.builder.clone().with_shapes(profile.shapes());
        let tree = segment(stream.as_slice(), profile);
        match self.analyze_segment(&tree, profile, patterns, &builder) {
            Ok((ast, confidence, pattern_id)) => {
                if confidence < self.threshold {
                    debug!(language = %profile.code, confidence, "below threshold");
                    return AnalysisOutcome::NoMatch(NoMatchReason::BelowThreshold);
                }
                debug!(language = %profile.code, %pattern_id, confidence, "analyzed");
                AnalysisOutcome::Match(Analysis {
                    ast,
                    confidence,
                    pattern_id,
                    language: profile.code.clone(),
                })
            }
            Err(reason) => AnalysisOutcome::NoMatch(reason),
        }
    }

    fn analyze_segment(
        &self,
        tree: &Segment<'_>,
        profile: &LanguageProfile,
        patterns: &PatternSet,
        builder: &AstBuilder,
    ) -> Result<(CommandNode, f64, String), NoMatchReason> {
        match tree {
            Segment::Command(tokens) => {
                let stream = TokenStream::new((*tokens).to_vec());
                let matcher =
                    Matcher::new(|expected: &str, token: &Token| profile.surface_eq(expected, token));
                let best = matcher
                    .best_match(&stream, patterns.iter())
                    .ok_or(NoMatchReason::NoPatternMatched)?;
                let node = builder
                    .build(&best)
                    .map_err(|e| NoMatchReason::BuildFailed(e.to_string()))?;
                let confidence = match_confidence(&best);
                Ok((node, confidence, best.pattern_id))
            }
            Segment::Event { event, body } => {
                let (inner, confidence, pattern_id) =
                    self.analyze_segment(body, profile, patterns, builder)?;
                Ok((
                    event_node(event_value(event), vec![inner]),
                    confidence,
                    pattern_id,
                ))
            }
            Segment::Conditional {
                condition,
                then,
                otherwise,
            } => {
                let (then_node, then_conf, pattern_id) =
                    self.analyze_segment(then, profile, patterns, builder)?;
                let mut confidence = then_conf;
                let else_node = match otherwise {
                    Some(inner) => {
                        let (node, conf, _) =
                            self.analyze_segment(inner, profile, patterns, builder)?;
                        confidence = confidence.min(conf);
                        Some(vec![node])
                    }
                    None => None,
                };
                Ok((
                    conditional_node(
                        condition_value(condition, profile),
                        vec![then_node],
                        else_node,
                    ),
                    confidence,
                    pattern_id,
                ))
            }
            Segment::Loop { count, body } => {
                let (inner, confidence, pattern_id) =
                    self.analyze_segment(body, profile, patterns, builder)?;
                Ok((
                    loop_node(SemanticValue::from_token(count), vec![inner]),
                    confidence,
                    pattern_id,
                ))
            }
            Segment::Sequence(parts) => {
                let mut nodes = Vec::with_capacity(parts.len());
                let mut confidence = 1.0_f64;
                let mut first_id = None;
                for part in parts {
                    let (node, conf, pattern_id) =
                        self.analyze_segment(part, profile, patterns, builder)?;
                    confidence = confidence.min(conf);
                    first_id.get_or_insert(pattern_id);
                    nodes.push(node);
                }
                let pattern_id = first_id.ok_or(NoMatchReason::NoPatternMatched)?;
                Ok((sequence_node(nodes), confidence, pattern_id))
            }
        }
    }
}

/// Scores a single match.
///
/// Base 0.6, up to 0.3 for token coverage, 0.05 for hand authorship, and
/// up to 0.05 for priority. A full-coverage match always clears the high
/// band.
#[must_use]
pub fn match_confidence(matched: &PatternMatchResult) -> f64 {
    let authored = if matched.provenance == Provenance::HandAuthored {
        1.0
    } else {
        0.0
    };
    let priority = f64::from(matched.priority.clamp(0, 100)) / 100.0;
    (0.6 + 0.3 * matched.coverage + 0.05 * authored + 0.05 * priority).clamp(0.0, 1.0)
}

fn event_value(token: &Token) -> SemanticValue {
    match token.kind {
        TokenKind::Literal => SemanticValue::from_token(token),
        _ => SemanticValue::Reference(token.text.clone()),
    }
}

/// Conditions are carried as opaque text: a lone reference stays a
/// reference, anything longer becomes an expression joined the way the
/// language joins words.
fn condition_value(tokens: &[Token], profile: &LanguageProfile) -> SemanticValue {
    if tokens.len() == 1 {
        let value = SemanticValue::from_token(&tokens[0]);
        if matches!(value, SemanticValue::Reference(_) | SemanticValue::Expression(_)) {
            return value;
        }
    }
    let sep = match profile.boundary {
        BoundaryStrategy::Space | BoundaryStrategy::Suffix => " ",
        BoundaryStrategy::Particle | BoundaryStrategy::Character => "",
    };
    let text = tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(sep);
    SemanticValue::Expression(text)
}
