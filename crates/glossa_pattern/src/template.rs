//! Pattern templates.
//!
//! A template is an ordered list of literal and role elements defining one
//! valid surface form of a command. Templates are validated once at
//! registration time; malformed templates fail fast and loud.

use glossa_foundation::{CommandNode, Error, Result, RoleMarker, SemanticRole, SemanticValue};

/// Priority assigned to profile-generated default patterns.
pub const GENERATED_PRIORITY: i32 = 10;

/// Priority floor for hand-authored patterns.
///
/// Hand-authored entries always outrank generated ones for the same
/// command, so generation can be overridden surgically.
pub const HAND_AUTHORED_PRIORITY: i32 = 100;

/// Where a pattern came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Written by a human for this language.
    HandAuthored,
    /// Synthesized from the language profile.
    Generated,
}

/// How a role element binds its value.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtractionRule {
    /// Bind the next unconsumed value token in template order.
    Position,
    /// Scan the remaining stream for the marker and bind the adjacent
    /// token on the marker's declared side.
    Marker(RoleMarker),
    /// Bind this value without consuming input if the role is still
    /// unbound after all other elements (e.g. an implicit "me").
    Default(SemanticValue),
}

/// One element of a pattern template.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateElement {
    /// A literal word that must appear.
    Literal {
        /// Normalized surface text.
        text: String,
        /// Floating literals may occur anywhere in the unconsumed range,
        /// which is what permits free word order in particle-marked
        /// languages. Anchored literals must match at the cursor.
        floating: bool,
    },
    /// A role slot.
    Role {
        /// The role to bind.
        role: SemanticRole,
        /// How to extract it.
        rule: ExtractionRule,
    },
    /// A group that may be wholly absent without failing the match.
    Optional(Vec<TemplateElement>),
}

impl TemplateElement {
    /// An anchored literal.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal {
            text: text.into(),
            floating: false,
        }
    }

    /// A floating literal.
    #[must_use]
    pub fn floating_literal(text: impl Into<String>) -> Self {
        Self::Literal {
            text: text.into(),
            floating: true,
        }
    }

    /// A positional role slot.
    #[must_use]
    pub fn positional(role: SemanticRole) -> Self {
        Self::Role {
            role,
            rule: ExtractionRule::Position,
        }
    }

    /// A marker-based role slot.
    #[must_use]
    pub fn marked(role: SemanticRole, marker: RoleMarker) -> Self {
        Self::Role {
            role,
            rule: ExtractionRule::Marker(marker),
        }
    }

    /// A default-valued role slot.
    #[must_use]
    pub fn defaulted(role: SemanticRole, value: SemanticValue) -> Self {
        Self::Role {
            role,
            rule: ExtractionRule::Default(value),
        }
    }

    /// An optional group.
    #[must_use]
    pub fn optional(elements: Vec<TemplateElement>) -> Self {
        Self::Optional(elements)
    }
}

/// A compiled pattern template for one command in one language.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguagePattern {
    /// Unique pattern id, used in diagnostics and analysis results.
    pub id: String,
    /// Language code this pattern belongs to.
    pub language: String,
    /// Canonical command name this pattern produces.
    pub command: String,
    /// Higher priority is tried and ranked first.
    pub priority: i32,
    /// Ordered template elements.
    pub elements: Vec<TemplateElement>,
    /// Where the pattern came from.
    pub provenance: Provenance,
    /// Canonical example AST, used by the self-consistency suite.
    pub example: Option<CommandNode>,
}

impl LanguagePattern {
    /// Creates a hand-authored pattern at the hand-authored priority floor.
    #[must_use]
    pub fn hand_authored(
        id: impl Into<String>,
        language: impl Into<String>,
        command: impl Into<String>,
        elements: Vec<TemplateElement>,
    ) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            command: command.into(),
            priority: HAND_AUTHORED_PRIORITY,
            elements,
            provenance: Provenance::HandAuthored,
            example: None,
        }
    }

    /// Creates a generated pattern at the generated priority.
    #[must_use]
    pub fn generated(
        id: impl Into<String>,
        language: impl Into<String>,
        command: impl Into<String>,
        elements: Vec<TemplateElement>,
    ) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            command: command.into(),
            priority: GENERATED_PRIORITY,
            elements,
            provenance: Provenance::Generated,
            example: None,
        }
    }

    /// Overrides the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Attaches a canonical example AST.
    #[must_use]
    pub fn with_example(mut self, example: CommandNode) -> Self {
        self.example = Some(example);
        self
    }

    /// Returns true for hand-authored patterns.
    #[must_use]
    pub fn is_hand_authored(&self) -> bool {
        self.provenance == Provenance::HandAuthored
    }

    /// Validates the template.
    ///
    /// A template must be non-empty, must not contain empty literals or
    /// empty optional groups, and must bind each role at most once through
    /// a consuming rule (positional or marker-based). Default rules do not
    /// count: they only fire for still-unbound roles.
    pub fn validate(&self) -> Result<()> {
        if self.elements.is_empty() {
            return Err(Error::invalid_pattern(&self.id, "template has no elements"));
        }
        let mut consuming: Vec<SemanticRole> = Vec::new();
        self.check_elements(&self.elements, &mut consuming)?;
        Ok(())
    }

    fn check_elements(
        &self,
        elements: &[TemplateElement],
        consuming: &mut Vec<SemanticRole>,
    ) -> Result<()> {
        for element in elements {
            match element {
                TemplateElement::Literal { text, .. } => {
                    if text.is_empty() {
                        return Err(Error::invalid_pattern(&self.id, "empty literal"));
                    }
                }
                TemplateElement::Role { role, rule } => {
                    if matches!(rule, ExtractionRule::Position | ExtractionRule::Marker(_)) {
                        if consuming.contains(role) {
                            return Err(Error::invalid_pattern(
                                &self.id,
                                format!("role {role} bound more than once"),
                            ));
                        }
                        consuming.push(*role);
                    }
                }
                TemplateElement::Optional(inner) => {
                    if inner.is_empty() {
                        return Err(Error::invalid_pattern(&self.id, "empty optional group"));
                    }
                    self.check_elements(inner, consuming)?;
                }
            }
        }
        Ok(())
    }
}
