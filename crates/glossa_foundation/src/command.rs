//! Command role signatures.
//!
//! A [`CommandShape`] declares which roles a command requires and which it
//! accepts optionally. The pattern generator uses shapes to synthesize
//! default templates, and the AST builder uses them to validate bindings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::SemanticRole;

/// The role signature of one command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandShape {
    /// Canonical command name.
    pub command: String,
    /// Roles that must be bound for a valid build. The first entry is the
    /// command's primary argument and is positional in preposition-marking
    /// languages.
    pub required: Vec<SemanticRole>,
    /// Roles that may additionally be bound.
    pub optional: Vec<SemanticRole>,
}

impl CommandShape {
    /// Creates a shape.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        required: Vec<SemanticRole>,
        optional: Vec<SemanticRole>,
    ) -> Self {
        Self {
            command: command.into(),
            required,
            optional,
        }
    }

    /// All roles in declaration order, required first.
    pub fn roles(&self) -> impl Iterator<Item = SemanticRole> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }

    /// The primary (first required) role, if any.
    #[must_use]
    pub fn primary(&self) -> Option<SemanticRole> {
        self.required.first().copied()
    }
}

/// The stock command set and its role signatures.
///
/// These are the hyper-command verbs every sample profile localizes; hosts
/// can extend the set with their own shapes at registration time.
#[must_use]
pub fn builtin_shapes() -> Vec<CommandShape> {
    use SemanticRole as R;
    vec![
        CommandShape::new("toggle", vec![R::Patient], vec![R::Destination]),
        CommandShape::new("add", vec![R::Patient], vec![R::Destination]),
        CommandShape::new("remove", vec![R::Patient], vec![R::Destination]),
        CommandShape::new("set", vec![R::Patient, R::Content], vec![]),
        CommandShape::new("show", vec![R::Patient], vec![R::Style]),
        CommandShape::new("hide", vec![R::Patient], vec![R::Style]),
        CommandShape::new("put", vec![R::Content, R::Destination], vec![]),
        CommandShape::new("send", vec![R::Event], vec![R::Destination]),
        CommandShape::new("wait", vec![R::Duration], vec![]),
        CommandShape::new("log", vec![R::Content], vec![]),
        CommandShape::new("increment", vec![R::Patient], vec![R::Quantity]),
        CommandShape::new("decrement", vec![R::Patient], vec![R::Quantity]),
        CommandShape::new("fetch", vec![R::Source], vec![R::Destination]),
    ]
}
