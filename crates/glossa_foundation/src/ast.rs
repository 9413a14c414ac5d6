//! The canonical, language-independent command AST.
//!
//! Two sentences with equivalent meaning in different languages must
//! produce structurally identical trees. Role bindings live in a
//! `BTreeMap` so the shape is fully deterministic regardless of the order
//! roles were extracted in.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::SemanticRole;
use crate::value::SemanticValue;

/// Reserved command name for event-handler wrapper nodes.
pub const EVENT_COMMAND: &str = "on";
/// Reserved command name for conditional wrapper nodes.
pub const CONDITIONAL_COMMAND: &str = "if";
/// Reserved command name for loop wrapper nodes.
pub const LOOP_COMMAND: &str = "repeat";
/// Reserved command name for sequence wrapper nodes.
pub const SEQUENCE_COMMAND: &str = "seq";

/// A node in the canonical command tree.
///
/// Leaf commands have an empty body. Event handlers, conditionals, loops,
/// and sequences are wrapper nodes using the reserved command names, with
/// their inner command sequence in `body`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandNode {
    /// Canonical command name.
    pub command: String,
    /// Role bindings, deterministically ordered.
    pub roles: BTreeMap<SemanticRole, SemanticValue>,
    /// Nested command sequence, empty for leaf commands.
    pub body: Vec<CommandNode>,
}

impl CommandNode {
    /// Creates a leaf command node.
    #[must_use]
    pub fn leaf(command: impl Into<String>, roles: BTreeMap<SemanticRole, SemanticValue>) -> Self {
        Self {
            command: command.into(),
            roles,
            body: Vec::new(),
        }
    }

    /// Creates a wrapper node with a nested body.
    #[must_use]
    pub fn wrapper(
        command: &str,
        roles: BTreeMap<SemanticRole, SemanticValue>,
        body: Vec<CommandNode>,
    ) -> Self {
        Self {
            command: command.to_string(),
            roles,
            body,
        }
    }

    /// Returns true if this node uses a reserved wrapper name.
    #[must_use]
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self.command.as_str(),
            EVENT_COMMAND | CONDITIONAL_COMMAND | LOOP_COMMAND | SEQUENCE_COMMAND
        )
    }

    /// Gets a role binding.
    #[must_use]
    pub fn role(&self, role: SemanticRole) -> Option<&SemanticValue> {
        self.roles.get(&role)
    }

    /// Builder helper: adds a role binding.
    #[must_use]
    pub fn with_role(mut self, role: SemanticRole, value: SemanticValue) -> Self {
        self.roles.insert(role, value);
        self
    }
}

impl fmt::Display for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.command)?;
        for (role, value) in &self.roles {
            write!(f, " {role}={value}")?;
        }
        for child in &self.body {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
