//! Building canonical AST nodes from match results.
//!
//! The builder owns the command shape table and enforces it: every required
//! role must be bound, and every binding must carry a value kind the role
//! accepts. Shape violations are typed errors, not silent omissions, so a
//! bad pattern surfaces at the first sentence it matches.

use std::collections::HashMap;

use glossa_foundation::{
    CONDITIONAL_COMMAND, CommandNode, CommandShape, EVENT_COMMAND, Error, LOOP_COMMAND, Result,
    SEQUENCE_COMMAND, SemanticRole, SemanticValue, builtin_shapes,
};
use glossa_pattern::PatternMatchResult;

/// Builds and validates command nodes.
#[derive(Clone, Debug)]
pub struct AstBuilder {
    shapes: HashMap<String, CommandShape>,
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AstBuilder {
    /// Creates a builder over the builtin command shapes.
    #[must_use]
    pub fn new() -> Self {
        let shapes = builtin_shapes()
            .into_iter()
            .map(|s| (s.command.clone(), s))
            .collect();
        Self { shapes }
    }

    /// Adds or overrides shapes, e.g. a profile's extra commands.
    #[must_use]
    pub fn with_shapes(mut self, extra: &[CommandShape]) -> Self {
        for shape in extra {
            self.shapes.insert(shape.command.clone(), shape.clone());
        }
        self
    }

    /// The shape registered for a command.
    #[must_use]
    pub fn shape(&self, command: &str) -> Option<&CommandShape> {
        self.shapes.get(command)
    }

    /// Builds a validated leaf node from a match result.
    ///
    /// # Errors
    ///
    /// `UnknownCommand` when no shape is registered, `MissingRole` when a
    /// required role is unbound, `InvalidRoleValue` when a binding carries
    /// a value kind the role rejects.
    pub fn build(&self, matched: &PatternMatchResult) -> Result<CommandNode> {
        let shape = self
            .shapes
            .get(&matched.command)
            .ok_or_else(|| Error::unknown_command(&matched.command))?;
        for role in &shape.required {
            if !matched.bindings.contains_key(role) {
                return Err(Error::missing_role(&matched.command, *role));
            }
        }
        for (role, value) in &matched.bindings {
            let accepted = role.accepted_kinds();
            if !accepted.contains(&value.kind()) {
                return Err(Error::invalid_role_value(*role, accepted[0], value.kind()));
            }
        }
        Ok(CommandNode::leaf(
            matched.command.clone(),
            matched.bindings.clone(),
        ))
    }
}

/// An event-handler wrapper node.
#[must_use]
pub fn event_node(event: SemanticValue, body: Vec<CommandNode>) -> CommandNode {
    CommandNode::wrapper(EVENT_COMMAND, std::collections::BTreeMap::new(), body)
        .with_role(SemanticRole::Event, event)
}

/// A conditional wrapper node.
///
/// With an else branch both arms are always wrapped in sequence nodes, even
/// single-command arms. A two-sequence body is the only encoding of an else
/// branch, so it must never collide with a plain two-command then-body.
#[must_use]
pub fn conditional_node(
    condition: SemanticValue,
    then: Vec<CommandNode>,
    otherwise: Option<Vec<CommandNode>>,
) -> CommandNode {
    let wrap = |body: Vec<CommandNode>| {
        CommandNode::wrapper(SEQUENCE_COMMAND, std::collections::BTreeMap::new(), body)
    };
    let body = match otherwise {
        Some(else_body) => vec![wrap(then), wrap(else_body)],
        None => then,
    };
    CommandNode::wrapper(CONDITIONAL_COMMAND, std::collections::BTreeMap::new(), body)
        .with_role(SemanticRole::Condition, condition)
}

/// A counted-loop wrapper node.
#[must_use]
pub fn loop_node(count: SemanticValue, body: Vec<CommandNode>) -> CommandNode {
    CommandNode::wrapper(LOOP_COMMAND, std::collections::BTreeMap::new(), body)
        .with_role(SemanticRole::Quantity, count)
}

/// A sequence wrapper node. A single-command sequence collapses to the
/// command itself.
#[must_use]
pub fn sequence_node(mut body: Vec<CommandNode>) -> CommandNode {
    if body.len() == 1 {
        return body.remove(0);
    }
    CommandNode::wrapper(SEQUENCE_COMMAND, std::collections::BTreeMap::new(), body)
}
