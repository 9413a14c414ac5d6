//! Semantic values bound to roles.
//!
//! A closed tagged union with exhaustive matching at every consumption
//! site; there are no unchecked casts anywhere downstream.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenKind};

/// The kind of a [`SemanticValue`], used for role validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueKind {
    /// Plain literal value.
    Literal,
    /// CSS-style selector.
    Selector,
    /// Named reference.
    Reference,
    /// Opaque expression text.
    Expression,
    /// Dotted property path.
    PropertyPath,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::Selector => "selector",
            Self::Reference => "reference",
            Self::Expression => "expression",
            Self::PropertyPath => "property path",
        };
        write!(f, "{name}")
    }
}

/// A value bound to a semantic role.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SemanticValue {
    /// A literal: quoted string or number, quotes removed.
    Literal(String),
    /// A selector, surface text preserved verbatim.
    Selector(String),
    /// A reference to an externally defined name.
    Reference(String),
    /// An expression, carried as opaque text.
    Expression(String),
    /// A property path, split on dots.
    PropertyPath(Vec<String>),
}

impl SemanticValue {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Literal(_) => ValueKind::Literal,
            Self::Selector(_) => ValueKind::Selector,
            Self::Reference(_) => ValueKind::Reference,
            Self::Expression(_) => ValueKind::Expression,
            Self::PropertyPath(_) => ValueKind::PropertyPath,
        }
    }

    /// Converts a token into the value it denotes.
    ///
    /// Selector tokens keep their surface text; literal tokens drop quotes;
    /// dotted reference words become property paths; anything else is a
    /// reference by name.
    #[must_use]
    pub fn from_token(token: &Token) -> Self {
        match token.kind {
            TokenKind::Selector => Self::Selector(token.text.clone()),
            TokenKind::Literal => {
                let trimmed = token.text.trim_matches('"');
                Self::Literal(trimmed.to_string())
            }
            _ => {
                let text = token.text.as_str();
                if text.starts_with('(') {
                    Self::Expression(text.to_string())
                } else if text.contains('.') && !text.starts_with('.') {
                    Self::PropertyPath(text.split('.').map(str::to_string).collect())
                } else {
                    Self::Reference(text.to_string())
                }
            }
        }
    }

    /// Renders the value back to surface text.
    ///
    /// Literals containing whitespace are re-quoted so they survive
    /// re-tokenization as a single token.
    #[must_use]
    pub fn surface(&self) -> String {
        match self {
            Self::Literal(value) => {
                if value.chars().any(char::is_whitespace) {
                    format!("\"{value}\"")
                } else {
                    value.clone()
                }
            }
            Self::Selector(text) | Self::Expression(text) | Self::Reference(text) => text.clone(),
            Self::PropertyPath(segments) => segments.join("."),
        }
    }
}

impl fmt::Display for SemanticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface())
    }
}
