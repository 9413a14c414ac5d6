//! Tokens and token streams.
//!
//! Tokens are the smallest lexical units produced by tokenization. Every
//! token carries its original surface text, a normalized form used for
//! matching, and byte offsets into the normalized input.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The lexical kind of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A recognized command or structure word (e.g. `toggle`, `if`).
    Keyword,
    /// A literal value: quoted string or number.
    Literal,
    /// A CSS-style selector (`.active`, `#button`, `<div/>`, `@name`).
    Selector,
    /// An unrecognized word, treated as a reference to something external.
    Reference,
    /// A role marker: preposition, postposition, particle, or suffix.
    Marker,
    /// Trailing punctuation.
    Punctuation,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Literal => "literal",
            Self::Selector => "selector",
            Self::Reference => "reference",
            Self::Marker => "marker",
            Self::Punctuation => "punctuation",
        };
        write!(f, "{name}")
    }
}

/// A single token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// Lexical kind.
    pub kind: TokenKind,
    /// Original surface text.
    pub text: String,
    /// Normalized form used for matching (lowercased).
    pub normalized: String,
    /// Byte offset of the first byte in the input.
    pub start: usize,
    /// Byte offset one past the last byte in the input.
    pub end: usize,
}

impl Token {
    /// Creates a token, normalizing the surface text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        let text = text.into();
        let normalized = text.to_lowercase();
        Self {
            kind,
            text,
            normalized,
            start,
            end,
        }
    }

    /// Returns true for punctuation tokens.
    #[must_use]
    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    /// Returns true for marker tokens.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.kind == TokenKind::Marker
    }
}

/// A finite, ordered, restartable sequence of tokens.
///
/// Offsets are monotonic and non-overlapping, covering the normalized input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates a stream from pre-built tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Creates an empty stream.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of tokens in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Gets the token at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens that are not punctuation.
    #[must_use]
    pub fn significant_len(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_punctuation()).count()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
