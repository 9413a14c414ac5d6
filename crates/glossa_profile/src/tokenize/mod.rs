//! Tokenization dispatch and shared classification.
//!
//! The tokenizer never fails: unknown words become `Reference` tokens and
//! empty input yields an empty stream, so the matcher can fail cleanly
//! downstream instead of the tokenizer failing hard.

mod character;
mod particle;
mod space;
mod suffix;

use glossa_foundation::{Token, TokenKind, TokenStream};

use crate::profile::{BoundaryStrategy, LanguageProfile};

/// Segments raw text into a token stream using the profile's boundary
/// strategy.
#[must_use]
pub fn tokenize(text: &str, profile: &LanguageProfile) -> TokenStream {
    if text.trim().is_empty() {
        return TokenStream::empty();
    }
    match profile.boundary {
        BoundaryStrategy::Space => space::tokenize(text, profile),
        BoundaryStrategy::Particle => particle::tokenize(text, profile),
        BoundaryStrategy::Character => character::tokenize(text, profile),
        BoundaryStrategy::Suffix => suffix::tokenize(text, profile),
    }
}

/// Classifies a word against the profile's surface tables.
pub(crate) fn classify(word: &str, profile: &LanguageProfile) -> TokenKind {
    if !word.is_empty() && word.chars().all(is_punctuation_char) {
        return TokenKind::Punctuation;
    }
    if word.starts_with('"') {
        return TokenKind::Literal;
    }
    if is_selector(word) {
        return TokenKind::Selector;
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return TokenKind::Literal;
    }
    let normalized = word.to_lowercase();
    if profile.is_marker_surface(&normalized) {
        return TokenKind::Marker;
    }
    if profile.is_command_surface(&normalized) || profile.is_structure_surface(&normalized) {
        return TokenKind::Keyword;
    }
    TokenKind::Reference
}

/// Builds and pushes a classified token.
pub(crate) fn push_word(
    tokens: &mut Vec<Token>,
    word: &str,
    start: usize,
    profile: &LanguageProfile,
) {
    if word.is_empty() {
        return;
    }
    let kind = classify(word, profile);
    tokens.push(Token::new(kind, word, start, start + word.len()));
}

/// Pushes a word after splitting off trailing sentence punctuation.
pub(crate) fn push_word_split_punctuation(
    tokens: &mut Vec<Token>,
    word: &str,
    start: usize,
    profile: &LanguageProfile,
) {
    let trimmed = word.trim_end_matches(is_punctuation_char);
    // A bare punctuation run is kept as a single punctuation token.
    if trimmed.is_empty() {
        push_word(tokens, word, start, profile);
        return;
    }
    push_word(tokens, trimmed, start, profile);
    let rest = &word[trimmed.len()..];
    if !rest.is_empty() {
        tokens.push(Token::new(
            TokenKind::Punctuation,
            rest,
            start + trimmed.len(),
            start + word.len(),
        ));
    }
}

pub(crate) fn is_punctuation_char(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '。' | '、' | '！' | '？')
}

pub(crate) fn is_selector(word: &str) -> bool {
    word.starts_with('.') && word.len() > 1
        || word.starts_with('#') && word.len() > 1
        || word.starts_with('@') && word.len() > 1
        || (word.starts_with('<') && word.ends_with('>'))
}

/// Scans a chunk with the profile's surface trie, splitting out known
/// surfaces and merging unknown runs. Shared by the particle and character
/// strategies.
pub(crate) fn scan_with_trie(
    tokens: &mut Vec<Token>,
    chunk: &str,
    base: usize,
    profile: &LanguageProfile,
) {
    let trie = profile.surface_trie();
    let mut run_start = 0;
    let mut pos = 0;
    while pos < chunk.len() {
        let rest = &chunk[pos..];
        if let Some(len) = trie.longest_prefix(rest) {
            if run_start < pos {
                push_word_split_punctuation(
                    tokens,
                    &chunk[run_start..pos],
                    base + run_start,
                    profile,
                );
            }
            push_word(tokens, &rest[..len], base + pos, profile);
            pos += len;
            run_start = pos;
        } else {
            let ch = rest.chars().next().map_or(1, char::len_utf8);
            pos += ch;
        }
    }
    if run_start < chunk.len() {
        push_word_split_punctuation(tokens, &chunk[run_start..], base + run_start, profile);
    }
}
