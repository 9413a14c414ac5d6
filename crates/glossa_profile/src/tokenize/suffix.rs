//! Suffix-stripping tokenization (Turkish-style).
//!
//! Words are whitespace-bounded, but role markers are case suffixes fused
//! onto word ends. The longest known suffix surface is stripped into a
//! standalone `Marker` token; vowel-harmony variants are covered by the
//! markers' alternative surfaces.

use glossa_foundation::{Token, TokenKind, TokenStream};

use super::{is_punctuation_char, push_word, push_word_split_punctuation};
use crate::profile::LanguageProfile;

pub(crate) fn tokenize(text: &str, profile: &LanguageProfile) -> TokenStream {
    let mut tokens = Vec::new();
    let mut word_start = 0;
    let mut in_word = false;

    for (offset, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if in_word {
                push_split(&mut tokens, &text[word_start..offset], word_start, profile);
                in_word = false;
            }
        } else if !in_word {
            word_start = offset;
            in_word = true;
        }
    }
    if in_word {
        push_split(&mut tokens, &text[word_start..], word_start, profile);
    }

    TokenStream::new(tokens)
}

fn push_split(tokens: &mut Vec<Token>, word: &str, start: usize, profile: &LanguageProfile) {
    let trimmed = word.trim_end_matches(is_punctuation_char);
    if trimmed.len() < word.len() && !trimmed.is_empty() {
        push_split(tokens, trimmed, start, profile);
        tokens.push(Token::new(
            TokenKind::Punctuation,
            &word[trimmed.len()..],
            start + trimmed.len(),
            start + word.len(),
        ));
        return;
    }

    if let Some((stem, suffix)) = strip_suffix_marker(word, profile) {
        push_word(tokens, stem, start, profile);
        tokens.push(Token::new(
            TokenKind::Marker,
            suffix,
            start + stem.len(),
            start + word.len(),
        ));
    } else {
        push_word_split_punctuation(tokens, word, start, profile);
    }
}

/// Strips the longest trailing marker surface, leaving a usable stem.
///
/// Known keyword and marker surfaces, numbers, and quoted strings are left
/// intact so verbs and bare particles never lose their endings.
fn strip_suffix_marker<'a>(word: &'a str, profile: &LanguageProfile) -> Option<(&'a str, &'a str)> {
    let normalized = word.to_lowercase();
    if profile.is_command_surface(&normalized)
        || profile.is_marker_surface(&normalized)
        || profile.is_structure_surface(&normalized)
        || word.starts_with('"')
        || word.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    for surface in profile.trailing_marker_surfaces() {
        if let Some(stem) = word.strip_suffix(surface) {
            if stem.chars().count() >= 2 {
                return Some((stem, &word[stem.len()..]));
            }
        }
    }
    None
}
