//! Whitespace-bounded tokenization.
//!
//! Splits on whitespace, keeps quoted strings atomic, splits trailing
//! punctuation, and — when the profile declares attached markers — detaches
//! postposition particles fused onto word ends (Korean-style).

use glossa_foundation::{Token, TokenKind, TokenStream};

use super::{push_word, push_word_split_punctuation};
use crate::profile::LanguageProfile;

pub(crate) fn tokenize(text: &str, profile: &LanguageProfile) -> TokenStream {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut word_start = 0;
    let mut word = String::new();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => {
                flush(&mut tokens, &mut word, word_start, profile);
                let mut quoted = String::from('"');
                let start = offset;
                let mut end = offset + ch.len_utf8();
                for (o, c) in chars.by_ref() {
                    end = o + c.len_utf8();
                    quoted.push(c);
                    if c == '"' {
                        break;
                    }
                }
                tokens.push(Token::new(TokenKind::Literal, quoted, start, end));
            }
            c if c.is_whitespace() => {
                flush(&mut tokens, &mut word, word_start, profile);
            }
            _ => {
                if word.is_empty() {
                    word_start = offset;
                }
                word.push(ch);
            }
        }
    }
    flush(&mut tokens, &mut word, word_start, profile);

    TokenStream::new(tokens)
}

fn flush(tokens: &mut Vec<Token>, word: &mut String, start: usize, profile: &LanguageProfile) {
    if word.is_empty() {
        return;
    }
    if profile.attached_markers {
        if let Some((stem, marker)) = detach_marker(word, profile) {
            push_word(tokens, stem, start, profile);
            tokens.push(Token::new(
                TokenKind::Marker,
                marker,
                start + stem.len(),
                start + word.len(),
            ));
            word.clear();
            return;
        }
    }
    push_word_split_punctuation(tokens, word, start, profile);
    word.clear();
}

/// Splits a fused trailing marker off a word, longest surface first.
///
/// Words that are themselves known surfaces are left intact so verbs and
/// free-standing markers never get mangled.
fn detach_marker<'a>(word: &'a str, profile: &LanguageProfile) -> Option<(&'a str, &'a str)> {
    let normalized = word.to_lowercase();
    if profile.is_command_surface(&normalized)
        || profile.is_marker_surface(&normalized)
        || profile.is_structure_surface(&normalized)
    {
        return None;
    }
    for surface in profile.trailing_marker_surfaces() {
        if let Some(stem) = word.strip_suffix(surface) {
            if stem.chars().count() >= 2 {
                let split = word.len() - surface.len();
                return Some((&word[..split], &word[split..]));
            }
        }
    }
    None
}
