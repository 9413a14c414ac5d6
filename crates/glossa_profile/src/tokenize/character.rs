//! Character-bounded tokenization (Chinese-style).
//!
//! There are no delimiters: the input is segmented character by character
//! and re-merged into multi-character keywords via longest-prefix lookup
//! against the profile's surface trie. Runs that match nothing merge into
//! single `Reference` tokens.

use glossa_foundation::TokenStream;

use super::scan_with_trie;
use crate::profile::LanguageProfile;

pub(crate) fn tokenize(text: &str, profile: &LanguageProfile) -> TokenStream {
    let mut tokens = Vec::new();
    let mut chunk_start = 0;
    let mut in_chunk = false;

    // Whitespace is not expected but still treated as a boundary so mixed
    // input (latin selectors inside CJK text) cannot glue across spaces.
    for (offset, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if in_chunk {
                scan_with_trie(&mut tokens, &text[chunk_start..offset], chunk_start, profile);
                in_chunk = false;
            }
        } else if !in_chunk {
            chunk_start = offset;
            in_chunk = true;
        }
    }
    if in_chunk {
        scan_with_trie(&mut tokens, &text[chunk_start..], chunk_start, profile);
    }

    TokenStream::new(tokens)
}
