//! Particle-bounded tokenization (Japanese-style).
//!
//! Input may have no spaces at all; known particle and keyword surfaces
//! are greedily detached from adjacent runs via longest-prefix lookup.
//! Whitespace, when present, is honored as an extra boundary so mixed
//! input still tokenizes sensibly.

use glossa_foundation::TokenStream;

use super::scan_with_trie;
use crate::profile::LanguageProfile;

pub(crate) fn tokenize(text: &str, profile: &LanguageProfile) -> TokenStream {
    let mut tokens = Vec::new();
    let mut chunk_start = 0;
    let mut in_chunk = false;

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
