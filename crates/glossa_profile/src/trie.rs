//! Longest-prefix lookup over known surface forms.
//!
//! Used by the particle and character tokenizers to re-merge character
//! runs into multi-character keywords and particles.

use std::collections::HashMap;

/// A character trie over surface forms.
#[derive(Clone, Debug, Default)]
pub struct SurfaceTrie {
    children: HashMap<char, SurfaceTrie>,
    terminal: bool,
}

impl SurfaceTrie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a surface form.
    pub fn insert(&mut self, surface: &str) {
        let mut node = self;
        for ch in surface.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.terminal = true;
    }

    /// Builds a trie from an iterator of surfaces.
    pub fn from_surfaces<'a, I: IntoIterator<Item = &'a str>>(surfaces: I) -> Self {
        let mut trie = Self::new();
        for surface in surfaces {
            trie.insert(surface);
        }
        trie
    }

    /// Returns the byte length of the longest surface that is a prefix of
    /// `text`, or `None` if no surface matches.
    #[must_use]
    pub fn longest_prefix(&self, text: &str) -> Option<usize> {
        let mut node = self;
        let mut best = None;
        for (offset, ch) in text.char_indices() {
            match node.children.get(&ch) {
                Some(child) => {
                    node = child;
                    if node.terminal {
                        best = Some(offset + ch.len_utf8());
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Returns true if the trie contains no surfaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && !self.terminal
    }
}
