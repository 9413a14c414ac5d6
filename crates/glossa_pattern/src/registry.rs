//! The pattern registry.
//!
//! Stores compiled pattern templates per language, priority-sorted and
//! read-only after registration. Every mutation bumps the language's
//! generation counter, which implicitly invalidates downstream caches
//! without an explicit sweep.

use std::collections::HashMap;
use std::sync::Arc;

use im::Vector;
use tracing::debug;

use glossa_foundation::Result;

use crate::template::LanguagePattern;

/// A cheap snapshot of one language's priority-sorted patterns.
///
/// Backed by a persistent vector, so cloning a snapshot out of the
/// registry is O(1) and safe to hold across registrations.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vector<Arc<LanguagePattern>>,
}

impl PatternSet {
    /// Builds a set from patterns, sorting by priority descending while
    /// preserving registration order among equal priorities.
    #[must_use]
    pub fn from_patterns(patterns: Vec<Arc<LanguagePattern>>) -> Self {
        let mut patterns = patterns;
        patterns.sort_by_key(|p| std::cmp::Reverse(p.priority));
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Iterates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguagePattern> {
        self.patterns.iter().map(Arc::as_ref)
    }

    /// Patterns for one command, in priority order.
    pub fn for_command<'a>(&'a self, command: &'a str) -> impl Iterator<Item = &'a LanguagePattern> {
        self.iter().filter(move |p| p.command == command)
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if there are no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[derive(Clone, Debug)]
struct LanguageEntry {
    patterns: Vector<Arc<LanguagePattern>>,
    generation: u64,
}

/// Per-language pattern storage with generation counters.
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    languages: HashMap<String, LanguageEntry>,
}

impl PatternRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a language's pattern set, validating every template first.
    ///
    /// Nothing is mutated if any template is invalid. Bumps the language's
    /// generation counter.
    pub fn replace(&mut self, language: &str, patterns: Vec<LanguagePattern>) -> Result<()> {
        for pattern in &patterns {
            pattern.validate()?;
        }
        let sorted = Self::sorted(patterns.into_iter().map(Arc::new).collect());
        let entry = self
            .languages
            .entry(language.to_string())
            .or_insert_with(|| LanguageEntry {
                patterns: Vector::new(),
                generation: 0,
            });
        entry.patterns = sorted;
        entry.generation += 1;
        debug!(
            language,
            patterns = entry.patterns.len(),
            generation = entry.generation,
            "replaced pattern set"
        );
        Ok(())
    }

    /// Adds patterns to a language's existing set (hand-authored overlay).
    ///
    /// Bumps the generation counter so cached analyses of the old set are
    /// never served again.
    pub fn extend(&mut self, language: &str, patterns: Vec<LanguagePattern>) -> Result<()> {
        for pattern in &patterns {
            pattern.validate()?;
        }
        let entry = self
            .languages
            .entry(language.to_string())
            .or_insert_with(|| LanguageEntry {
                patterns: Vector::new(),
                generation: 0,
            });
        let mut all: Vec<Arc<LanguagePattern>> = entry.patterns.iter().cloned().collect();
        all.extend(patterns.into_iter().map(Arc::new));
        entry.patterns = Self::sorted(all);
        entry.generation += 1;
        debug!(
            language,
            patterns = entry.patterns.len(),
            generation = entry.generation,
            "extended pattern set"
        );
        Ok(())
    }

    /// Gets a snapshot of a language's patterns.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<PatternSet> {
        self.languages.get(language).map(|entry| PatternSet {
            patterns: entry.patterns.clone(),
        })
    }

    /// The language's current generation, 0 if never registered.
    #[must_use]
    pub fn generation(&self, language: &str) -> u64 {
        self.languages.get(language).map_or(0, |e| e.generation)
    }

    /// Registered language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    fn sorted(mut patterns: Vec<Arc<LanguagePattern>>) -> Vector<Arc<LanguagePattern>> {
        patterns.sort_by_key(|p| std::cmp::Reverse(p.priority));
        patterns.into_iter().collect()
    }
}
