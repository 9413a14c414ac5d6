//! The engine facade.
//!
//! Owns the registered language profiles, the pattern registry, and the
//! analysis cache, so one engine can serve many threads. Profiles and
//! patterns live under a single lock: a reader always sees a profile
//! paired with the pattern set generated from it, and registration is
//! atomic relative to analysis. Cached analyses of an older pattern set
//! are never served.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use glossa_foundation::{CommandNode, Error, Result};
use glossa_pattern::{LanguagePattern, PatternRegistry, PatternSet, generate};
use glossa_profile::LanguageProfile;
use glossa_semantics::{AnalysisCache, AnalysisOutcome, Analyzer, render};

/// Registration state: profiles and their pattern sets, swapped together.
struct State {
    profiles: HashMap<String, Arc<LanguageProfile>>,
    registry: PatternRegistry,
}

/// A thread-safe multilingual command parsing engine.
pub struct Engine {
    state: RwLock<State>,
    analyzer: Analyzer,
    cache: AnalysisCache,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with no registered languages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                profiles: HashMap::new(),
                registry: PatternRegistry::new(),
            }),
            analyzer: Analyzer::new(),
            cache: AnalysisCache::default(),
        }
    }

    /// Creates an engine with a custom analysis cache capacity.
    #[must_use]
    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            cache: AnalysisCache::new(capacity),
            ..Self::new()
        }
    }

    /// Registers a language: stores the profile and generates its default
    /// pattern set, as one atomic swap.
    ///
    /// Re-registering a language replaces its profile and patterns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if a generated pattern fails validation.
    pub fn register_language(&self, profile: LanguageProfile) -> Result<()> {
        let patterns = generate(&profile);
        let code = profile.code.clone();
        {
            let mut state = self.write_state();
            state.registry.replace(&code, patterns)?;
            state.profiles.insert(code.clone(), Arc::new(profile));
        }
        info!(language = %code, "registered language");
        Ok(())
    }

    /// Adds hand-authored patterns on top of a language's generated set.
    ///
    /// # Errors
    ///
    /// Returns `LanguageNotSupported` for an unregistered language and
    /// `InvalidPattern` if any template fails validation.
    pub fn register_patterns(&self, language: &str, patterns: Vec<LanguagePattern>) -> Result<()> {
        {
            let mut state = self.write_state();
            if !state.profiles.contains_key(language) {
                return Err(Error::language_not_supported(language));
            }
            state.registry.extend(language, patterns)?;
        }
        info!(language, "registered hand-authored patterns");
        Ok(())
    }

    /// The profile registered for a language code.
    ///
    /// # Errors
    ///
    /// Returns `LanguageNotSupported` for an unregistered code.
    pub fn profile(&self, language: &str) -> Result<Arc<LanguageProfile>> {
        self.read_state()
            .profiles
            .get(language)
            .cloned()
            .ok_or_else(|| Error::language_not_supported(language))
    }

    /// Registered language codes, sorted.
    #[must_use]
    pub fn supported_languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.read_state().profiles.keys().cloned().collect();
        codes.sort_unstable();
        codes
    }

    /// Analyzes text in the given language.
    ///
    /// Outcomes are cached per (text, language, registry generation); a
    /// sentence that fails to parse is a cached `NoMatch`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `LanguageNotSupported` for an unregistered code.
    pub fn analyze(&self, text: &str, language: &str) -> Result<AnalysisOutcome> {
        let (profile, patterns, generation) = self.snapshot(language)?;
        let key = AnalysisCache::key(text, language, generation);
        if let Some(outcome) = self.cache.get(key) {
            return Ok(outcome);
        }
        let outcome = self.analyzer.analyze(text, &profile, &patterns);
        self.cache.insert(key, outcome.clone());
        Ok(outcome)
    }

    /// Renders a command tree as text in the given language.
    ///
    /// # Errors
    ///
    /// Returns `LanguageNotSupported` for an unregistered code, and the
    /// renderer's errors for untranslatable trees.
    pub fn render(&self, node: &CommandNode, language: &str) -> Result<String> {
        let (profile, patterns, _) = self.snapshot(language)?;
        render(node, &profile, &patterns)
    }

    /// Translates text from one language to another through the canonical
    /// tree.
    ///
    /// # Errors
    ///
    /// Returns `LanguageNotSupported` for unregistered codes and
    /// `NoTranslation` when the source text is not understood.
    pub fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        match self.analyze(text, from)? {
            AnalysisOutcome::Match(analysis) => self.render(&analysis.ast, to),
            AnalysisOutcome::NoMatch(reason) => Err(Error::no_translation(format!(
                "source text not understood: {reason:?}"
            ))),
        }
    }

    /// Re-renders text in its own language, yielding the canonical form.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::translate`].
    pub fn round_trip(&self, text: &str, language: &str) -> Result<String> {
        self.translate(text, language, language)
    }

    /// A coherent view of one language: the profile, the pattern set
    /// generated from it, and the generation both belong to, taken under
    /// one read lock.
    fn snapshot(&self, language: &str) -> Result<(Arc<LanguageProfile>, PatternSet, u64)> {
        let state = self.read_state();
        let profile = state
            .profiles
            .get(language)
            .cloned()
            .ok_or_else(|| Error::language_not_supported(language))?;
        let patterns = state
            .registry
            .get(language)
            .ok_or_else(|| Error::language_not_supported(language))?;
        Ok((profile, patterns, state.registry.generation(language)))
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
