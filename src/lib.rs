//! Glossa - Multilingual natural-language command parser
//!
//! Parses commands written in natural language into a canonical,
//! language-independent AST, and renders that AST back out in any
//! registered language. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: glossa (this crate)  — Engine facade, sample language profiles
//! Layer 2: glossa_semantics     — Segmentation, AST building, analysis,
//!                                 caching, rendering
//! Layer 1: glossa_pattern       — Pattern templates, registry, generation,
//!                                 matching
//! Layer 1: glossa_profile       — Language profiles, tokenization
//! Layer 0: glossa_foundation    — Core types (Token, SemanticRole,
//!                                 SemanticValue, CommandNode, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use glossa::Engine;
//! use glossa::languages;
//!
//! let engine = Engine::new();
//! engine.register_language(languages::english()).unwrap();
//! engine.register_language(languages::japanese()).unwrap();
//!
//! let outcome = engine.analyze("toggle .active on #button", "en").unwrap();
//! let analysis = outcome.analysis().expect("understood");
//! let japanese = engine.render(&analysis.ast, "ja").unwrap();
//! assert_eq!(japanese, "#buttonに.activeを切り替え");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use glossa_foundation as foundation;
pub use glossa_pattern as pattern;
pub use glossa_profile as profile;
pub use glossa_semantics as semantics;

mod engine;
pub mod languages;

pub use engine::Engine;

pub use glossa_foundation::{
    CommandNode, CommandShape, Error, ErrorKind, Result, SemanticRole, SemanticValue,
};
pub use glossa_pattern::{LanguagePattern, TemplateElement};
pub use glossa_profile::LanguageProfile;
pub use glossa_semantics::{Analysis, AnalysisOutcome, ConfidenceBand, NoMatchReason};
