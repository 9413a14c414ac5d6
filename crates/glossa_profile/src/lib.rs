//! Language profiles and tokenization for the glossa parser.
//!
//! A [`LanguageProfile`] is the static per-language grammar and keyword
//! configuration: word order, marking strategy, tokenization boundary,
//! command lexicon, role markers, and structure surfaces. Profiles are
//! opaque configuration values supplied at registration time and are
//! read-only afterwards.
//!
//! [`tokenize`] dispatches on the profile's boundary strategy:
//!
//! - *Space* - whitespace split, attached particles detached
//! - *Particle* - greedy particle detachment within chunks (Japanese-style)
//! - *Character* - longest-prefix segmentation with no delimiters at all
//! - *Suffix* - vowel-harmony-aware suffix stripping (Turkish-style)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod profile;
pub mod tokenize;
pub mod trie;

pub use profile::{
    BoundaryStrategy, CommandEntry, LanguageProfile, MarkingStrategy, StructureSurfaces, WordOrder,
};
pub use tokenize::tokenize;
pub use trie::SurfaceTrie;
