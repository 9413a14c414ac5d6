//! Pattern templates, registry, generation, and matching.
//!
//! A [`LanguagePattern`] describes one valid surface form of a command in
//! one language as an ordered template of literals, role slots, and
//! optional groups. The [`PatternRegistry`] stores priority-sorted pattern
//! sets per language behind a generation counter; the [`Matcher`] aligns
//! token streams against candidate templates and ranks full matches
//! deterministically; the generator synthesizes default templates straight
//! from a language profile.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod generator;
pub mod matcher;
pub mod registry;
pub mod template;

pub use generator::generate;
pub use matcher::{Matcher, PatternMatchResult};
pub use registry::{PatternRegistry, PatternSet};
pub use template::{
    ExtractionRule, GENERATED_PRIORITY, HAND_AUTHORED_PRIORITY, LanguagePattern, Provenance,
    TemplateElement,
};
