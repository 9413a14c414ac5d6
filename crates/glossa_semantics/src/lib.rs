//! Structure segmentation, AST building, analysis, caching, and rendering.
//!
//! This crate is the semantic half of the pipeline: [`structure`] cuts a
//! token stream into command segments, [`builder`] turns match results
//! into validated [`CommandNode`](glossa_foundation::CommandNode) trees,
//! [`analyzer`] orchestrates the whole run with confidence scoring,
//! [`cache`] memoizes outcomes behind registry generations, and [`render`]
//! inverts the pipeline back to text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod builder;
pub mod cache;
pub mod render;
pub mod structure;

pub use analyzer::{
    Analysis, AnalysisOutcome, Analyzer, ConfidenceBand, DEFAULT_CONFIDENCE_THRESHOLD,
    HIGH_CONFIDENCE_THRESHOLD, NoMatchReason, match_confidence,
};
pub use builder::{AstBuilder, conditional_node, event_node, loop_node, sequence_node};
pub use cache::{AnalysisCache, DEFAULT_CACHE_CAPACITY};
pub use render::render;
pub use structure::{Segment, segment};
