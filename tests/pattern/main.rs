//! Integration tests for Layer 1: Patterns
//!
//! Tests for template validation, the registry, default pattern
//! generation, and matching.

mod generation;
mod matching;
mod registry;
