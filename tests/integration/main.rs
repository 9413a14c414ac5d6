//! Workspace integration tests.
//!
//! End-to-end coverage of the engine facade plus the system-level
//! properties: self-consistency of generated patterns, round trips,
//! canonicalization, cross-language isomorphism, determinism, and cache
//! invalidation.

mod translation;
