//! Integration tests for Layer 0: Foundation
//!
//! Tests for tokens, semantic values, roles, shapes, and error types.
