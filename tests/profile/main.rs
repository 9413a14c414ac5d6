//! Integration tests for Layer 1: Profiles
//!
//! Tests for language profiles, surface lookup, and the four tokenization
//! boundary strategies.

mod profiles;
mod tokenization;
