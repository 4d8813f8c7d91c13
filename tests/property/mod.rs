//! Property-based tests for hashing and listing

mod determinism;
