//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error and read-only persistent collections.

mod collections;
