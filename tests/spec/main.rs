//! Integration tests for Layer 1: Spec
//!
//! Tests for declaration splitting and specification construction.

mod specification;
mod splitter;
