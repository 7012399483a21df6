//! rosmop - Front-end data model for runtime monitor specifications
//!
//! This crate re-exports all layers of the rosmop system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: rosmop_spec       — Specification, declaration splitter, events, properties
//! Layer 0: rosmop_foundation — Core types (Error, FrozenVec)
//! ```

pub use rosmop_foundation as foundation;
pub use rosmop_spec as spec;
