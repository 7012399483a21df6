//! Core error types and read-only persistent collections for rosmop.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`FrozenVec`] - Read-only persistent sequence used for every
//!   collection a parsed specification exposes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;

pub use collections::FrozenVec;
pub use error::{Error, ErrorContext, ErrorKind};

/// Result alias used throughout rosmop.
pub type Result<T> = std::result::Result<T, Error>;
