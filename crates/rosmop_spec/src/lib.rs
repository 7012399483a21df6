//! Specification data model and declaration-block splitter for rosmop.
//!
//! This crate provides:
//! - [`Specification`] - The immutable parsed form of one monitor definition
//! - [`DeclarationSplitter`] - Turns a declaration block into [`Variable`]s
//! - [`DeclarationSyntax`] - Terminator and comment markers of the host language
//! - [`Event`] and [`Property`] - Payload records supplied by the grammar parser

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod event;
pub mod property;
pub mod specification;
pub mod syntax;
pub mod variable;


pub use declaration::{DeclarationSplitter, ParsedDeclarations, strip_comments};
pub use event::{Event, PatternBinding};
pub use property::{Property, PropertyHandler};
pub use specification::{Specification, SpecificationBuilder, SpecificationParts};
pub use syntax::DeclarationSyntax;
pub use variable::Variable;
