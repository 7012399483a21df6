//! Declaration-block tokenizing.
//!
//! A specification's declaration block is free-form target-language text.
//! The flow is: raw block → trim → `strip_comments` → split on terminator →
//! `Variable::parse` per fragment.
//!
//! # Module Structure
//!
//! - `scanner` - Two-state comment scanner
//! - `splitter` - The `DeclarationSplitter` and fragment filtering
//!
//! Comment detection does not understand string literals: a `//` or a
//! terminator inside a quoted initializer is treated like any other text.

mod scanner;
mod splitter;


pub use scanner::{CommentScanner, strip_comments};
pub use splitter::{DeclarationSplitter, ParsedDeclarations, fragments};
