//! Configuration for the declaration-block splitter.
//!
//! Describes the host language's statement terminator and comment markers.
//! The default matches C, C++ and Java, which covers every target rosmop
//! generates monitors for.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rosmop_foundation::{Error, Result};

/// Host-language syntax used when splitting a declaration block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclarationSyntax {
    /// Character ending each declaration.
    pub terminator: char,

    /// Marker opening a block comment.
    pub block_open: String,

    /// Marker closing a block comment.
    pub block_close: String,

    /// Marker starting a comment that runs to the end of the line.
    pub line_marker: String,
}

impl Default for DeclarationSyntax {
    fn default() -> Self {
        Self::c_like()
    }
}

impl DeclarationSyntax {
    /// `;` terminated declarations with `/* */` and `//` comments.
    #[must_use]
    pub fn c_like() -> Self {
        Self {
            terminator: ';',
            block_open: "/*".to_string(),
            block_close: "*/".to_string(),
            line_marker: "//".to_string(),
        }
    }

    /// Builder method to set the statement terminator.
    #[must_use]
    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Builder method to set the block comment markers.
    #[must_use]
    pub fn with_block_comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.block_open = open.into();
        self.block_close = close.into();
        self
    }

    /// Builder method to set the line comment marker.
    #[must_use]
    pub fn with_line_comment(mut self, marker: impl Into<String>) -> Self {
        self.line_marker = marker.into();
        self
    }

    /// Checks that the markers can be scanned unambiguously.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidSyntax` error if a marker is empty, if the
    /// terminator is whitespace, or if the terminator appears inside one of
    /// the comment markers.
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("block comment opener", &self.block_open),
            ("block comment closer", &self.block_close),
            ("line comment marker", &self.line_marker),
        ];

        if self.terminator.is_whitespace() {
            return Err(Error::invalid_syntax("terminator must not be whitespace"));
        }

        for (what, marker) in markers {
            if marker.is_empty() {
                return Err(Error::invalid_syntax(format!("{what} is empty")));
            }
            if marker.contains(self.terminator) {
                return Err(Error::invalid_syntax(format!(
                    "{what} `{marker}` contains the terminator `{}`",
                    self.terminator
                )));
            }
        }

        Ok(())
    }
}
