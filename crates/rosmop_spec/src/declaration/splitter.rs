//! Splits a declaration block into parsed variables.

use log::{debug, trace};
use rosmop_foundation::{FrozenVec, Result};

use super::scanner::strip_comments;
use crate::syntax::DeclarationSyntax;
use crate::variable::Variable;

/// The result of splitting a declaration block.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ParsedDeclarations {
    /// The block, trimmed, with its comments still in place.
    pub text: String,
    /// One variable per declaration, in source order.
    pub variables: FrozenVec<Variable>,
}

/// Turns a raw declaration block into variables.
///
/// The whole block is stripped of comments before it is split, so a
/// terminator inside a comment never starts a new declaration.
#[derive(Clone, Debug, Default)]
pub struct DeclarationSplitter {
    syntax: DeclarationSyntax,
}

impl DeclarationSplitter {
    /// Creates a splitter for the given host-language syntax.
    #[must_use]
    pub fn new(syntax: DeclarationSyntax) -> Self {
        Self { syntax }
    }

    /// The syntax this splitter recognizes.
    #[must_use]
    pub fn syntax(&self) -> &DeclarationSyntax {
        &self.syntax
    }

    /// Splits `raw` into variables.
    ///
    /// An empty or whitespace-only block yields no variables. Empty
    /// fragments, such as the one after a trailing terminator, are dropped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSyntax` if the configured syntax is unusable,
    /// `UnterminatedComment` if a block comment is never closed, or the first
    /// `MalformedDeclaration` encountered. Nothing is returned on failure.
    /// A malformed declaration's context frame is `declaration <n>`, where
    /// `n` is the zero-based position among all terminator-separated pieces,
    /// empty ones included.
    pub fn split(&self, raw: &str) -> Result<ParsedDeclarations> {
        self.syntax.validate()?;

        let text = raw.trim();
        let stripped = strip_comments(text, &self.syntax)?;

        let variables = fragments(&stripped, &self.syntax)
            .into_iter()
            .map(|(index, fragment)| {
                Variable::parse(fragment).map_err(|e| e.in_frame(format!("declaration {index}")))
            })
            .collect::<Result<FrozenVec<_>>>()?;

        debug!(
            "split {} bytes of declarations into {} variables",
            text.len(),
            variables.len()
        );

        Ok(ParsedDeclarations {
            text: text.to_string(),
            variables,
        })
    }
}

/// Splits comment-free text on the terminator into trimmed, non-empty fragments.
///
/// Each fragment is paired with its zero-based position among all pieces
/// produced by the split. Fragments that still begin with the line comment
/// marker are skipped.
#[must_use]
pub fn fragments<'a>(stripped: &'a str, syntax: &DeclarationSyntax) -> Vec<(usize, &'a str)> {
    if stripped.trim().is_empty() {
        return Vec::new();
    }

    stripped
        .split(syntax.terminator)
        .map(str::trim)
        .enumerate()
        .filter(|(_, fragment)| {
            if fragment.starts_with(syntax.line_marker.as_str()) {
                trace!("skipping comment fragment `{fragment}`");
                return false;
            }
            !fragment.is_empty()
        })
        .collect()
}
