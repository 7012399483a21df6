//! Comment removal for declaration blocks.
//!
//! A two-state scanner: outside a comment, text is copied through; inside a
//! block comment, everything up to the first closing marker is dropped.
//! Line comments are dropped up to (not including) the line break.

use rosmop_foundation::{Error, Result};

use crate::syntax::DeclarationSyntax;

/// Where the scanner currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Ordinary declaration text.
    Text,
    /// Inside a block comment opened at the given byte offset.
    Block { opened_at: usize },
}

/// Scanner that strips comments from a declaration block.
pub struct CommentScanner<'src, 'syn> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Markers being recognized.
    syntax: &'syn DeclarationSyntax,
    /// Current scanner state.
    state: State,
}

impl<'src, 'syn> CommentScanner<'src, 'syn> {
    /// Creates a new scanner over `source`.
    #[must_use]
    pub fn new(source: &'src str, syntax: &'syn DeclarationSyntax) -> Self {
        Self {
            rest: source,
            position: 0,
            syntax,
            state: State::Text,
        }
    }

    /// Consumes the scanner and returns the source with every comment removed.
    ///
    /// # Errors
    ///
    /// Returns `UnterminatedComment` if the input ends inside a block comment.
    pub fn strip(mut self) -> Result<String> {
        let mut out = String::with_capacity(self.rest.len());

        while let Some(c) = self.peek_char() {
            match self.state {
                State::Text => {
                    if self.rest.starts_with(self.syntax.block_open.as_str()) {
                        self.state = State::Block {
                            opened_at: self.position,
                        };
                        self.advance_by(self.syntax.block_open.len());
                    } else if self.rest.starts_with(self.syntax.line_marker.as_str()) {
                        self.skip_line_comment();
                    } else {
                        out.push(c);
                        self.advance_by(c.len_utf8());
                    }
                }
                State::Block { .. } => {
                    if self.rest.starts_with(self.syntax.block_close.as_str()) {
                        self.advance_by(self.syntax.block_close.len());
                        self.state = State::Text;
                    } else {
                        self.advance_by(c.len_utf8());
                    }
                }
            }
        }

        match self.state {
            State::Text => Ok(out),
            State::Block { opened_at } => Err(Error::unterminated_comment(opened_at)),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance_by(&mut self, len: usize) {
        self.rest = &self.rest[len..];
        self.position += len;
    }

    /// Skips from a line marker to the next line break, leaving the break.
    fn skip_line_comment(&mut self) {
        let len = self.rest.find(['\n', '\r']).unwrap_or(self.rest.len());
        self.advance_by(len);
    }
}

/// Returns `source` with all block and line comments removed.
///
/// Comments are replaced with nothing, so `a/**/b` becomes `ab`.
///
/// # Errors
///
/// Returns `UnterminatedComment` if a block comment is never closed.
pub fn strip_comments(source: &str, syntax: &DeclarationSyntax) -> Result<String> {
    CommentScanner::new(source, syntax).strip()
}
