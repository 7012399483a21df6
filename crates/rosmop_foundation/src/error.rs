//! Error types for rosmop.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for rosmop operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context stack, creating the context
    /// if there is none yet.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a malformed declaration error.
    #[must_use]
    pub fn malformed_declaration(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedDeclaration {
            fragment: fragment.into(),
            reason: reason.into(),
        })
    }

    /// Creates an unterminated block comment error.
    #[must_use]
    pub fn unterminated_comment(offset: usize) -> Self {
        Self::new(ErrorKind::UnterminatedComment { offset })
    }

    /// Creates an invalid declaration syntax error.
    #[must_use]
    pub fn invalid_syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSyntax(message.into()))
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::new(ErrorKind::MissingField(field))
    }

    /// Returns true if this error came from a declaration that could not be parsed.
    #[must_use]
    pub fn is_malformed_declaration(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedDeclaration { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A declaration fragment does not have the shape of a variable declaration.
    #[error("malformed declaration `{fragment}`: {reason}")]
    MalformedDeclaration {
        /// The trimmed fragment that failed to parse.
        fragment: String,
        /// Why the fragment was rejected.
        reason: String,
    },

    /// A block comment was opened but never closed.
    #[error("unterminated block comment starting at byte {offset}")]
    UnterminatedComment {
        /// Byte offset of the comment opener in the trimmed declaration block.
        offset: usize,
    },

    /// The declaration syntax configuration is unusable.
    #[error("invalid declaration syntax: {0}")]
    InvalidSyntax(String),

    /// A required field was not supplied to a builder.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Specification name or source file.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Innermost-first trail of what was being built.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
