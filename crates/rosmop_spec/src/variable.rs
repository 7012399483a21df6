//! A single monitor state variable parsed from a declaration fragment.
//!
//! Fragments look like `<type tokens> <name>[suffix] [= initializer]`, as
//! written in the target language. Only the outline is checked; the type and
//! initializer are kept as opaque text.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rosmop_foundation::{Error, Result};

/// One declared monitor variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// Declared type, normalized to single spaces (e.g. `unsigned int`, `int*`).
    ty: String,
    /// Variable identifier.
    name: String,
    /// Initializer expression text, if any.
    initializer: Option<String>,
    /// The fragment this variable was parsed from.
    declaration: String,
}

impl Variable {
    /// Parses a trimmed declaration fragment such as `int count = 0`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedDeclaration` if the fragment has no type, no
    /// identifier, or an empty initializer.
    pub fn parse(declaration: &str) -> Result<Self> {
        let declaration = declaration.trim();
        let malformed = |reason: &str| Error::malformed_declaration(declaration, reason);

        if declaration.is_empty() {
            return Err(malformed("empty declaration"));
        }

        let (lhs, initializer) = match declaration.split_once('=') {
            Some((lhs, rhs)) => {
                let rhs = rhs.trim();
                if rhs.is_empty() {
                    return Err(malformed("missing initializer after `=`"));
                }
                (lhs, Some(rhs.to_string()))
            }
            None => (declaration, None),
        };

        if has_top_level_comma(lhs) {
            return Err(malformed("declarator lists are not supported"));
        }

        let mut words: Vec<&str> = lhs.split_whitespace().collect();
        let Some(declarator) = words.pop() else {
            return Err(malformed("missing variable name"));
        };
        let mut ty = words.join(" ");

        // `int *p` and `int &r` bind the pointer to the type.
        let name_start = declarator
            .find(|c: char| c != '*' && c != '&')
            .unwrap_or(declarator.len());
        ty.push_str(&declarator[..name_start]);
        let declarator = &declarator[name_start..];

        let (name, suffix) = match declarator.find('[') {
            Some(open) => declarator.split_at(open),
            None => (declarator, ""),
        };
        if !suffix.is_empty() && !suffix.ends_with(']') {
            return Err(malformed("unclosed array suffix"));
        }
        ty.push_str(suffix);

        if name.is_empty() {
            return Err(malformed("missing variable name"));
        }
        if !is_identifier(name) {
            return Err(malformed(&format!("`{name}` is not an identifier")));
        }
        if words.is_empty() {
            return Err(malformed("missing type"));
        }

        Ok(Self {
            ty,
            name: name.to_string(),
            initializer,
            declaration: declaration.to_string(),
        })
    }

    /// The variable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's declared type.
    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The initializer expression, if the declaration had one.
    #[must_use]
    pub fn initializer(&self) -> Option<&str> {
        self.initializer.as_deref()
    }

    /// The trimmed fragment this variable was parsed from.
    #[must_use]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }
}

impl FromStr for Variable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(init) = &self.initializer {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

/// Returns true if `s` has a `,` outside angle brackets.
fn has_top_level_comma(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
