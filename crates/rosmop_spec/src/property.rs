//! Logic properties over event sequences and their handlers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rosmop_foundation::FrozenVec;

/// Code run when a property reaches a given state (e.g. `@violation`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyHandler {
    /// State name without the `@`, e.g. `match` or `violation`.
    pub state: String,
    /// Handler code.
    pub action: String,
}

impl PropertyHandler {
    /// Creates a new handler.
    pub fn new(state: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            action: action.into(),
        }
    }
}

/// A property written in one of the supported logics.
///
/// Corresponds to:
/// ```text
/// ere : open close*
/// @match { ... }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Property {
    logic: String,
    syntax: String,
    handlers: FrozenVec<PropertyHandler>,
}

impl Property {
    /// Creates a property in `logic` (e.g. `ere`, `ltl`, `fsm`) with the given formula text.
    pub fn new(logic: impl Into<String>, syntax: impl Into<String>) -> Self {
        Self {
            logic: logic.into(),
            syntax: syntax.into(),
            handlers: FrozenVec::new(),
        }
    }

    /// Builder method to set the handlers, in source order.
    #[must_use]
    pub fn with_handlers(mut self, handlers: impl IntoIterator<Item = PropertyHandler>) -> Self {
        self.handlers = handlers.into_iter().collect();
        self
    }

    /// The logic the property is written in.
    #[must_use]
    pub fn logic(&self) -> &str {
        &self.logic
    }

    /// The formula text.
    #[must_use]
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// The handlers attached to this property.
    #[must_use]
    pub fn handlers(&self) -> &FrozenVec<PropertyHandler> {
        &self.handlers
    }

    /// Finds the handler for a state.
    #[must_use]
    pub fn handler(&self, state: &str) -> Option<&PropertyHandler> {
        self.handlers.iter().find(|h| h.state == state)
    }
}
