//! Events a monitor observes.
//!
//! Produced by the grammar parser and carried through unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rosmop_foundation::FrozenVec;

/// A message field matched by an event, e.g. `position.x = 3`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternBinding {
    /// Dotted path of the message field.
    pub field: String,
    /// Value or binding variable, as written.
    pub value: String,
}

impl PatternBinding {
    /// Creates a new pattern binding.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// An event declaration.
///
/// Corresponds to:
/// ```text
/// event name(int x) /topic std_msgs/Int32 '{data:x}' { action code }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    modifiers: FrozenVec<String>,
    name: String,
    parameters: String,
    topic: String,
    message_type: String,
    pattern: FrozenVec<PatternBinding>,
    action: String,
}

impl Event {
    /// Creates an event with the given name and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the modifiers (e.g. `creation`, `blocking`).
    #[must_use]
    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the parameter list text.
    #[must_use]
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = parameters.into();
        self
    }

    /// Builder method to set the topic and message type.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>, message_type: impl Into<String>) -> Self {
        self.topic = topic.into();
        self.message_type = message_type.into();
        self
    }

    /// Builder method to set the message pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl IntoIterator<Item = PatternBinding>) -> Self {
        self.pattern = pattern.into_iter().collect();
        self
    }

    /// Builder method to set the action code.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Words before the event name.
    #[must_use]
    pub fn modifiers(&self) -> &FrozenVec<String> {
        &self.modifiers
    }

    /// The event name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter list text, without the parentheses.
    #[must_use]
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    /// Topic the event listens on.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Message type published on the topic.
    #[must_use]
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Message fields the event matches on.
    #[must_use]
    pub fn pattern(&self) -> &FrozenVec<PatternBinding> {
        &self.pattern
    }

    /// Code run when the event fires.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns true if the event carries the given modifier.
    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}
