//! The parsed form of one monitor specification.
//!
//! A `Specification` is built once by the grammar parser and never changes
//! afterwards. Its variable list is derived from the declaration block while
//! it is being built; if any declaration fails to parse, no `Specification`
//! is produced at all.

use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use rosmop_foundation::{Error, FrozenVec, Result};

use crate::declaration::DeclarationSplitter;
use crate::event::Event;
use crate::property::Property;
use crate::syntax::DeclarationSyntax;
use crate::variable::Variable;

/// Everything the grammar parser hands over to build a [`Specification`].
#[derive(Clone, Debug, Default)]
pub struct SpecificationParts {
    /// Text preceding the specification (imports, includes), passed through.
    pub pre_declarations: String,
    /// Words before the name directing behavior of the code generator.
    pub language_modifiers: Vec<String>,
    /// The name of the specification.
    pub name: String,
    /// Parameters used to parameterize the monitor.
    pub language_parameters: String,
    /// Raw language-specific declarations used in the monitoring code.
    pub language_declarations: String,
    /// Initialization block for the declarations.
    pub init: String,
    /// The events to monitor.
    pub events: Vec<Event>,
    /// Properties and handlers on the sequence of events.
    pub properties: Vec<Property>,
}

/// A monitor specification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Specification {
    pre_declarations: String,
    language_modifiers: FrozenVec<String>,
    name: String,
    language_parameters: String,
    language_declarations: String,
    init: String,
    events: FrozenVec<Event>,
    properties: FrozenVec<Property>,
    spec_declarations: FrozenVec<Variable>,
}

impl Specification {
    /// Builds a specification using C-like declaration syntax.
    ///
    /// # Errors
    ///
    /// Fails if the declaration block cannot be split into variables.
    pub fn new(parts: SpecificationParts) -> Result<Self> {
        Self::with_syntax(parts, &DeclarationSyntax::default())
    }

    /// Builds a specification whose declarations use `syntax`.
    ///
    /// # Errors
    ///
    /// Fails if the declaration block cannot be split into variables. The
    /// error's context names the specification and the failing declaration.
    pub fn with_syntax(parts: SpecificationParts, syntax: &DeclarationSyntax) -> Result<Self> {
        let SpecificationParts {
            pre_declarations,
            language_modifiers,
            name,
            language_parameters,
            language_declarations,
            init,
            events,
            properties,
        } = parts;

        let parsed = DeclarationSplitter::new(syntax.clone())
            .split(&language_declarations)
            .map_err(|e| attach_source(e, &name))?;

        debug!(
            "built specification {name} with {} variables, {} events, {} properties",
            parsed.variables.len(),
            events.len(),
            properties.len()
        );

        Ok(Self {
            pre_declarations,
            language_modifiers: language_modifiers.into(),
            name,
            language_parameters,
            language_declarations: parsed.text,
            init,
            events: events.into(),
            properties: properties.into(),
            spec_declarations: parsed.variables,
        })
    }

    /// Starts building a specification.
    #[must_use]
    pub fn builder() -> SpecificationBuilder {
        SpecificationBuilder::default()
    }

    /// Text preceding the specification, passed through unchanged.
    #[must_use]
    pub fn pre_declarations(&self) -> &str {
        &self.pre_declarations
    }

    /// Words used to affect the code generator.
    #[must_use]
    pub fn language_modifiers(&self) -> &FrozenVec<String> {
        &self.language_modifiers
    }

    /// The name of the specification/monitor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variables used to parameterize the monitor, if any.
    #[must_use]
    pub fn language_parameters(&self) -> &str {
        &self.language_parameters
    }

    /// Declarations used by the monitor, trimmed, comments included.
    #[must_use]
    pub fn language_declarations(&self) -> &str {
        &self.language_declarations
    }

    /// The variables parsed out of the declaration block, in source order.
    #[must_use]
    pub fn spec_declarations(&self) -> &FrozenVec<Variable> {
        &self.spec_declarations
    }

    /// Initialization code for the declarations.
    #[must_use]
    pub fn init(&self) -> &str {
        &self.init
    }

    /// The events being monitored.
    #[must_use]
    pub fn events(&self) -> &FrozenVec<Event> {
        &self.events
    }

    /// The properties with their handlers.
    #[must_use]
    pub fn properties(&self) -> &FrozenVec<Property> {
        &self.properties
    }

    /// Returns true if the specification carries the given modifier.
    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.language_modifiers.iter().any(|m| m == modifier)
    }

    /// Finds a declared variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.spec_declarations.iter().find(|v| v.name() == name)
    }

    /// Finds an event by name.
    #[must_use]
    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.name() == name)
    }
}

fn attach_source(mut error: Error, name: &str) -> Error {
    let context = error.context.take().unwrap_or_default().with_source(name);
    error.with_context(context)
}

/// Incremental construction of a [`Specification`].
///
/// ```text
/// let spec = Specification::builder()
///     .name("DoorMonitor")
///     .declarations("int opened = 0;")
///     .event(Event::new("open"))
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpecificationBuilder {
    parts: SpecificationParts,
    name: Option<String>,
    syntax: DeclarationSyntax,
}

impl SpecificationBuilder {
    /// Sets the pre-declaration text.
    #[must_use]
    pub fn pre_declarations(mut self, text: impl Into<String>) -> Self {
        self.parts.pre_declarations = text.into();
        self
    }

    /// Appends a language modifier.
    #[must_use]
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.parts.language_modifiers.push(modifier.into());
        self
    }

    /// Appends several language modifiers.
    #[must_use]
    pub fn modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts
            .language_modifiers
            .extend(modifiers.into_iter().map(Into::into));
        self
    }

    /// Sets the specification name. Required.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the parameter text.
    #[must_use]
    pub fn parameters(mut self, text: impl Into<String>) -> Self {
        self.parts.language_parameters = text.into();
        self
    }

    /// Sets the raw declaration block.
    #[must_use]
    pub fn declarations(mut self, text: impl Into<String>) -> Self {
        self.parts.language_declarations = text.into();
        self
    }

    /// Sets the initializer code.
    #[must_use]
    pub fn init(mut self, text: impl Into<String>) -> Self {
        self.parts.init = text.into();
        self
    }

    /// Appends an event.
    #[must_use]
    pub fn event(mut self, event: Event) -> Self {
        self.parts.events.push(event);
        self
    }

    /// Appends several events.
    #[must_use]
    pub fn events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.parts.events.extend(events);
        self
    }

    /// Appends a property.
    #[must_use]
    pub fn property(mut self, property: Property) -> Self {
        self.parts.properties.push(property);
        self
    }

    /// Appends several properties.
    #[must_use]
    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.parts.properties.extend(properties);
        self
    }

    /// Overrides the declaration syntax (C-like by default).
    #[must_use]
    pub fn syntax(mut self, syntax: DeclarationSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Builds the specification.
    ///
    /// # Errors
    ///
    /// Returns `MissingField("name")` if no name was set, or any error from
    /// splitting the declaration block.
    pub fn build(self) -> Result<Specification> {
        let Self {
            mut parts,
            name,
            syntax,
        } = self;
        parts.name = name.ok_or_else(|| Error::missing_field("name"))?;
        Specification::with_syntax(parts, &syntax)
    }
}
