//! Integration tests for Specification construction
//!
//! Tests the producer and consumer contracts of the specification record.

use rosmop_foundation::ErrorKind;
use rosmop_spec::{
    Event, PatternBinding, Property, PropertyHandler, Specification, SpecificationParts,
};

fn parts(declarations: &str) -> SpecificationParts {
    SpecificationParts {
        pre_declarations: "#include <std_msgs/String.h>".to_string(),
        language_modifiers: vec!["full-binding".to_string()],
        name: "Chatter".to_string(),
        language_parameters: String::new(),
        language_declarations: declarations.to_string(),
        init: "count = 0;".to_string(),
        events: vec![
            Event::new("publish")
                .with_topic("/chatter", "std_msgs/String")
                .with_pattern([PatternBinding::new("data", "msg")]),
            Event::new("receive").with_modifiers(["blocking"]),
        ],
        properties: vec![
            Property::new("ere", "publish receive*")
                .with_handlers([PropertyHandler::new("fail", "ROS_WARN(\"bad\");")]),
        ],
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn construct_from_parts() {
    let spec = Specification::new(parts("  int count; // msgs\n  std::string last;\n")).unwrap();

    assert_eq!(spec.name(), "Chatter");
    assert_eq!(spec.pre_declarations(), "#include <std_msgs/String.h>");
    assert!(spec.has_modifier("full-binding"));
    assert_eq!(spec.language_parameters(), "");
    assert_eq!(spec.init(), "count = 0;");
    assert_eq!(
        spec.language_declarations(),
        "int count; // msgs\n  std::string last;"
    );

    let vars: Vec<_> = spec.spec_declarations().iter().map(|v| v.name()).collect();
    assert_eq!(vars, vec!["count", "last"]);
}

#[test]
fn events_and_properties_pass_through() {
    let spec = Specification::new(parts("")).unwrap();

    let publish = spec.event("publish").unwrap();
    assert_eq!(publish.topic(), "/chatter");
    assert_eq!(publish.pattern()[0].value, "msg");
    assert!(spec.event("receive").unwrap().has_modifier("blocking"));

    let property = spec.properties().first().unwrap();
    assert_eq!(property.logic(), "ere");
    assert!(property.handler("fail").is_some());
}

#[test]
fn empty_declarations_yield_no_variables() {
    let spec = Specification::new(parts("   ")).unwrap();
    assert!(spec.spec_declarations().is_empty());
    assert_eq!(spec.language_declarations(), "");
}

// =============================================================================
// Atomic Failure
// =============================================================================

#[test]
fn malformed_declaration_fails_construction() {
    let result = Specification::new(parts("int a; not-a-decl; int c;"));
    let err = result.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::MalformedDeclaration { .. }));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.source.as_deref(), Some("Chatter"));
    assert_eq!(ctx.stack, vec!["declaration 1".to_string()]);
}

#[test]
fn builder_requires_name() {
    let err = Specification::builder()
        .declarations("int a;")
        .build()
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingField("name"));
}

// =============================================================================
// Immutability
// =============================================================================

#[test]
fn clones_share_and_stay_equal() {
    let spec = Specification::new(parts("int a; int b;")).unwrap();
    let copy = spec.clone();
    assert_eq!(copy, spec);
    assert_eq!(
        copy.spec_declarations().to_vec(),
        spec.spec_declarations().to_vec()
    );
}

#[test]
fn specification_is_shareable_across_threads() {
    let spec = Specification::new(parts("int a;")).unwrap();
    let handle = std::thread::spawn(move || spec.spec_declarations().len());
    assert_eq!(handle.join().unwrap(), 1);
}
