//! Integration tests for the declaration splitter
//!
//! Tests comment removal, splitting, and failure behavior on realistic
//! declaration blocks.

use rosmop_foundation::ErrorKind;
use rosmop_spec::{DeclarationSplitter, DeclarationSyntax, Variable, strip_comments};

fn names(src: &str) -> Vec<String> {
    DeclarationSplitter::default()
        .split(src)
        .unwrap()
        .variables
        .iter()
        .map(|v| v.name().to_string())
        .collect()
}

// =============================================================================
// Counting and Ordering
// =============================================================================

#[test]
fn whitespace_only_block() {
    assert!(names(" \n \t\r\n ").is_empty());
}

#[test]
fn one_variable_per_terminated_declaration() {
    assert_eq!(names("int a; int b; int c; int d;"), vec!["a", "b", "c", "d"]);
}

#[test]
fn reordering_input_reorders_output() {
    assert_eq!(names("int b; int a;"), vec!["b", "a"]);
    assert_eq!(names("int a; int b;"), vec!["a", "b"]);
}

#[test]
fn stray_terminators() {
    assert_eq!(names("int x;"), vec!["x"]);
    assert_eq!(names("int x;;"), vec!["x"]);
    assert_eq!(names("int x; "), vec!["x"]);
    assert_eq!(names(";int x;;;"), vec!["x"]);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn block_comment_hides_terminators() {
    assert_eq!(names("/* a; b */ int x;"), vec!["x"]);
}

#[test]
fn line_comment_hides_terminators() {
    assert_eq!(names("int x; // keep; this\nint y;"), vec!["x", "y"]);
}

#[test]
fn trailing_line_comment() {
    assert_eq!(names("int x; // trailing note"), vec!["x"]);
}

#[test]
fn realistic_block() {
    let block = r"
        /*
         * Door monitor state; reset on every close.
         */
        int opened = 0;      // number of openings
        ros::Time last_open; /* stamp; of last open */
        bool locked = true;
    ";

    let parsed = DeclarationSplitter::default().split(block).unwrap();
    let vars: Vec<&Variable> = parsed.variables.iter().collect();

    assert_eq!(vars.len(), 3);
    assert_eq!(vars[0].to_string(), "int opened = 0");
    assert_eq!(vars[1].ty(), "ros::Time");
    assert_eq!(vars[2].initializer(), Some("true"));
    assert!(parsed.text.starts_with("/*"));
    assert!(parsed.text.ends_with("bool locked = true;"));
}

#[test]
fn comment_removal_is_idempotent() {
    let syntax = DeclarationSyntax::default();
    let clean = "int a;\nint b = 2;\n";
    assert_eq!(strip_comments(clean, &syntax).unwrap(), clean);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn malformed_middle_fragment_fails() {
    let err = DeclarationSplitter::default()
        .split("int a; = 1; int c;")
        .unwrap_err();
    assert!(err.is_malformed_declaration());
}

#[test]
fn unterminated_block_comment_fails() {
    let err = DeclarationSplitter::default()
        .split("int a; /* int b;")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnterminatedComment { .. }));
}
