use super::{Formatter, ToGraphQL};
use crate::ast::{Argument, Query, Value};

#[test]
fn test_fmt_simple_selection() {
    let query = Query::new("users").fields(["id", "name"]);
    let output = Formatter::new().format(&[query]).unwrap();
    assert_eq!(output, "{\nusers {\nid\nname\n}\n}");
}

#[test]
fn test_fmt_arguments_comma_joined_no_trailing_comma() {
    let query = Query::new("users")
        .fields(["id"])
        .argument(Argument::new("limit", 5))
        .argument(Argument::new("offset", 10));
    let output = Formatter::new().format(&[query]).unwrap();
    assert_eq!(output, "{\nusers(limit: 5, offset: 10) {\nid\n}\n}");
}

#[test]
fn test_fmt_fields_precede_sub_queries() {
    // Append the child before the field; output order is still
    // fields-then-children.
    let query = Query::new("users")
        .sub_query(Query::new("posts").fields(["title"]))
        .fields(["id"]);
    let output = Formatter::new().format(&[query]).unwrap();
    assert_eq!(output, "{\nusers {\nid\nposts {\ntitle\n}\n}\n}");
}

#[test]
fn test_fmt_no_indentation_at_depth() {
    let grandchild = Query::new("comments").fields(["body"]);
    let child = Query::new("posts").fields(["title"]).sub_query(grandchild);
    let query = Query::new("users").fields(["id"]).sub_query(child);
    let output = Formatter::new().format(&[query]).unwrap();
    assert!(!output.contains("  "));
    assert!(output.lines().all(|l| !l.starts_with(' ')));
    assert_eq!(
        output,
        "{\nusers {\nid\nposts {\ntitle\ncomments {\nbody\n}\n}\n}\n}"
    );
}

#[test]
fn test_fmt_multiple_top_level_blocks() {
    let a = Query::new("a").fields(["x"]);
    let b = Query::new("b").fields(["y"]);
    let output = Formatter::new().format(&[a, b]).unwrap();
    assert_eq!(output, "{\na {\nx\n},\nb {\ny\n}\n}");
}

#[test]
fn test_value_rendering() {
    assert_eq!(Value::from(42i64).to_graphql(), "42");
    assert_eq!(Value::from(2.5).to_graphql(), "2.5");
    assert_eq!(Value::from(true).to_graphql(), "true");
    assert_eq!(Value::from(false).to_graphql(), "false");
    // Strings render exactly as given: no implicit quoting.
    assert_eq!(Value::from("alice").to_graphql(), "alice");
    assert_eq!(Value::from("\"alice\"").to_graphql(), "\"alice\"");
    assert_eq!(Value::ident("ASC").to_graphql(), "ASC");
}

#[test]
fn test_argument_rendering() {
    assert_eq!(Argument::new("limit", 10).to_graphql(), "limit: 10");
    assert_eq!(
        Argument::new("order", Value::ident("DESC")).to_graphql(),
        "order: DESC"
    );
    // Empty keys pass through untouched.
    assert_eq!(Argument::new("", 1).to_graphql(), ": 1");
}

#[test]
fn test_query_to_graphql_is_one_block_without_outer_braces() {
    let query = Query::new("users").fields(["id"]);
    assert_eq!(query.to_graphql(), "users {\nid\n}");
}
