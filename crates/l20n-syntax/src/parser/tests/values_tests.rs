use indoc::indoc;

use super::{dump, parse_err};
use crate::ast::{Entry, Expression, Value};
use crate::diagnostics::ErrorKind;
use crate::parser::parse;

fn entity_value(source: &str) -> Value {
    let resource = parse(source).unwrap();
    match resource.entries().next() {
        Some(Entry::Entity(entity)) => entity.value.clone(),
        other => panic!("expected an entity, got {other:?}"),
    }
}

#[test]
fn string_value() {
    insta::assert_snapshot!(dump(r#"<brand "Firefox">"#), @r#"
    Resource
      Entity brand
        String "Firefox"
    "#);
}

#[test]
fn single_quoted_value() {
    insta::assert_snapshot!(dump(r#"<brand 'Fire "fox"'>"#), @r#"
    Resource
      Entity brand
        String 'Fire "fox"'
    "#);
}

#[test]
fn escaped_quote_kept_verbatim() {
    let value = entity_value(r#"<x "a\"b">"#);
    assert_eq!(value.as_string(), Some(r#"a\"b"#));
}

#[test]
fn array_of_integers() {
    let Value::Array(array) = entity_value("<x [1, 2, 3]>") else {
        panic!("expected array");
    };
    let items: Vec<_> = array.items.iter().filter_map(Expression::as_integer).collect();
    assert_eq!(items, [1, 2, 3]);
}

#[test]
fn empty_array() {
    let Value::Array(array) = entity_value("<x []>") else {
        panic!("expected array");
    };
    assert!(array.items.is_empty());
}

#[test]
fn array_trailing_comma_and_no_commas() {
    insta::assert_snapshot!(dump(r#"<x ["a", "b",]> <y ["a" "b"]>"#), @r#"
    Resource
      Entity x
        Array
          String "a"
          String "b"
      Entity y
        Array
          String "a"
          String "b"
    "#);
}

#[test]
fn object_last_key_wins() {
    let Value::Object(object) = entity_value("<x {a: 1, a: 2}>") else {
        panic!("expected object");
    };
    assert_eq!(object.members.len(), 1);
    assert_eq!(object.members["a"].as_integer(), Some(2));
}

#[test]
fn object_keeps_first_position_of_duplicate() {
    insta::assert_snapshot!(dump(r#"<x {a: "1", b: "2", a: "3"}>"#), @r#"
    Resource
      Entity x
        Object
          Key a
            String "3"
          Key b
            String "2"
    "#);
}

#[test]
fn object_default_member() {
    insta::assert_snapshot!(dump("<id {a: 'v', *b: 'c'}>"), @r"
    Resource
      Entity id
        Object
          Key a
            String 'v'
          Key *b
            String 'c'
    ");

    let Value::Object(object) = entity_value("<id {a: 'v', *b: 'c'}>") else {
        panic!("expected object");
    };
    assert_eq!(object.default.as_deref(), Some("b"));
    let (key, member) = object.default_member().unwrap();
    assert_eq!(key, "b");
    assert!(matches!(member, Expression::Value(Value::String(s)) if s.content == "c"));
}

#[test]
fn object_without_default() {
    let Value::Object(object) = entity_value("<x {a: 1}>") else {
        panic!("expected object");
    };
    assert!(object.default.is_none());
    assert!(object.default_member().is_none());
}

#[test]
fn object_rejects_second_default() {
    let err = parse_err(r#"<id {*a: "v", *b: "c"}>"#);
    assert_eq!(err.kind, ErrorKind::DuplicateDefault);
    assert_eq!(u32::from(err.range.start()), 14);
    let related = err.related.unwrap();
    assert_eq!(related.message, "first default here");
    assert_eq!(u32::from(related.range.start()), 5);
}

#[test]
fn empty_object() {
    let Value::Object(object) = entity_value("<x {}>") else {
        panic!("expected object");
    };
    assert!(object.members.is_empty());
}

#[test]
fn nested_composites() {
    let input = indoc! {r#"
    <brand {
      nominative: "Firefox",
      forms: ["Firefoksa", "Firefoksie"],
      'genitive': {short: "Fx"}
    }>
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Entity brand
        Object
          Key nominative
            String "Firefox"
          Key forms
            Array
              String "Firefoksa"
              String "Firefoksie"
          Key genitive
            Object
              Key short
                String "Fx"
    "#);
}

#[test]
fn value_must_start_with_quote_or_bracket() {
    let err = parse_err("<x 42>");
    assert_eq!(err.kind, ErrorKind::UnexpectedValueStart);
    assert_eq!(err.message, "expected a value: found `4`");
}

#[test]
fn unterminated_array_points_at_opener() {
    let err = parse_err(r#"<x ["a", "b""#);
    assert_eq!(err.kind, ErrorKind::UnterminatedComposite);
    let related = err.related.unwrap();
    assert_eq!(related.message, "array started here");
    assert_eq!(u32::from(related.range.start()), 3);
}

#[test]
fn unterminated_object_inside_member() {
    let err = parse_err("<x {a");
    assert_eq!(err.kind, ErrorKind::UnterminatedComposite);
    assert_eq!(err.related.unwrap().message, "object started here");
}

#[test]
fn object_key_without_colon() {
    let err = parse_err(r#"<x {a "b"}>"#);
    assert_eq!(err.kind, ErrorKind::ExpectedKeyValueSeparator);
    assert_eq!(u32::from(err.range.start()), 6);
}
