//! Integration tests for structural decode failures and their reported locations

use contextkit::context::to_value;
use contextkit::{decode_str, decode_value, DecodeError};
use serde_json::{json, Value};

fn leaf(identifier: &str) -> Value {
    json!({"identifier": identifier, "title": identifier, "displayOrder": 0, "typeInt": 0})
}

fn decode_err(doc: Value) -> DecodeError {
    decode_str(&doc.to_string()).unwrap_err()
}

#[test]
fn test_missing_identifier_at_root() {
    let err = decode_str(r#"{"title":"A","displayOrder":0,"typeInt":0}"#).unwrap_err();
    assert!(matches!(err, DecodeError::MissingField { field: "identifier", .. }));
    assert_eq!(err.field(), Some("identifier"));
}

/// Every required field is enforced at every depth
#[test]
fn test_required_fields_at_depth() {
    for field in ["identifier", "title", "displayOrder", "typeInt"] {
        let mut grandchild = leaf("gc");
        grandchild.as_object_mut().unwrap().remove(field);
        let mut child = leaf("c");
        child["children"] = json!([leaf("sibling"), grandchild]);
        let mut root = leaf("root");
        root["children"] = json!([child]);

        let err = decode_err(root);
        assert_eq!(err.field(), Some(field), "field {}", field);
        assert_eq!(err.path(), Some("$.children[0].children[1]"), "field {}", field);
    }
}

#[test]
fn test_wrong_types_report_field_path() {
    let cases = [
        ("identifier", json!(12), "string"),
        ("title", json!(["A"]), "string"),
        ("displayOrder", json!("1"), "integer"),
        ("typeInt", json!(true), "integer"),
        ("topicString", json!(3), "string"),
        ("universalLink", json!({}), "string"),
        ("children", json!("none"), "array"),
    ];

    for (field, bad_value, expected_type) in cases {
        let mut child = leaf("c");
        child[field] = bad_value;
        let mut root = leaf("root");
        root["children"] = json!([child]);

        match decode_err(root) {
            DecodeError::InvalidType { path, expected, .. } => {
                assert_eq!(path, format!("$.children[0].{}", field));
                assert_eq!(expected, expected_type);
            }
            other => panic!("{}: unexpected error {:?}", field, other),
        }
    }
}

#[test]
fn test_root_must_be_object() {
    let err = decode_str("[1, 2]").unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject { found: "array", .. }));
    assert_eq!(err.path(), Some("$"));
}

#[test]
fn test_integer_out_of_range_is_type_error() {
    let err = decode_str(
        r#"{"identifier":"a","title":"A","displayOrder":18446744073709551615,"typeInt":0}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidType { found: "integer out of range", .. }
    ));
    assert_eq!(err.field(), Some("displayOrder"));
}

#[test]
fn test_relative_universal_link_is_kept() {
    let mut doc = leaf("a");
    doc["universalLink"] = json!("/lessons/a");
    let node = decode_value(&doc).unwrap();
    assert_eq!(node.universal_link(), Some("/lessons/a"));
    assert_eq!(to_value(&node).unwrap(), doc);
}

#[test]
fn test_malformed_universal_link_fails_at_depth() {
    let mut child = leaf("b");
    child["universalLink"] = json!("https://exa mple.com/");
    let mut doc = leaf("a");
    doc["children"] = json!([child]);
    let err = decode_err(doc);
    assert!(matches!(err, DecodeError::InvalidUrl { .. }));
    assert_eq!(err.path(), Some("$.children[0].universalLink"));
}

#[test]
fn test_truncated_document_is_syntax_error() {
    let err = decode_str(r#"{"identifier":"a","title":"#).unwrap_err();
    assert!(matches!(err, DecodeError::Syntax { .. }));
    assert!(err.path().is_none());
}

/// Pathological nesting is refused by the parser instead of exhausting the stack
#[test]
fn test_excessive_depth_fails_cleanly() {
    let mut doc = String::new();
    for i in 0..200 {
        doc.push_str(&format!(
            r#"{{"identifier":"n{}","title":"N","displayOrder":0,"typeInt":0,"children":["#,
            i
        ));
    }
    for _ in 0..200 {
        doc.push_str("]}");
    }
    let err = decode_str(&doc).unwrap_err();
    assert!(matches!(err, DecodeError::Syntax { .. }));
}
