//! Context document decoding and encoding
//!
//! Decoding is all-or-nothing: the first structural problem anywhere in the
//! tree aborts the whole document and is reported with its JSON path.
//! Unknown `typeInt` and `topicString` values are not errors; they decode
//! verbatim and resolve to the fallback variants on access.

use crate::context::node::{check_universal_link, keys, ContextNode};
use crate::context::path::JsonPath;
use crate::error::DecodeError;
use serde_json::{Map, Value};
use std::io::Read;
use tracing::debug;

/// Decode a single context document from a string.
pub fn decode_str(input: &str) -> Result<ContextNode, DecodeError> {
    let value: Value = serde_json::from_str(input)?;
    decode_value(&value)
}

/// Decode a single context document from raw bytes.
pub fn decode_slice(input: &[u8]) -> Result<ContextNode, DecodeError> {
    let value: Value = serde_json::from_slice(input)?;
    decode_value(&value)
}

/// Decode a single context document from a reader. The reader is consumed
/// to the end; I/O failures surface as `DecodeError::Io`.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<ContextNode, DecodeError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    decode_slice(&buffer)
}

/// Decode an already-parsed JSON value.
pub fn decode_value(value: &Value) -> Result<ContextNode, DecodeError> {
    let node = decode_node(value, &JsonPath::root())?;
    debug!(
        identifier = %node.identifier(),
        children = node.children().len(),
        "Decoded context document"
    );
    Ok(node)
}

/// Decode a document whose root is either one context or an array of contexts.
pub fn decode_many_str(input: &str) -> Result<Vec<ContextNode>, DecodeError> {
    let value: Value = serde_json::from_str(input)?;
    decode_many_value(&value)
}

/// Same as [`decode_many_str`] for an already-parsed value.
pub fn decode_many_value(value: &Value) -> Result<Vec<ContextNode>, DecodeError> {
    let root = JsonPath::root();
    let nodes = match value {
        Value::Array(items) => decode_list(items, &root)?,
        _ => vec![decode_node(value, &root)?],
    };
    debug!(roots = nodes.len(), "Decoded context catalog");
    Ok(nodes)
}

/// Serialize a context tree to compact JSON.
pub fn encode_string(node: &ContextNode) -> Result<String, serde_json::Error> {
    serde_json::to_string(node)
}

/// Serialize a context tree to indented JSON.
pub fn encode_pretty(node: &ContextNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(node)
}

pub fn to_value(node: &ContextNode) -> Result<Value, serde_json::Error> {
    serde_json::to_value(node)
}

fn decode_list(items: &[Value], path: &JsonPath) -> Result<Vec<ContextNode>, DecodeError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_node(item, &path.index(index)))
        .collect()
}

fn decode_node(value: &Value, path: &JsonPath) -> Result<ContextNode, DecodeError> {
    let object = value.as_object().ok_or_else(|| DecodeError::NotAnObject {
        path: path.to_string(),
        found: json_type_name(value),
    })?;

    let identifier = required_string(object, keys::IDENTIFIER, path)?;
    let title = required_string(object, keys::TITLE, path)?;
    let display_order = required_integer(object, keys::DISPLAY_ORDER, path)?;
    let raw_type = required_integer(object, keys::TYPE, path)?;
    let raw_topic = optional_string(object, keys::TOPIC, path)?;
    let universal_link = optional_link(object, keys::UNIVERSAL_LINK, path)?;

    let children = match present(object, keys::CHILDREN) {
        None => None,
        Some(Value::Array(items)) => Some(decode_list(items, &path.key(keys::CHILDREN))?),
        Some(other) => {
            return Err(invalid_type(&path.key(keys::CHILDREN), "array", other));
        }
    };

    let mut node = ContextNode::new(identifier, title, display_order, raw_type);
    if let Some(raw_topic) = raw_topic {
        node = node.with_topic(raw_topic);
    }
    if let Some(children) = children {
        node = node.with_children(children);
    }
    if let Some(link) = universal_link {
        node = node.with_universal_link(link);
    }

    if node.has_unknown_type() {
        debug!(path = %path, raw_type, "Unrecognized context type, resolving to none");
    }
    if node.has_unknown_topic() {
        debug!(path = %path, raw_topic = ?node.raw_topic(), "Unrecognized context topic");
    }

    Ok(node)
}

/// Field value, treating JSON `null` the same as an absent key.
fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn required<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
    path: &JsonPath,
) -> Result<&'a Value, DecodeError> {
    object.get(key).ok_or_else(|| DecodeError::MissingField {
        path: path.to_string(),
        field: key,
    })
}

fn required_string(
    object: &Map<String, Value>,
    key: &'static str,
    path: &JsonPath,
) -> Result<String, DecodeError> {
    let value = required(object, key, path)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| invalid_type(&path.key(key), "string", value))
}

fn required_integer(
    object: &Map<String, Value>,
    key: &'static str,
    path: &JsonPath,
) -> Result<i64, DecodeError> {
    let value = required(object, key, path)?;
    value
        .as_i64()
        .ok_or_else(|| invalid_type(&path.key(key), "integer", value))
}

fn optional_string(
    object: &Map<String, Value>,
    key: &'static str,
    path: &JsonPath,
) -> Result<Option<String>, DecodeError> {
    match present(object, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid_type(&path.key(key), "string", other)),
    }
}

/// Optional link string, checked but stored verbatim.
fn optional_link(
    object: &Map<String, Value>,
    key: &'static str,
    path: &JsonPath,
) -> Result<Option<String>, DecodeError> {
    let Some(raw) = optional_string(object, key, path)? else {
        return Ok(None);
    };
    check_universal_link(&raw).map_err(|message| DecodeError::InvalidUrl {
        path: path.key(key).to_string(),
        message,
    })?;
    Ok(Some(raw))
}

fn invalid_type(path: &JsonPath, expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::InvalidType {
        path: path.to_string(),
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "integer out of range",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
