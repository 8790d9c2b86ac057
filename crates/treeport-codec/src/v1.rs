//! Format V1: strict structured encoding
//!
//! A single JSON object: `{"type": "<marker>", "data": <node>}` where a node
//! is `{"name", "type": "file"|"folder", "content"?|"children"?}`. Round-trip
//! is exact: structure, child order, and content all survive.

use serde::Serialize;
use serde_json::Value;
use treeport_core::Node;

use crate::{Error, Result};

/// Marker identifying a V1 artifact.
pub const V1_MARKER: &str = "treeport-v1";

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "type")]
    marker: &'a str,
    data: &'a Node,
}

/// Encode a tree as a V1 artifact.
pub fn serialize(root: &Node) -> Result<String> {
    let envelope = Envelope {
        marker: V1_MARKER,
        data: root,
    };
    serde_json::to_string_pretty(&envelope).map_err(|e| Error::syntax(e.to_string()))
}

/// Decode a V1 artifact.
///
/// Fails when the text is not valid JSON, the top level is not an object,
/// the marker does not match exactly, or the `data` field is absent.
pub fn parse(text: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::syntax(e.to_string()))?;
    let object = value.as_object().ok_or(Error::NotAnObject)?;

    let marker = object.get("type").and_then(Value::as_str);
    if marker != Some(V1_MARKER) {
        return Err(Error::MarkerMismatch {
            expected: V1_MARKER,
        });
    }

    let data = object.get("data").ok_or(Error::MissingData)?;
    serde_json::from_value(data.clone()).map_err(|e| Error::syntax(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Node {
        Node::Folder {
            name: "proj".to_string(),
            children: vec![
                Node::file("a.txt", "alpha\n"),
                Node::Folder {
                    name: "sub".to_string(),
                    children: vec![Node::file("b.txt", "beta\n")],
                },
            ],
        }
    }

    #[test]
    fn test_serialize_embeds_marker_and_data() {
        let text = serialize(&sample()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], V1_MARKER);
        assert_eq!(value["data"]["name"], "proj");
        assert_eq!(value["data"]["type"], "folder");
        assert_eq!(value["data"]["children"][0]["type"], "file");
        assert_eq!(value["data"]["children"][0]["content"], "alpha\n");
    }

    #[test]
    fn test_round_trip_preserves_structure_and_order() {
        let tree = sample();
        let parsed = parse(&serialize(&tree).unwrap()).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(parse("{not json"), Err(Error::Syntax { .. })));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(parse("[1, 2]"), Err(Error::NotAnObject)));
    }

    #[test]
    fn test_parse_rejects_wrong_marker() {
        let text = r#"{"type": "something-else", "data": {"name": "x", "type": "folder", "children": []}}"#;
        assert!(matches!(parse(text), Err(Error::MarkerMismatch { .. })));
    }

    #[test]
    fn test_parse_rejects_missing_data() {
        let text = format!(r#"{{"type": "{V1_MARKER}"}}"#);
        assert!(matches!(parse(&text), Err(Error::MissingData)));
    }

    #[test]
    fn test_parse_rejects_malformed_node() {
        let text = format!(r#"{{"type": "{V1_MARKER}", "data": {{"name": "x", "type": "pipe"}}}}"#);
        assert!(matches!(parse(&text), Err(Error::Syntax { .. })));
    }

    #[test]
    fn test_single_file_root_round_trips() {
        let tree = Node::file("only.txt", "content without newline");
        let parsed = parse(&serialize(&tree).unwrap()).unwrap();
        assert_eq!(parsed, tree);
    }
}
