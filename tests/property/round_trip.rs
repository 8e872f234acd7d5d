//! Property-based tests for encode/decode fidelity and total lookups

use contextkit::context::{decode_str, decode_value, encode_string, to_value};
use contextkit::{ContextKind, ContextNode, ContextTopic};
use proptest::prelude::*;

fn leaf_strategy() -> impl Strategy<Value = ContextNode> {
    (
        "[a-z0-9-]{1,12}",
        ".{0,24}",
        any::<i64>(),
        0i64..ContextKind::ALL.len() as i64,
        proptest::option::of(proptest::sample::select(ContextTopic::ALL.to_vec())),
        proptest::option::of("[a-z]{1,10}"),
    )
        .prop_map(|(identifier, title, order, raw_type, topic, link_path)| {
            let mut node = ContextNode::new(identifier, title, order, raw_type);
            if let Some(topic) = topic {
                node = node.with_topic(topic.as_str());
            }
            if let Some(path) = link_path {
                node = node.with_universal_link(format!("https://Example.com/{}", path));
            }
            node
        })
}

fn tree_strategy() -> impl Strategy<Value = ContextNode> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        (leaf_strategy(), proptest::collection::vec(inner, 0..4))
            .prop_map(|(node, children)| node.with_children(children))
    })
}

proptest! {
    /// Encoding then decoding yields an equal tree
    #[test]
    fn prop_round_trip(tree in tree_strategy()) {
        let encoded = encode_string(&tree).unwrap();
        let decoded = decode_str(&encoded).unwrap();
        prop_assert_eq!(&decoded, &tree);

        let via_value = decode_value(&to_value(&tree).unwrap()).unwrap();
        prop_assert_eq!(via_value, tree);
    }

    /// Any integer typeInt decodes; only the recognized range resolves to a non-none kind
    #[test]
    fn prop_any_type_code_decodes(raw_type in any::<i64>()) {
        let doc = format!(
            r#"{{"identifier":"a","title":"A","displayOrder":0,"typeInt":{}}}"#,
            raw_type
        );
        let node = decode_str(&doc).unwrap();
        prop_assert_eq!(node.raw_type(), raw_type);
        if (0..ContextKind::ALL.len() as i64).contains(&raw_type) {
            prop_assert_eq!(node.kind().raw(), raw_type);
        } else {
            prop_assert_eq!(node.kind(), ContextKind::None);
        }
    }

    /// Any topic string decodes; unknown strings resolve to no topic
    #[test]
    fn prop_any_topic_string_decodes(topic in ".{0,32}") {
        let doc = serde_json::json!({
            "identifier": "a",
            "title": "A",
            "displayOrder": 0,
            "typeInt": 0,
            "topicString": topic.as_str(),
        });
        let node = decode_value(&doc).unwrap();
        prop_assert_eq!(node.raw_topic(), Some(topic.as_str()));
        let known = ContextTopic::ALL.iter().any(|t| t.as_str() == topic);
        prop_assert_eq!(node.topic().is_some(), known);
    }
}
