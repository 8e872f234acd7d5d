//! Context node model
//!
//! A `ContextNode` is one entry of the content hierarchy (an app, chapter,
//! quiz, ...). Raw discriminants are kept exactly as they appear on the wire;
//! the semantic `kind` and `topic` are derived on access.

use crate::context::decode;
use crate::types::{ContextKind, ContextTopic};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Wire keys. Producers of context documents depend on these names.
pub(crate) mod keys {
    pub const IDENTIFIER: &str = "identifier";
    pub const TITLE: &str = "title";
    pub const DISPLAY_ORDER: &str = "displayOrder";
    pub const TYPE: &str = "typeInt";
    pub const TOPIC: &str = "topicString";
    pub const CHILDREN: &str = "children";
    pub const UNIVERSAL_LINK: &str = "universalLink";
}

/// A decoded context and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextNode {
    /// App-assigned identifier, unique among siblings and stable across
    /// users and devices. May carry deep-link routing information.
    identifier: String,

    title: String,

    /// Sort key among siblings, ascending.
    #[serde(rename = "displayOrder")]
    display_order: i64,

    #[serde(rename = "typeInt")]
    raw_type: i64,

    #[serde(rename = "topicString", skip_serializing_if = "Option::is_none")]
    raw_topic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<ContextNode>>,

    /// Kept as written by the producer; may be absolute or a relative reference.
    #[serde(rename = "universalLink", skip_serializing_if = "Option::is_none")]
    universal_link: Option<String>,
}

/// Base used to check relative universal links. Never surfaces in output.
const LINK_CHECK_BASE: &str = "https://contextkit.invalid/";

/// Check that a raw universal link is an absolute URL or a relative reference.
pub(crate) fn check_universal_link(raw: &str) -> Result<(), String> {
    match Url::parse(raw) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            if raw.is_empty() {
                return Err("empty link".to_string());
            }
            if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
                return Err("relative link contains whitespace".to_string());
            }
            let base = Url::parse(LINK_CHECK_BASE).map_err(|err| err.to_string())?;
            base.join(raw).map(|_| ()).map_err(|err| err.to_string())
        }
        Err(err) => Err(err.to_string()),
    }
}

impl ContextNode {
    /// Create a leaf context with no topic and no universal link.
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        display_order: i64,
        raw_type: i64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            display_order,
            raw_type,
            raw_topic: None,
            children: None,
            universal_link: None,
        }
    }

    pub fn with_topic(mut self, raw_topic: impl Into<String>) -> Self {
        self.raw_topic = Some(raw_topic.into());
        self
    }

    /// Attach a child list. An empty vector is kept distinct from no children.
    pub fn with_children(mut self, children: Vec<ContextNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_universal_link(mut self, link: impl Into<String>) -> Self {
        self.universal_link = Some(link.into());
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn display_order(&self) -> i64 {
        self.display_order
    }

    pub fn raw_type(&self) -> i64 {
        self.raw_type
    }

    pub fn raw_topic(&self) -> Option<&str> {
        self.raw_topic.as_deref()
    }

    /// Universal link exactly as it appeared in the document.
    pub fn universal_link(&self) -> Option<&str> {
        self.universal_link.as_deref()
    }

    /// Universal link as a parsed URL. `None` for relative references.
    pub fn universal_link_url(&self) -> Option<Url> {
        self.universal_link.as_deref().and_then(|raw| Url::parse(raw).ok())
    }

    /// Universal link resolved against `base`; absolute links ignore the base.
    pub fn resolve_universal_link(&self, base: &Url) -> Option<Url> {
        self.universal_link
            .as_deref()
            .and_then(|raw| base.join(raw).ok())
    }

    /// Kind of this context. Unknown `typeInt` values resolve to `ContextKind::None`.
    pub fn kind(&self) -> ContextKind {
        ContextKind::from_raw(self.raw_type)
    }

    /// Topic of this context, `None` when absent or unrecognized.
    pub fn topic(&self) -> Option<ContextTopic> {
        ContextTopic::from_raw(self.raw_topic.as_deref())
    }

    /// True when `typeInt` is not a recognized discriminant.
    pub fn has_unknown_type(&self) -> bool {
        ContextKind::try_from_raw(self.raw_type).is_none()
    }

    /// True when a topic string is present but does not resolve.
    pub fn has_unknown_topic(&self) -> bool {
        self.raw_topic.is_some() && self.topic().is_none()
    }

    /// Children in document order. Empty for leaves.
    pub fn children(&self) -> &[ContextNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the source carried a `children` array at all.
    pub fn has_children_field(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Children ordered by `displayOrder`; ties keep document order.
    pub fn sorted_children(&self) -> Vec<&ContextNode> {
        let mut sorted: Vec<&ContextNode> = self.children().iter().collect();
        sorted.sort_by_key(|child| child.display_order);
        sorted
    }

    /// First direct child with the given identifier.
    pub fn child(&self, identifier: &str) -> Option<&ContextNode> {
        self.children()
            .iter()
            .find(|child| child.identifier == identifier)
    }

    /// Follow a sequence of identifiers downwards from this node.
    pub fn descendant<'a, I>(&self, identifiers: I) -> Option<&ContextNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        identifiers
            .into_iter()
            .try_fold(self, |node, identifier| node.child(identifier))
    }

    /// Copy of this tree with every sibling list ordered by `displayOrder`.
    pub fn sorted(&self) -> ContextNode {
        let mut copy = self.clone();
        copy.sort_recursive();
        copy
    }

    fn sort_recursive(&mut self) {
        if let Some(children) = self.children.as_mut() {
            children.sort_by_key(|child| child.display_order);
            for child in children.iter_mut() {
                child.sort_recursive();
            }
        }
    }
}

impl<'de> Deserialize<'de> for ContextNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        decode::decode_value(&value).map_err(serde::de::Error::custom)
    }
}
