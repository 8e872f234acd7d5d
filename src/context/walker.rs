//! Depth-first traversal over decoded context trees

use crate::context::node::ContextNode;
use crate::types::ContextKind;
use std::collections::BTreeMap;

/// One visited node.
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    /// Root is depth 0.
    pub depth: usize,
    /// Identifiers from the root down to and including this node.
    pub identifier_path: Vec<&'a str>,
    pub node: &'a ContextNode,
}

impl Visit<'_> {
    /// Identifier path joined with `/`, e.g. `course/chapter-1/quiz`.
    pub fn path_string(&self) -> String {
        self.identifier_path.join("/")
    }
}

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Maximum depth to descend to (None = unlimited)
    pub max_depth: Option<usize>,
    /// Visit siblings by `displayOrder` instead of document order
    pub sort_by_display_order: bool,
}

/// Pre-order walker over one or more context trees.
pub struct Walker<'a> {
    roots: Vec<&'a ContextNode>,
    config: WalkerConfig,
}

impl<'a> Walker<'a> {
    pub fn new(root: &'a ContextNode) -> Self {
        Self {
            roots: vec![root],
            config: WalkerConfig::default(),
        }
    }

    /// Walk a catalog of top-level contexts in order.
    pub fn over(roots: &'a [ContextNode]) -> Self {
        Self {
            roots: roots.iter().collect(),
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WalkerConfig) -> Self {
        self.config = config;
        self
    }

    /// Collect every visit in pre-order.
    pub fn walk(&self) -> Vec<Visit<'a>> {
        let mut visits = Vec::new();
        let mut roots = self.roots.clone();
        if self.config.sort_by_display_order {
            roots.sort_by_key(|root| root.display_order());
        }
        for root in roots {
            self.visit(root, 0, Vec::new(), &mut visits);
        }
        visits
    }

    fn visit(
        &self,
        node: &'a ContextNode,
        depth: usize,
        mut identifier_path: Vec<&'a str>,
        visits: &mut Vec<Visit<'a>>,
    ) {
        identifier_path.push(node.identifier());
        visits.push(Visit {
            depth,
            identifier_path: identifier_path.clone(),
            node,
        });

        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        let children: Vec<&'a ContextNode> = if self.config.sort_by_display_order {
            node.sorted_children()
        } else {
            node.children().iter().collect()
        };
        for child in children {
            self.visit(child, depth + 1, identifier_path.clone(), visits);
        }
    }
}

/// Aggregate shape information for a context tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub max_depth: usize,
    pub kinds: BTreeMap<ContextKind, usize>,
    pub unknown_types: usize,
    pub unknown_topics: usize,
}

impl TreeStats {
    pub fn collect(roots: &[ContextNode]) -> Self {
        let mut stats = TreeStats::default();
        for visit in Walker::over(roots).walk() {
            stats.nodes += 1;
            if visit.node.is_leaf() {
                stats.leaves += 1;
            }
            stats.max_depth = stats.max_depth.max(visit.depth);
            *stats.kinds.entry(visit.node.kind()).or_insert(0) += 1;
            if visit.node.has_unknown_type() {
                stats.unknown_types += 1;
            }
            if visit.node.has_unknown_topic() {
                stats.unknown_topics += 1;
            }
        }
        stats
    }
}
