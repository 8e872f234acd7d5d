//! Translation of decoded trees into a host framework's own context type.
//!
//! Each `ContextNode` maps to exactly one host context. Children are
//! translated first, in document order, and handed to the parent's `build`.

use crate::context::node::ContextNode;

/// Builds one host-side context from a decoded node and its already
/// translated children.
pub trait ContextBuilder {
    type Output;

    fn build(&mut self, node: &ContextNode, children: Vec<Self::Output>) -> Self::Output;
}

/// Translate a whole tree bottom-up.
pub fn translate<B: ContextBuilder>(node: &ContextNode, builder: &mut B) -> B::Output {
    let children = node
        .children()
        .iter()
        .map(|child| translate(child, builder))
        .collect();
    builder.build(node, children)
}
