//! `<defs>` container for referenced resources.

use crate::element::{Element, Graphic};
use crate::node::Node;

/// Holds gradients and other resources that are referenced, not rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Define {
    node: Node,
}

impl Define {
    pub fn new() -> Self {
        Self {
            node: Node::create(Self::TAG),
        }
    }

    pub fn from_elements<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Self {
        let defs = Self::new();
        for node in nodes {
            defs.node.append_child(node);
        }
        defs
    }
}

impl Default for Define {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Define {
    const TAG: &'static str = "defs";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for Define {}
