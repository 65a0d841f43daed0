//! Depth-first traversal of a syntax tree

use crate::node::Node;

/// Visits every node of a tree, parent before children, children in order.
///
/// Overriding [Visitor::visit_node] replaces the default traversal; call [walk_node] from the
/// override to keep descending.
pub trait Visitor {
    type Err;

    fn visit_node(&mut self, node: &Node) -> Result<(), Self::Err> {
        walk_node(self, node)
    }
}

/// Visits the children of a node in order
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) -> Result<(), V::Err> {
    for child in node.children() {
        visitor.visit_node(child)?;
    }
    Ok(())
}
