//! The external tree seam: node data and the capabilities the traversal
//! driver needs from an already-built mutation-annotated tree.

use crate::mutation::NucMutation;

/// Opaque node handle owned by the [`Tree`] implementation.
pub type NodeId = usize;

/// A tree node as seen by the traversal driver.
#[derive(Debug, Clone)]
pub struct Node {
    pub identifier: String,
    /// `None` only at the root.
    pub parent: Option<NodeId>,
    /// Nucleotide mutations on the branch leading into this node.
    pub mutations: Vec<NucMutation>,
}

/// Capabilities the traversal driver consumes.
///
/// Tree construction, parent/child bookkeeping and LCA computation live in
/// the front end; the driver never owns or restructures topology.
pub trait Tree {
    /// Nodes in depth-first order, root first.
    fn depth_first_expansion(&self) -> Vec<NodeId>;

    fn node(&self, id: NodeId) -> &Node;

    /// Lowest common ancestor of two nodes.
    fn lca(&self, a: NodeId, b: NodeId) -> NodeId;
}
