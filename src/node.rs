//! Inner representation of a fitted decision tree.
//!
//! A node is either a branch routing instances by `attribute <= threshold`
//! or a leaf holding the predicted class label. The variant itself is the
//! only leaf/branch discriminant; there is no flag to fall out of sync.
use serde::{Deserialize, Serialize};

/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node with two children.
    Branch(BranchNode),
    /// A terminal node.
    Leaf(LeafNode),
}

/// An internal node. Instances with `row[attribute] <= threshold` descend
/// left, all others descend right, so every comparison resolves to exactly
/// one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchNode {
    pub attribute: usize,
    pub threshold: i64,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// A terminal node holding the predicted class label, 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafNode {
    pub label: i64,
}

impl Node {
    pub fn leaf(label: i64) -> Self {
        Node::Leaf(LeafNode { label })
    }

    pub fn branch(attribute: usize, threshold: i64, left: Node, right: Node) -> Self {
        Node::Branch(BranchNode {
            attribute,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Longest path from this node down to a leaf, in edges.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
        }
    }

    /// Number of leaves in the subtree rooted at this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(b) => b.left.n_leaves() + b.right.n_leaves(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_and_leaves() {
        let node = Node::branch(0, 5, Node::leaf(0), Node::branch(1, 3, Node::leaf(1), Node::leaf(0)));
        assert!(!node.is_leaf());
        assert_eq!(node.depth(), 2);
        assert_eq!(node.n_leaves(), 3);
        assert_eq!(Node::leaf(1).depth(), 0);
        assert_eq!(Node::leaf(1).n_leaves(), 1);
    }
}
