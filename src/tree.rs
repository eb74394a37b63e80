//! Recursive tree growing, prediction traversal, and text rendering.
use crate::data::Dataset;
use crate::node::{BranchNode, Node};
use crate::splitter::best_split;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A fitted decision tree: a single exclusively owned root node plus
/// summary statistics. Immutable after `fit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub root: Node,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Grow a tree over the rows in `index`, starting at depth 0.
    ///
    /// Growing is a pure function of its inputs: identical data and
    /// parameters produce a structurally identical tree.
    pub fn fit(data: &Dataset, index: Vec<usize>, max_per_leaf: usize, max_depth: usize) -> Self {
        let root = grow(data, index, 0, max_per_leaf, max_depth);
        let depth = root.depth();
        let n_leaves = root.n_leaves();
        Tree {
            root,
            depth,
            n_leaves,
        }
    }

    /// Predict the label of a single row by descending from the root.
    ///
    /// `row` must hold at least the training arity of attribute values; a
    /// trailing label column, if present, is ignored.
    pub fn predict_row(&self, row: &[i64]) -> i64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf.label,
                Node::Branch(branch) => {
                    node = if row[branch.attribute] <= branch.threshold {
                        &branch.left
                    } else {
                        &branch.right
                    };
                }
            }
        }
    }
}

/// Class counts over the rows in `index`.
fn label_counts(data: &Dataset, index: &[usize]) -> (usize, usize) {
    let mut zeros = 0;
    let mut ones = 0;
    for &i in index {
        if data.label(i) == 0 {
            zeros += 1;
        } else {
            ones += 1;
        }
    }
    (zeros, ones)
}

/// Majority label, ties resolving to 1.
fn majority_label(zeros: usize, ones: usize) -> i64 {
    if zeros > ones {
        0
    } else {
        1
    }
}

fn grow(data: &Dataset, index: Vec<usize>, depth: usize, max_per_leaf: usize, max_depth: usize) -> Node {
    let (zeros, ones) = label_counts(data, &index);

    // Stopping rules, checked in priority order: partition size, depth,
    // purity, then absence of an informative split.
    if index.len() <= max_per_leaf || depth >= max_depth {
        return Node::leaf(majority_label(zeros, ones));
    }
    if zeros == 0 {
        return Node::leaf(1);
    }
    if ones == 0 {
        return Node::leaf(0);
    }
    let Some(split) = best_split(data, &index) else {
        return Node::leaf(majority_label(zeros, ones));
    };

    // Positive gain guarantees both sides are non-empty.
    let (left_index, right_index): (Vec<usize>, Vec<usize>) = index
        .into_iter()
        .partition(|&i| data.value(i, split.attribute) <= split.threshold);

    let left = grow(data, left_index, depth + 1, max_per_leaf, max_depth);
    let right = grow(data, right_index, depth + 1, max_per_leaf, max_depth);
    Node::branch(split.attribute, split.threshold, left, right)
}

impl Display for Tree {
    /// Renders each decision as two labeled branches, `X_a <= t` and
    /// `X_a > t`, children indented with a `|\t` prefix and leaf labels
    /// printed inline.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            Node::Leaf(leaf) => writeln!(f, "{}", leaf.label),
            Node::Branch(branch) => write_branch(f, "", branch),
        }
    }
}

fn write_branch(f: &mut fmt::Formatter, prefix: &str, branch: &BranchNode) -> fmt::Result {
    for (op, child) in [("<=", &branch.left), (">", &branch.right)] {
        write!(f, "{prefix}X_{} {op} {}", branch.attribute, branch.threshold)?;
        match child.as_ref() {
            Node::Leaf(leaf) => writeln!(f, " : {}", leaf.label)?,
            Node::Branch(inner) => {
                writeln!(f)?;
                write_branch(f, &format!("{prefix}|\t"), inner)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: Vec<Vec<i64>>) -> Dataset {
        Dataset::from_rows(rows).unwrap()
    }

    fn fit(data: &Dataset, max_per_leaf: usize, max_depth: usize) -> Tree {
        Tree::fit(data, (0..data.len()).collect(), max_per_leaf, max_depth)
    }

    #[test]
    fn test_leaf_size_rule_precedes_split_search() {
        // Perfectly separable, but the partition already fits in one leaf.
        let data = dataset(vec![vec![1, 0], vec![2, 0], vec![9, 1], vec![10, 1]]);
        let tree = fit(&data, 4, 5);
        assert_eq!(tree.root, Node::leaf(1));
        assert_eq!(tree.n_leaves, 1);
    }

    #[test]
    fn test_depth_rule_stops_at_root() {
        let data = dataset(vec![vec![1, 0], vec![2, 0], vec![9, 1], vec![10, 1]]);
        let tree = fit(&data, 1, 0);
        assert!(tree.root.is_leaf());
        assert_eq!(tree.depth, 0);
    }

    #[test]
    fn test_pure_partition_yields_leaf() {
        let data = dataset(vec![vec![1, 1], vec![5, 1], vec![9, 1]]);
        let tree = fit(&data, 1, 10);
        assert_eq!(tree.root, Node::leaf(1));

        let data = dataset(vec![vec![1, 0], vec![5, 0], vec![9, 0]]);
        let tree = fit(&data, 1, 10);
        assert_eq!(tree.root, Node::leaf(0));
    }

    #[test]
    fn test_majority_tie_resolves_to_one() {
        let data = dataset(vec![vec![3, 0], vec![7, 1]]);
        let tree = fit(&data, 2, 5);
        assert_eq!(tree.root, Node::leaf(1));
    }

    #[test]
    fn test_non_separable_partition_becomes_majority_leaf() {
        // Equal attribute values, majority label 0.
        let data = dataset(vec![vec![4, 0], vec![4, 0], vec![4, 1]]);
        let tree = fit(&data, 1, 10);
        assert_eq!(tree.root, Node::leaf(0));
    }

    #[test]
    fn test_depth_bound_holds() {
        // Alternating labels force as many splits as the depth cap allows.
        let rows = (1..=8).map(|v| vec![v, v % 2]).collect();
        let data = dataset(rows);
        let tree = fit(&data, 1, 2);
        assert!(tree.depth <= 2);
        assert_eq!(tree.root.depth(), tree.depth);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let rows = vec![
            vec![1, 7, 0],
            vec![4, 2, 1],
            vec![6, 9, 0],
            vec![3, 5, 1],
            vec![8, 1, 1],
            vec![2, 6, 0],
        ];
        let data = dataset(rows);
        let a = fit(&data, 1, 6);
        let b = fit(&data, 1, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_partitions_are_non_empty() {
        let data = dataset(vec![vec![1, 0], vec![2, 0], vec![9, 1], vec![10, 1]]);
        let tree = fit(&data, 1, 5);
        let Node::Branch(branch) = &tree.root else {
            panic!("expected a branch at the root");
        };
        let left = data.rows().iter().filter(|r| r[branch.attribute] <= branch.threshold).count();
        assert!(left > 0);
        assert!(left < data.len());
    }

    #[test]
    fn test_predict_row_is_total() {
        let data = dataset(vec![vec![1, 0], vec![2, 0], vec![9, 1], vec![10, 1]]);
        let tree = fit(&data, 1, 5);
        for v in -5..=15 {
            let label = tree.predict_row(&[v]);
            assert!(label == 0 || label == 1);
        }
    }

    #[test]
    fn test_display_single_split() {
        let data = dataset(vec![vec![1, 0], vec![2, 0], vec![9, 1], vec![10, 1]]);
        let tree = fit(&data, 1, 5);
        let Node::Branch(branch) = &tree.root else {
            panic!("expected a branch at the root");
        };
        let t = branch.threshold;
        assert_eq!(tree.to_string(), format!("X_0 <= {t} : 0\nX_0 > {t} : 1\n"));
    }

    #[test]
    fn test_display_nested_branches_are_indented() {
        let tree = Tree {
            root: Node::branch(0, 5, Node::branch(1, 3, Node::leaf(0), Node::leaf(1)), Node::leaf(1)),
            depth: 2,
            n_leaves: 3,
        };
        let expected = "X_0 <= 5\n|\tX_1 <= 3 : 0\n|\tX_1 > 3 : 1\nX_0 > 5 : 1\n";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_display_leaf_root() {
        let data = dataset(vec![vec![4, 1], vec![4, 1]]);
        let tree = fit(&data, 1, 5);
        assert_eq!(tree.to_string(), "1\n");
    }
}
