use crate::errors::TreeError;
use serde::{Deserialize, Serialize};

/// One labeled data row: the attribute values followed by a binary label
/// (0 or 1) as the trailing element.
pub type Instance = Vec<i64>;

/// An owned collection of fixed-arity instances.
///
/// The arity is derived from the first row: every row holds `num_attr`
/// integer attribute values plus the trailing label. Construction rejects
/// empty and ragged input, so every `Dataset` in circulation is well formed
/// and non-empty. Label values other than 0 and 1 are a caller error and are
/// not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Instance>,
    num_attr: usize,
}

impl Dataset {
    /// Create a dataset from raw rows, validating arity.
    pub fn from_rows(rows: Vec<Instance>) -> Result<Self, TreeError> {
        let arity = match rows.first() {
            Some(first) => first.len(),
            None => return Err(TreeError::EmptyDataset),
        };
        if arity < 2 {
            return Err(TreeError::NoAttributes);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != arity {
                return Err(TreeError::InvalidInstance(i, row.len(), arity));
            }
        }
        Ok(Dataset {
            rows,
            num_attr: arity - 1,
        })
    }

    /// Number of attribute columns, excluding the label.
    pub fn num_attr(&self) -> usize {
        self.num_attr
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false after construction; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Attribute `j` of row `i`.
    pub fn value(&self, i: usize, j: usize) -> i64 {
        self.rows[i][j]
    }

    /// Trailing label of row `i`.
    pub fn label(&self, i: usize) -> i64 {
        self.rows[i][self.num_attr]
    }

    /// All rows, in insertion order.
    pub fn rows(&self) -> &[Instance] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let data = Dataset::from_rows(vec![vec![1, 2, 0], vec![3, 4, 1]]).unwrap();
        assert_eq!(data.num_attr(), 2);
        assert_eq!(data.len(), 2);
        assert_eq!(data.value(1, 0), 3);
        assert_eq!(data.label(0), 0);
        assert_eq!(data.label(1), 1);
    }

    #[test]
    fn test_empty_rows_rejected() {
        let err = Dataset::from_rows(vec![]).unwrap_err();
        assert!(matches!(err, TreeError::EmptyDataset));
    }

    #[test]
    fn test_label_only_rows_rejected() {
        let err = Dataset::from_rows(vec![vec![1], vec![0]]).unwrap_err();
        assert!(matches!(err, TreeError::NoAttributes));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Dataset::from_rows(vec![vec![1, 2, 0], vec![3, 1]]).unwrap_err();
        assert!(matches!(err, TreeError::InvalidInstance(1, 2, 3)));
    }
}
