//! Tabular data-source boundary
//!
//! `Table::from_source` consumes anything implementing [`TableSource`]:
//! an ordered column index, an ordered row index (both possibly
//! multi-level), and row-major value iteration with index columns
//! excluded. [`Frame`] is the bundled in-memory implementation; external
//! dataframe adapters implement the trait the same way.

use crate::table::flatten::Index;
use crate::utils::error::{Error, Result};

/// A neutral, read-only view of a two-dimensional data set.
pub trait TableSource {
    /// Column index descriptor (becomes the header).
    fn column_index(&self) -> Index;

    /// Row index descriptor (becomes the leading index columns).
    fn row_index(&self) -> Index;

    /// Row-major values, one entry per data column (index excluded).
    fn rows(&self) -> Vec<Vec<String>>;
}

/// An in-memory data set with validated shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    columns: Index,
    index: Index,
    rows: Vec<Vec<String>>,
}

impl Frame {
    /// Build a frame, rejecting inconsistent shapes up front so a
    /// malformed source never reaches the table builder.
    pub fn new<S: ToString>(
        columns: Index,
        index: Index,
        rows: Vec<Vec<S>>,
    ) -> Result<Self> {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| v.to_string()).collect())
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::source(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }
        if !columns.is_empty() && !rows.is_empty() && columns.len() != width {
            return Err(Error::source(format!(
                "column index covers {} positions but rows have {} values",
                columns.len(),
                width
            )));
        }
        if !index.is_empty() && index.len() != rows.len() {
            return Err(Error::source(format!(
                "row index covers {} positions but there are {} rows",
                index.len(),
                rows.len()
            )));
        }

        Ok(Frame {
            columns,
            index,
            rows,
        })
    }
}

impl TableSource for Frame {
    fn column_index(&self) -> Index {
        self.columns.clone()
    }

    fn row_index(&self) -> Index {
        self.index.clone()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_frame() {
        let frame = Frame::new(
            Index::flat(["A", "B"]),
            Index::flat([0, 1]),
            vec![vec![1, 2], vec![3, 4]],
        );
        assert!(frame.is_ok());
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = Frame::new(
            Index::flat(["A", "B"]),
            Index::Empty,
            vec![vec![1, 2], vec![3]],
        )
        .unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_column_count_mismatch_is_rejected() {
        let result = Frame::new(
            Index::flat(["A", "B", "C"]),
            Index::Empty,
            vec![vec![1, 2]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_row_index_length_mismatch_is_rejected() {
        let result = Frame::new(
            Index::flat(["A"]),
            Index::flat([0, 1, 2]),
            vec![vec![1]],
        );
        assert!(result.is_err());
    }
}
