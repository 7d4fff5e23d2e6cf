//! Hierarchical index flattening
//!
//! A row or column index arrives as a descriptor: either flat (one
//! label per position) or multi-level (per level, a list of unique
//! labels plus one label code per position, the encoding used by
//! dataframe libraries). Flattening turns the descriptor into one cell
//! sequence per level, merging adjacent runs of equal codes into a
//! single spanning cell.
//!
//! Flat indices are deliberately not run-length merged: within a single
//! level there is no parent level to group under, so every label is
//! treated as distinct even when neighbours repeat. Only genuinely
//! multi-level indices are compressed.

use crate::table::cell::Cell;
use crate::utils::error::{Error, Result};

/// Which axis an index describes; decides whether merged runs span
/// rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rows,
    Cols,
}

/// A row or column index descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Index {
    /// No index at all
    #[default]
    Empty,
    /// A single level, one label per position
    Flat(Vec<String>),
    /// A hierarchical index in encoded label/code form
    Multi(MultiIndex),
}

impl Index {
    /// Build a flat index from anything string-like.
    pub fn flat<S: ToString>(labels: impl IntoIterator<Item = S>) -> Self {
        Index::Flat(labels.into_iter().map(|l| l.to_string()).collect())
    }

    /// Number of positions covered by the index.
    pub fn len(&self) -> usize {
        match self {
            Index::Empty => 0,
            Index::Flat(labels) => labels.len(),
            Index::Multi(multi) => multi.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A multi-level index in encoded form: per level, the unique labels
/// and one code (label identifier) per position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiIndex {
    levels: Vec<Vec<String>>,
    codes: Vec<Vec<usize>>,
}

impl MultiIndex {
    /// Validate and build a multi-level index.
    ///
    /// Every level needs a code sequence of the same length, and every
    /// code must point at an existing label of its level.
    pub fn new(levels: Vec<Vec<String>>, codes: Vec<Vec<usize>>) -> Result<Self> {
        if levels.is_empty() {
            return Err(Error::source("multi-level index has no levels"));
        }
        if levels.len() != codes.len() {
            return Err(Error::source(format!(
                "index has {} label levels but {} code levels",
                levels.len(),
                codes.len()
            )));
        }
        let positions = codes[0].len();
        if positions == 0 {
            return Err(Error::source("multi-level index has no positions"));
        }
        for (level, level_codes) in codes.iter().enumerate() {
            if level_codes.len() != positions {
                return Err(Error::source(format!(
                    "level {} has {} codes, expected {}",
                    level,
                    level_codes.len(),
                    positions
                )));
            }
            for &code in level_codes {
                if code >= levels[level].len() {
                    return Err(Error::source(format!(
                        "level {} has code {} but only {} labels",
                        level,
                        code,
                        levels[level].len()
                    )));
                }
            }
        }

        Ok(MultiIndex { levels, codes })
    }

    /// Number of positions covered by the index.
    pub fn len(&self) -> usize {
        self.codes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels.
    pub fn nlevels(&self) -> usize {
        self.levels.len()
    }
}

/// Flatten an index descriptor into one cell sequence per level,
/// outermost level first.
///
/// An empty index yields a single level with zero cells; this
/// placeholder level is what keeps the header/index corner drawn for
/// tables without an index.
pub fn flatten_index(index: &Index, direction: Direction) -> Vec<Vec<Cell>> {
    match index {
        Index::Empty => vec![vec![]],
        Index::Flat(labels) => vec![labels.iter().map(Cell::new).collect()],
        Index::Multi(multi) => (0..multi.nlevels())
            .map(|level| flatten_level(&multi.levels[level], &multi.codes[level], direction))
            .collect(),
    }
}

/// Merge adjacent equal codes within one level into spanning cells.
///
/// Runs are detected purely by code equality at adjacent positions; no
/// reordering and no merging across non-adjacent runs.
fn flatten_level(labels: &[String], codes: &[usize], direction: Direction) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut prev = codes[0];
    let mut run = 0;
    for &code in codes {
        if code == prev {
            run += 1;
        } else {
            cells.push(run_cell(&labels[prev], run, direction));
            prev = code;
            run = 1;
        }
    }
    cells.push(run_cell(&labels[prev], run, direction));

    cells
}

fn run_cell(label: &str, span: usize, direction: Direction) -> Cell {
    match direction {
        Direction::Rows => Cell::new(label).with_rowspan(span),
        Direction::Cols => Cell::new(label).with_colspan(span),
    }
}
