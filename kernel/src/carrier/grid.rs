//! `GridState`: the sliding-tile puzzle board.
//!
//! # Layout
//!
//! A `rows x cols` board stored row-major. Exactly one cell holds the
//! [`BLANK`] sentinel; every other cell holds a distinct tile label.
//!
//! # Equality semantics
//!
//! Structural: two boards are equal iff they have the same shape and the same
//! cell values. The canonical key is the row-major cell list joined by `,`,
//! so boards of different shapes never share a key within one problem.

use std::collections::BTreeSet;

use crate::carrier::key::StateKey;
use crate::error::KernelError;

/// The blank cell sentinel.
pub const BLANK: u32 = 0;

/// Immutable sliding-puzzle board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
    /// Row-major index of the blank cell (cached at construction).
    blank: usize,
}

impl GridState {
    /// Build a board from its rows.
    ///
    /// # Errors
    ///
    /// - [`KernelError::InvalidArgument`] if the board is empty or ragged.
    /// - [`KernelError::InvalidState`] if there is not exactly one blank or a
    ///   tile label repeats.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, KernelError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(KernelError::invalid_argument(
                "grid must have at least one row and one column",
            ));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != col_count) {
            return Err(KernelError::invalid_argument(format!(
                "row {i} has {} cells, expected {col_count}",
                row.len()
            )));
        }
        let cells: Vec<u32> = rows.into_iter().flatten().collect();
        Self::from_cells(row_count, col_count, cells)
    }

    /// Build a board from a row-major cell vector.
    ///
    /// # Errors
    ///
    /// Same as [`GridState::new`]; additionally `InvalidArgument` if
    /// `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<u32>) -> Result<Self, KernelError> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return Err(KernelError::invalid_argument(format!(
                "{} cells do not form a {rows}x{cols} grid",
                cells.len()
            )));
        }

        let blanks: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == BLANK)
            .map(|(i, _)| i)
            .collect();
        let &[blank] = blanks.as_slice() else {
            return Err(KernelError::invalid_state(format!(
                "grid must contain exactly one blank, found {}",
                blanks.len()
            )));
        };

        let mut seen = BTreeSet::new();
        if let Some(dup) = cells.iter().find(|&&v| !seen.insert(v)) {
            return Err(KernelError::invalid_state(format!(
                "tile label {dup} appears more than once"
            )));
        }

        Ok(Self {
            rows,
            cols,
            cells,
            blank,
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Value at `(row, col)`. Returns `None` outside the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// `(row, col)` of the blank cell.
    #[must_use]
    pub const fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }

    /// Copy the board back out as rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }

    /// Whether `other` has the same `rows x cols` shape.
    #[must_use]
    pub const fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Dimension-checked cell-by-cell comparison against a target board.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] if the shapes differ;
    /// mismatched dimensions are a caller error, not "not equal".
    pub fn matches(&self, target: &Self) -> Result<bool, KernelError> {
        self.ensure_same_shape(target)?;
        Ok(self.cells == target.cells)
    }

    /// Fail with `InvalidArgument` unless `other` has the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidArgument`] on shape mismatch.
    pub fn ensure_same_shape(&self, other: &Self) -> Result<(), KernelError> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(KernelError::invalid_argument(format!(
                "grid dimensions differ: {}x{} vs {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )))
        }
    }

    /// Canonical key: row-major cell values joined by `,`.
    #[must_use]
    pub fn canonical_key(&self) -> StateKey {
        let parts: Vec<String> = self.cells.iter().map(u32::to_string).collect();
        StateKey::new(parts.join(","))
    }

    /// New board with the blank swapped into `target` (row-major index).
    ///
    /// Bounds are the caller's responsibility (see `operators::slide`).
    pub(crate) fn with_blank_at(&self, target: usize) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
            blank: target,
        }
    }
}
