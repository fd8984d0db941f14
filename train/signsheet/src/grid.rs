use crate::{error::SheetError, glyphs::Label};

/// Labels chosen for one sheet, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelGrid {
    rows: usize,
    columns: usize,
    labels: Vec<Label>,
}

impl LabelGrid {
    pub(crate) fn with_capacity(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            labels: Vec::with_capacity(rows * columns),
        }
    }

    /// Appends the next cell in row-major order.
    pub(crate) fn push(&mut self, label: Label) {
        debug_assert!(self.labels.len() < self.rows * self.columns);
        self.labels.push(label);
    }

    /// Builds a grid from explicit rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Label>>) -> Result<Self, SheetError> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut grid = Self::with_capacity(rows.len(), columns);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != columns {
                return Err(SheetError::RaggedLabels {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }
            grid.labels.extend(row);
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Label> {
        if row < self.rows && col < self.columns {
            Some(self.labels[row * self.columns + col])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Label]> {
        // chunks() panics on zero
        self.labels.chunks(self.columns.max(1))
    }
}
