//! Core data types for the advisor.
//!
//! Grids use flat `Vec` storage in row-major layout:
//! `cells[row * cols + col]` maps to the UI's `cellStates[row][col]`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// What the player has marked a cell as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotation {
    #[default]
    Unknown,
    Safe,
    Mine,
}

impl Annotation {
    /// Decode the wire form: 0 = unknown, 1 = safe, 2 = mine.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Annotation::Unknown),
            1 => Ok(Annotation::Safe),
            2 => Ok(Annotation::Mine),
            other => Err(Error::InvalidAnnotation(other)),
        }
    }

    /// Encode to the wire form accepted by [`Annotation::from_code`].
    #[inline(always)]
    pub fn code(self) -> u8 {
        match self {
            Annotation::Unknown => 0,
            Annotation::Safe => 1,
            Annotation::Mine => 2,
        }
    }

    #[inline(always)]
    pub fn is_known(self) -> bool {
        self != Annotation::Unknown
    }
}

/// Per-annotation cell totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnotationCounts {
    pub unknown: usize,
    pub safe: usize,
    pub mine: usize,
}

/// Number of cells in a `rows × cols` grid. Zero sizes and overflowing
/// products are rejected so `cells.len() == rows * cols` always holds.
fn cell_total(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyGrid);
    }
    rows.checked_mul(cols).ok_or(Error::GridTooLarge { rows, cols })
}

/// The annotated board. Always rectangular and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Annotation>,
}

impl Grid {
    /// Square grid with every cell unknown. Changing the board size means
    /// building a fresh grid with this.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_dims(size, size)
    }

    pub fn with_dims(rows: usize, cols: usize) -> Result<Self> {
        let total = cell_total(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Annotation::Unknown; total],
        })
    }

    /// Build a grid from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Annotation>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    actual: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Self {
            rows: height,
            cols,
            cells,
        })
    }

    /// Build a grid from flat row-major wire codes.
    pub fn from_codes(rows: usize, cols: usize, codes: &[u8]) -> Result<Self> {
        let total = cell_total(rows, cols)?;
        if codes.len() != total {
            return Err(Error::CellCountMismatch {
                expected: total,
                actual: codes.len(),
            });
        }

        let cells = codes
            .iter()
            .map(|&code| Annotation::from_code(code))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows, cols, cells })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Annotation> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Paint a single cell with the current brush.
    pub fn paint(&mut self, row: usize, col: usize, brush: Annotation) -> Result<()> {
        if !self.in_bounds(row, col) {
            return Err(Error::OutOfBounds { row, col });
        }
        self.cells[row * self.cols + col] = brush;
        Ok(())
    }

    /// Iterate `(row, col, annotation)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Annotation)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &a)| (idx / cols, idx % cols, a))
    }

    pub fn counts(&self) -> AnnotationCounts {
        let mut counts = AnnotationCounts::default();
        for &cell in &self.cells {
            match cell {
                Annotation::Unknown => counts.unknown += 1,
                Annotation::Safe => counts.safe += 1,
                Annotation::Mine => counts.mine += 1,
            }
        }
        counts
    }

    /// True once the player has marked anything. Predicting on a blank
    /// board is allowed but carries no information; the UI disables its
    /// predict action until this holds.
    pub fn has_annotations(&self) -> bool {
        self.cells.iter().any(|a| a.is_known())
    }
}

/// Pre-computed neighbor cache for all cells.
///
/// Stores the 8-directional neighbors (clipped to grid bounds) for every cell.
/// Indexed by `row * cols + col`, each entry is a slice of `(row, col)` pairs.
pub struct NeighborCache {
    cols: usize,
    /// Flat storage of all neighbor pairs.
    data: Vec<(usize, usize)>,
    /// offsets[i]..offsets[i + 1] is the neighbor range of cell i.
    offsets: Vec<usize>,
}

impl NeighborCache {
    /// Build the neighbor cache for a grid of the given dimensions.
    /// Callers pass the dimensions of an existing [`Grid`], whose cell
    /// count is known not to overflow.
    pub fn new(rows: usize, cols: usize) -> Self {
        let total = rows * cols;
        let mut data = Vec::with_capacity(total * 8);
        let mut offsets = Vec::with_capacity(total + 1);

        for row in 0..rows {
            for col in 0..cols {
                offsets.push(data.len());
                for dr in -1i64..=1 {
                    for dc in -1i64..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = row as i64 + dr;
                        let nc = col as i64 + dc;
                        if nr >= 0 && nr < rows as i64 && nc >= 0 && nc < cols as i64 {
                            data.push((nr as usize, nc as usize));
                        }
                    }
                }
            }
        }
        offsets.push(data.len()); // sentinel

        Self {
            cols,
            data,
            offsets,
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Get the pre-computed neighbors for cell (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> &[(usize, usize)] {
        let idx = row * self.cols + col;
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.data[start..end]
    }
}
