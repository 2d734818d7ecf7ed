// ABOUTME: Grid partition of a window into rectangular panes.
// ABOUTME: Models the cols/rows/cells descriptor exchanged with editor hosts.

use serde::{Deserialize, Serialize};

/// Which family of grid lines an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Vertical grid lines (`cols`), separating panes side by side.
    Horizontal,
    /// Horizontal grid lines (`rows`), separating stacked panes.
    Vertical,
}

/// One rectangular pane, addressed by grid-line indices.
///
/// Hosts exchange cells as 4-element arrays
/// `[col_left, row_top, col_right, row_bottom]`; the serde representation
/// keeps that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 4]", into = "[usize; 4]")]
pub struct Cell {
    pub col_left: usize,
    pub row_top: usize,
    pub col_right: usize,
    pub row_bottom: usize,
}

impl Cell {
    pub const fn new(col_left: usize, row_top: usize, col_right: usize, row_bottom: usize) -> Self {
        Self {
            col_left,
            row_top,
            col_right,
            row_bottom,
        }
    }
}

impl From<[usize; 4]> for Cell {
    fn from([col_left, row_top, col_right, row_bottom]: [usize; 4]) -> Self {
        Self {
            col_left,
            row_top,
            col_right,
            row_bottom,
        }
    }
}

impl From<Cell> for [usize; 4] {
    fn from(cell: Cell) -> Self {
        [cell.col_left, cell.row_top, cell.col_right, cell.row_bottom]
    }
}

/// Rectangle in normalized coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Split-window layout descriptor.
///
/// `cols` and `rows` hold the grid-line positions on each axis, with 0.0 and
/// 1.0 always present as the outer edges; `cells` partitions the grid into
/// panes. The whole value serializes to the JSON shape hosts exchange:
///
/// ```json
/// {"cols": [0.0, 0.5, 1.0], "rows": [0.0, 1.0], "cells": [[0, 0, 1, 1], [1, 0, 2, 1]]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub cols: Vec<f32>,
    pub rows: Vec<f32>,
    pub cells: Vec<Cell>,
}

impl Layout {
    /// A single pane filling the window.
    pub fn single() -> Self {
        Self::grid(1, 1)
    }

    /// `n` side-by-side columns of equal width.
    pub fn columns(n: usize) -> Self {
        Self::grid(n, 1)
    }

    /// `n` stacked rows of equal height.
    pub fn rows(n: usize) -> Self {
        Self::grid(1, n)
    }

    /// An evenly spaced grid of `cols` x `rows` panes, cells in row-major
    /// order (left to right, then top to bottom).
    pub fn grid(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);

        let col_lines = (0..=cols).map(|i| i as f32 / cols as f32).collect();
        let row_lines = (0..=rows).map(|i| i as f32 / rows as f32).collect();

        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(col, row, col + 1, row + 1));
            }
        }

        Self {
            cols: col_lines,
            rows: row_lines,
            cells,
        }
    }

    /// Number of pane columns, read off the last cell's right edge.
    ///
    /// An empty `cells` counts as zero columns.
    pub fn column_count(&self) -> usize {
        self.cells.last().map_or(0, |cell| cell.col_right)
    }

    /// Number of pane rows, read off the last cell's bottom edge.
    pub fn row_count(&self) -> usize {
        self.cells.last().map_or(0, |cell| cell.row_bottom)
    }

    /// Grid-line positions for one axis.
    pub fn lines(&self, axis: Axis) -> &[f32] {
        match axis {
            Axis::Horizontal => &self.cols,
            Axis::Vertical => &self.rows,
        }
    }

    /// Mutable grid-line positions for one axis.
    pub fn lines_mut(&mut self, axis: Axis) -> &mut Vec<f32> {
        match axis {
            Axis::Horizontal => &mut self.cols,
            Axis::Vertical => &mut self.rows,
        }
    }

    /// Normalized rectangle of one cell, or `None` when the index is out of
    /// range or the cell references grid lines the layout does not have.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let cell = self.cells.get(index)?;
        let left = *self.cols.get(cell.col_left)?;
        let right = *self.cols.get(cell.col_right)?;
        let top = *self.rows.get(cell.row_top)?;
        let bottom = *self.rows.get(cell.row_bottom)?;
        Some(Rect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        })
    }

    /// Rectangles for every cell, in cell order. `None` if any cell is
    /// malformed.
    pub fn cell_rects(&self) -> Option<Vec<Rect>> {
        (0..self.cells.len()).map(|i| self.cell_rect(i)).collect()
    }

    /// Parse a descriptor from the host's JSON form.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the host's JSON form.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the structural invariants of the descriptor: strictly
    /// increasing grid lines spanning 0.0 to 1.0 on both axes, and cells
    /// that partition the grid exactly, without overlap or gaps.
    ///
    /// This is an opt-in tool for hosts and tests. The resize operation
    /// never validates: it writes back whatever its arithmetic produced.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let lines = self.lines(axis);
            if lines.len() < 2 {
                return Err(LayoutError::TooFewLines {
                    axis,
                    count: lines.len(),
                });
            }
            let first = lines[0];
            let last = lines[lines.len() - 1];
            if first != 0.0 || last != 1.0 {
                return Err(LayoutError::BadEdges { axis, first, last });
            }
            if !lines.windows(2).all(|pair| pair[0] < pair[1]) {
                return Err(LayoutError::NotIncreasing { axis });
            }
        }

        if self.cells.is_empty() {
            return Err(LayoutError::NoCells);
        }

        // Partition check on unit grid cells: every (col, row) slot must be
        // claimed by exactly one cell. Integer arithmetic, so no epsilon.
        let unit_cols = self.cols.len() - 1;
        let unit_rows = self.rows.len() - 1;
        let mut claimed = vec![false; unit_cols * unit_rows];

        for (index, cell) in self.cells.iter().enumerate() {
            if cell.col_right >= self.cols.len() || cell.row_bottom >= self.rows.len() {
                return Err(LayoutError::IndexOutOfRange { index });
            }
            if cell.col_left >= cell.col_right || cell.row_top >= cell.row_bottom {
                return Err(LayoutError::DegenerateCell { index });
            }
            for row in cell.row_top..cell.row_bottom {
                for col in cell.col_left..cell.col_right {
                    let slot = &mut claimed[row * unit_cols + col];
                    if *slot {
                        return Err(LayoutError::Overlap { index });
                    }
                    *slot = true;
                }
            }
        }

        if !claimed.iter().all(|&slot| slot) {
            return Err(LayoutError::Gap);
        }

        Ok(())
    }
}

/// Problems a layout descriptor can have.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no cells")]
    NoCells,

    #[error("{axis:?} axis needs at least two grid lines, found {count}")]
    TooFewLines { axis: Axis, count: usize },

    #[error("{axis:?} grid lines must span 0.0 to 1.0, found {first} to {last}")]
    BadEdges { axis: Axis, first: f32, last: f32 },

    #[error("{axis:?} grid lines are not strictly increasing")]
    NotIncreasing { axis: Axis },

    #[error("cell {index} references a grid line outside the layout")]
    IndexOutOfRange { index: usize },

    #[error("cell {index} has no extent on at least one axis")]
    DegenerateCell { index: usize },

    #[error("cell {index} overlaps an earlier cell")]
    Overlap { index: usize },

    #[error("cells leave part of the grid uncovered")]
    Gap,

    #[error("malformed layout descriptor: {0}")]
    Json(#[from] serde_json::Error),
}
