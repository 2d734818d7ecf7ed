// ABOUTME: Split-window layout descriptor model.
// ABOUTME: Grid lines, cells, and validation for the cols/rows/cells format.

mod grid;

pub use grid::{Axis, Cell, Layout, LayoutError, Rect};
