// ABOUTME: The boundary-move operation at the heart of the plugin.
// ABOUTME: Shifts one grid line next to the active pane by a fraction of the window.

use nudge_host::HostWindow;
use nudge_layout::Axis;

/// Which way the chosen grid line moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move the line toward 0.0 (subtract the fraction).
    Shrink,
    /// Move the line toward 1.0 (add the fraction).
    Grow,
}

/// Move one grid line adjacent to the active pane by `fraction` of the window.
///
/// The line is the active cell's leading edge on `axis` (its left or top
/// boundary). When the pane already sits on the window edge there, the
/// trailing edge moves instead, so edge panes still resize with the same
/// keystroke.
///
/// The new position is written back as computed. Nothing clamps the line to
/// the window or keeps it ordered against its neighbors; hosts accept such
/// layouts and users immediately nudge the line back. With a single column
/// (or row, for vertical nudges) there is no interior line to move and the
/// call is a no-op.
pub fn resize(window: &mut dyn HostWindow, axis: Axis, direction: Direction, fraction: f32) {
    let mut layout = window.layout();
    let active = window.active_group();

    let pane_count = match axis {
        Axis::Horizontal => layout.column_count(),
        Axis::Vertical => layout.row_count(),
    };
    if pane_count < 2 {
        tracing::info!("Not resizing {:?}: layout has {} pane(s) on that axis", axis, pane_count);
        return;
    }

    let Some(cell) = layout.cells.get(active).copied() else {
        tracing::warn!("Active group {} has no cell in the layout", active);
        return;
    };

    // The leading edge, unless the pane touches the window edge there.
    let boundary = match axis {
        Axis::Horizontal => {
            if cell.col_left == 0 {
                cell.col_right
            } else {
                cell.col_left
            }
        }
        Axis::Vertical => {
            if cell.row_top == 0 {
                cell.row_bottom
            } else {
                cell.row_top
            }
        }
    };

    let lines = layout.lines_mut(axis);
    let Some(&old) = lines.get(boundary) else {
        tracing::warn!("Cell of group {} points at missing {:?} line {}", active, axis, boundary);
        return;
    };
    let new = match direction {
        Direction::Shrink => old - fraction,
        Direction::Grow => old + fraction,
    };
    lines[boundary] = new;

    tracing::info!("Moved {:?} line {} from {} to {}", axis, boundary, old, new);

    // Applying a layout drops focus, so hand it back to the pane the user
    // was in.
    window.set_layout(layout);
    window.focus_group(active);
}
