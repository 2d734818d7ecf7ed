// ABOUTME: Boundary resizing of split-window panes.
// ABOUTME: Moves one grid line of the active pane by a fraction of the window.

mod command;
mod resize;

pub use command::ResizeCommand;
pub use resize::{resize, Direction};
