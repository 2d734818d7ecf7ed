// ABOUTME: The four nudge commands hosts bind to keystrokes.
// ABOUTME: Each one names an axis and direction for the resize operation.

use nudge_core::Config;
use nudge_host::HostWindow;
use nudge_layout::Axis;
use serde::{Deserialize, Serialize};

use crate::resize::{resize, Direction};

/// A keystroke-sized resize of the active pane.
///
/// Commands are named for what the user sees the pane do. Expanding to the
/// left means the pane's left boundary moves left; for a pane on the left
/// window edge the right boundary moves left instead, shrinking it, which
/// keeps one keystroke meaning "this line goes left" everywhere.
///
/// The serialized names (`expand_to_left` and friends) are what keymaps and
/// command palettes use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCommand {
    /// Move the active pane's vertical boundary left.
    ExpandToLeft,
    /// Move the active pane's vertical boundary right.
    ExpandToRight,
    /// Move the active pane's horizontal boundary up.
    ExpandToTop,
    /// Move the active pane's horizontal boundary down.
    ExpandToBottom,
}

impl ResizeCommand {
    /// All commands, in keymap order.
    pub fn all() -> [ResizeCommand; 4] {
        [
            ResizeCommand::ExpandToLeft,
            ResizeCommand::ExpandToRight,
            ResizeCommand::ExpandToTop,
            ResizeCommand::ExpandToBottom,
        ]
    }

    /// The serialized command name, as keymaps spell it.
    pub fn name(self) -> &'static str {
        match self {
            ResizeCommand::ExpandToLeft => "expand_to_left",
            ResizeCommand::ExpandToRight => "expand_to_right",
            ResizeCommand::ExpandToTop => "expand_to_top",
            ResizeCommand::ExpandToBottom => "expand_to_bottom",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            ResizeCommand::ExpandToLeft | ResizeCommand::ExpandToRight => Axis::Horizontal,
            ResizeCommand::ExpandToTop | ResizeCommand::ExpandToBottom => Axis::Vertical,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            ResizeCommand::ExpandToLeft | ResizeCommand::ExpandToTop => Direction::Shrink,
            ResizeCommand::ExpandToRight | ResizeCommand::ExpandToBottom => Direction::Grow,
        }
    }

    /// Run the command against a window with an explicit fraction.
    pub fn run(self, window: &mut dyn HostWindow, fraction: f32) {
        resize(window, self.axis(), self.direction(), fraction);
    }

    /// Run the command with the fraction from its invocation arguments,
    /// falling back to the configured default when the keybinding does not
    /// carry one.
    pub fn run_with_config(
        self,
        window: &mut dyn HostWindow,
        fraction: Option<f32>,
        config: &Config,
    ) {
        self.run(window, fraction.unwrap_or(config.fraction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudge_host::MemoryWindow;
    use nudge_layout::Layout;

    #[test]
    fn serialized_names_match_keymap_spelling() {
        for command in ResizeCommand::all() {
            let json = serde_json::to_string(&command).unwrap();
            assert_eq!(json, format!("\"{}\"", command.name()));

            let back: ResizeCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(back, command);
        }
    }

    #[test]
    fn unknown_command_name_fails_to_parse() {
        let result: Result<ResizeCommand, _> = serde_json::from_str("\"expand_to_nowhere\"");
        assert!(result.is_err());
    }

    #[test]
    fn commands_map_to_axis_and_direction() {
        assert_eq!(ResizeCommand::ExpandToLeft.axis(), Axis::Horizontal);
        assert_eq!(ResizeCommand::ExpandToLeft.direction(), Direction::Shrink);

        assert_eq!(ResizeCommand::ExpandToRight.axis(), Axis::Horizontal);
        assert_eq!(ResizeCommand::ExpandToRight.direction(), Direction::Grow);

        assert_eq!(ResizeCommand::ExpandToTop.axis(), Axis::Vertical);
        assert_eq!(ResizeCommand::ExpandToTop.direction(), Direction::Shrink);

        assert_eq!(ResizeCommand::ExpandToBottom.axis(), Axis::Vertical);
        assert_eq!(ResizeCommand::ExpandToBottom.direction(), Direction::Grow);
    }

    #[test]
    fn expand_to_right_from_the_left_edge_widens_the_pane() {
        let mut window = MemoryWindow::with_active(Layout::columns(2), 0);

        ResizeCommand::ExpandToRight.run(&mut window, 0.1);

        assert_eq!(window.layout().cols, vec![0.0, 0.6, 1.0]);
        assert_eq!(window.active_group(), 0);
    }

    #[test]
    fn run_with_config_falls_back_to_the_configured_fraction() {
        let mut window = MemoryWindow::with_active(Layout::columns(2), 1);
        let config = Config { fraction: 0.25 };

        ResizeCommand::ExpandToLeft.run_with_config(&mut window, None, &config);

        assert_eq!(window.layout().cols, vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn explicit_fraction_overrides_the_config() {
        let mut window = MemoryWindow::with_active(Layout::columns(2), 1);
        let config = Config { fraction: 0.25 };

        ResizeCommand::ExpandToLeft.run_with_config(&mut window, Some(0.125), &config);

        assert_eq!(window.layout().cols, vec![0.0, 0.375, 1.0]);
    }
}
