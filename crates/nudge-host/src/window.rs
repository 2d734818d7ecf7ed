// ABOUTME: Narrow view of an editor window holding a split-pane layout.
// ABOUTME: Real integrations wrap the editor API; MemoryWindow backs tests.

use nudge_layout::Layout;

/// The four window operations the boundary resizer consumes.
///
/// Mirrors the host API surface this plugin is written against: a layout
/// snapshot, the index of the focused pane group, whole-descriptor
/// replacement, and focus movement. All operations are infallible. The
/// host either applies a value or quietly refuses it, and nothing is
/// reported back.
pub trait HostWindow {
    /// Snapshot of the current layout descriptor.
    fn layout(&self) -> Layout;

    /// Index into the descriptor's `cells` of the pane group holding focus.
    fn active_group(&self) -> usize;

    /// Replace the whole layout descriptor in one call.
    ///
    /// Hosts reset focus to the first group as a side effect; callers that
    /// care re-apply focus afterwards.
    fn set_layout(&mut self, layout: Layout);

    /// Move focus to the given pane group.
    fn focus_group(&mut self, group: usize);
}

/// In-memory host window.
///
/// Holds a layout and an active group, and reproduces the focus-reset side
/// effect of `set_layout` so resize behavior can be exercised without an
/// editor attached.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    layout: Layout,
    active: usize,
}

impl MemoryWindow {
    /// Window showing `layout` with focus on the first pane group.
    pub fn new(layout: Layout) -> Self {
        Self { layout, active: 0 }
    }

    /// Window with focus already on `active`.
    pub fn with_active(layout: Layout, active: usize) -> Self {
        Self { layout, active }
    }
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::new(Layout::single())
    }
}

impl HostWindow for MemoryWindow {
    fn layout(&self) -> Layout {
        self.layout.clone()
    }

    fn active_group(&self) -> usize {
        self.active
    }

    fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        // Layout replacement drops focus back to the first group, the same
        // way editor hosts behave.
        self.active = 0;
    }

    fn focus_group(&mut self, group: usize) {
        self.active = group;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_shows_a_single_pane() {
        let window = MemoryWindow::default();
        assert_eq!(window.layout(), Layout::single());
        assert_eq!(window.active_group(), 0);
    }

    #[test]
    fn set_layout_resets_focus_to_first_group() {
        let mut window = MemoryWindow::with_active(Layout::columns(3), 2);
        assert_eq!(window.active_group(), 2);

        window.set_layout(Layout::columns(2));
        assert_eq!(window.active_group(), 0);
        assert_eq!(window.layout(), Layout::columns(2));
    }

    #[test]
    fn focus_group_restores_a_previous_index() {
        let mut window = MemoryWindow::with_active(Layout::columns(3), 2);
        window.set_layout(Layout::columns(3));
        window.focus_group(2);
        assert_eq!(window.active_group(), 2);
    }
}
