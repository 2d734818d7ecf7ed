// ABOUTME: Host window seam between editor integrations and the resizer.
// ABOUTME: Defines the HostWindow trait and an in-memory reference host.

mod window;

pub use window::{HostWindow, MemoryWindow};
