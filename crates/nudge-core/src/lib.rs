// ABOUTME: Shared configuration for pane-nudge.
// ABOUTME: Defines the settings file carrying the default nudge fraction.

pub mod config;

pub use config::{Config, ConfigError, DEFAULT_FRACTION};
