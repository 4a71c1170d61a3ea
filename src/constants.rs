//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Application name, shown as the screen title
pub const APP_NAME: &str = "Focus Flow";

/// Directory (under the home directory) holding the settings file
pub const SETTINGS_DIR: &str = ".focus-flow";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Log file written in the working directory
pub const LOG_FILE: &str = "focus-flow.log";

/// Cadence of the periodic driver
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How long the UI loop waits for a key before redrawing
pub const UI_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Upper bound for a configured mode duration, in minutes
pub const MAX_MODE_MINUTES: u32 = 720;
