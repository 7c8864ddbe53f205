//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "nyrna";

    /// Configuration filename
    pub const FILENAME: &str = "nyrna_config.json";
}

/// Desktop notification constants
pub mod notify {
    /// Application name reported to the notification daemon
    pub const APP_NAME: &str = "Nyrna";

    /// Icon resource, relative to the working or installation directory
    pub const ICON_PATH: &str = "icons/nyrna.png";

    /// How long a toast stays on screen
    pub const TIMEOUT_MS: u32 = 5000;

    /// Notification titles
    pub mod title {
        pub const SUSPENDED: &str = "Suspended";
        pub const RESUMED: &str = "Resumed";
        pub const ISSUE: &str = "Issue";
    }
}

/// Default configuration values
/// These are used when the config file or one of its fields is missing
pub mod defaults {
    /// Hotkey that toggles suspend/resume of the active window
    pub const HOTKEY: &str = "Pause";
}
