//! Notification backend abstraction layer
//!
//! Provides a trait-based interface over the platform "show toast" call.
//! Currently supports:
//! - Desktop notifications via notify-rust (freedesktop D-Bus, macOS, Windows)

use notify_rust::{Notification, Timeout};
use thiserror::Error;

use crate::constants;
use crate::notify::NotificationEvent;

/// Failure to hand a notification to the platform
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("failed to show notification: {0}")]
    Dispatch(String),
}

/// Notification backend trait
///
/// Each backend takes a fully composed event (title, body, icon) and
/// delivers it once. No retries.
pub trait NotificationBackend {
    fn show(&self, event: &NotificationEvent) -> Result<(), NotificationError>;

    /// Get human-readable backend name
    fn name(&self) -> &'static str;
}

/// Native desktop notifications
#[derive(Debug, Clone)]
pub struct DesktopBackend {
    app_name: String,
    timeout_ms: u32,
}

impl DesktopBackend {
    pub fn new(app_name: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            app_name: app_name.into(),
            timeout_ms,
        }
    }
}

impl Default for DesktopBackend {
    fn default() -> Self {
        Self::new(constants::notify::APP_NAME, constants::notify::TIMEOUT_MS)
    }
}

impl NotificationBackend for DesktopBackend {
    fn show(&self, event: &NotificationEvent) -> Result<(), NotificationError> {
        let icon = event.icon.to_string_lossy();

        Notification::new()
            .appname(&self.app_name)
            .summary(event.title())
            .body(&event.message)
            .icon(&icon)
            .timeout(Timeout::Milliseconds(self.timeout_ms))
            .show()
            .map(|_| ())
            .map_err(|e| NotificationError::Dispatch(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}
