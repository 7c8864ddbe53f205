//! Desktop notifications
//!
//! Best-effort toasts for the three user-visible events: a process was
//! suspended, a process was resumed, or the hotkey could not be activated.
//! Delivery failures are logged and never reach the caller.

pub mod backend;

use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use backend::{DesktopBackend, NotificationBackend, NotificationError};

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Suspended,
    Resumed,
    Issue,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Suspended => constants::notify::title::SUSPENDED,
            NotificationKind::Resumed => constants::notify::title::RESUMED,
            NotificationKind::Issue => constants::notify::title::ISSUE,
        }
    }
}

/// A single composed notification, ready for a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    pub message: String,
    pub icon: PathBuf,
}

impl NotificationEvent {
    pub fn suspended(process_name: &str, icon: &Path) -> Self {
        Self {
            kind: NotificationKind::Suspended,
            message: format!("{} was suspended.", process_name),
            icon: icon.to_path_buf(),
        }
    }

    pub fn resumed(process_name: &str, icon: &Path) -> Self {
        Self {
            kind: NotificationKind::Resumed,
            message: format!("{} was resumed.", process_name),
            icon: icon.to_path_buf(),
        }
    }

    pub fn issue(cause: &dyn Display, icon: &Path) -> Self {
        Self {
            kind: NotificationKind::Issue,
            message: cause.to_string(),
            icon: icon.to_path_buf(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// Sends suspend/resume/issue notifications through a backend
pub struct Notifier<B: NotificationBackend = DesktopBackend> {
    backend: B,
    icon: PathBuf,
}

impl Notifier<DesktopBackend> {
    /// Notifier using native desktop notifications
    pub fn desktop() -> Self {
        Self::new(DesktopBackend::default())
    }
}

impl<B: NotificationBackend> Notifier<B> {
    pub fn new(backend: B) -> Self {
        let icon = resolve_icon(Path::new(constants::notify::ICON_PATH));
        Self::with_icon(backend, icon)
    }

    pub fn with_icon(backend: B, icon: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            icon: icon.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn icon(&self) -> &Path {
        &self.icon
    }

    /// Notify that `process_name` was suspended
    pub fn notify_suspend(&self, process_name: &str) {
        self.dispatch(NotificationEvent::suspended(process_name, &self.icon));
    }

    /// Notify that `process_name` was resumed
    pub fn notify_resume(&self, process_name: &str) {
        self.dispatch(NotificationEvent::resumed(process_name, &self.icon));
    }

    /// Notify that the hotkey could not be activated
    pub fn notify_hotkey_failure(&self, cause: &dyn Display) {
        self.dispatch(NotificationEvent::issue(cause, &self.icon));
    }

    fn dispatch(&self, event: NotificationEvent) {
        debug!(
            backend = self.backend.name(),
            title = event.title(),
            message = %event.message,
            "Sending notification"
        );

        if let Err(e) = self.backend.show(&event) {
            warn!(
                backend = self.backend.name(),
                title = event.title(),
                error = %e,
                "Notification not delivered"
            );
        }
    }
}

/// Locate the icon resource.
///
/// Absolute paths are returned unchanged. Relative paths are looked up in the
/// working directory, then next to the executable. If neither exists the
/// relative path is returned as given.
pub fn resolve_icon(relative: &Path) -> PathBuf {
    if relative.is_absolute() {
        return relative.to_path_buf();
    }

    let candidates = [
        std::env::current_dir().ok(),
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf)),
    ];

    for base in candidates.into_iter().flatten() {
        let path = base.join(relative);
        if path.exists() {
            return path;
        }
    }

    debug!(icon = %relative.display(), "Icon resource not found, passing path through");
    relative.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared with a test subscriber
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a subscriber that records WARN and above
    fn capture_warnings(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    /// Records every event; optionally fails each delivery
    #[derive(Default)]
    struct RecordingBackend {
        fail: bool,
        sent: RefCell<Vec<NotificationEvent>>,
    }

    impl RecordingBackend {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    impl NotificationBackend for RecordingBackend {
        fn show(&self, event: &NotificationEvent) -> Result<(), NotificationError> {
            self.sent.borrow_mut().push(event.clone());
            if self.fail {
                Err(NotificationError::Dispatch("daemon unavailable".to_string()))
            } else {
                Ok(())
            }
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn notifier(backend: RecordingBackend) -> Notifier<RecordingBackend> {
        Notifier::with_icon(backend, "icons/nyrna.png")
    }

    #[test]
    fn test_kind_titles() {
        assert_eq!(NotificationKind::Suspended.title(), "Suspended");
        assert_eq!(NotificationKind::Resumed.title(), "Resumed");
        assert_eq!(NotificationKind::Issue.title(), "Issue");
    }

    #[test]
    fn test_notify_suspend_message() {
        let notifier = notifier(RecordingBackend::default());
        notifier.notify_suspend("App");

        let sent = notifier.backend().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, "App was suspended.");
        assert_eq!(sent[0].title(), "Suspended");
        assert_eq!(sent[0].icon, PathBuf::from("icons/nyrna.png"));
    }

    #[test]
    fn test_notify_resume_message() {
        let notifier = notifier(RecordingBackend::default());
        notifier.notify_resume("App");

        let sent = notifier.backend().sent.borrow();
        assert_eq!(sent[0].message, "App was resumed.");
        assert_eq!(sent[0].title(), "Resumed");
    }

    #[test]
    fn test_notify_hotkey_failure_uses_error_text() {
        let notifier = notifier(RecordingBackend::default());
        let cause = std::io::Error::other("key Pause is already grabbed");
        notifier.notify_hotkey_failure(&cause);

        let sent = notifier.backend().sent.borrow();
        assert_eq!(sent[0].kind, NotificationKind::Issue);
        assert_eq!(sent[0].title(), "Issue");
        assert_eq!(sent[0].message, "key Pause is already grabbed");
    }

    #[test]
    fn test_failed_delivery_does_not_propagate() {
        let notifier = notifier(RecordingBackend::failing());

        notifier.notify_suspend("App");
        notifier.notify_resume("App");
        notifier.notify_hotkey_failure(&"grab failed");

        // Every call still reached the backend despite the failures
        assert_eq!(notifier.backend().sent.borrow().len(), 3);
    }

    #[test]
    fn test_failed_delivery_is_logged() {
        let notifier = notifier(RecordingBackend::failing());

        let logs = capture_warnings(|| notifier.notify_suspend("App"));

        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("Notification not delivered"), "logs: {logs}");
        assert!(logs.contains("daemon unavailable"), "logs: {logs}");
        assert!(logs.contains("Suspended"), "logs: {logs}");
    }

    #[test]
    fn test_successful_delivery_logs_no_warning() {
        let notifier = notifier(RecordingBackend::default());

        let logs = capture_warnings(|| notifier.notify_resume("App"));

        assert!(logs.is_empty(), "logs: {logs}");
    }

    #[test]
    fn test_resolve_icon_absolute_path_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let icon = dir.path().join("nyrna.png");
        assert_eq!(resolve_icon(&icon), icon);
    }

    #[test]
    fn test_resolve_icon_missing_passes_through() {
        let relative = Path::new("icons/definitely-not-here-8f3a.png");
        assert_eq!(resolve_icon(relative), relative.to_path_buf());
    }
}
