//! User-facing error notification.

/// Shows a titled error to the user.
///
/// The desktop front end implements this with a native message box.
pub trait Notifier {
    fn error(&self, title: &str, message: &str);
}

/// Notifier that only writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, title: &str, message: &str) {
        tracing::error!("{}: {}", title, message);
    }
}
