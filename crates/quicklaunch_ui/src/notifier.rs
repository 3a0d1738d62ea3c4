//! Native error dialogs.

use quicklaunch_core::platform::Notifier;

/// Shows each error in a modal OS message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn error(&self, title: &str, message: &str) {
        tracing::error!("{}: {}", title, message);
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
