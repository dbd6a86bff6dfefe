use rclone_tray_core::{CoreResult, ports::ConfirmDialog};

use async_trait::async_trait;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use tracing::debug;

/// Native yes/no dialog.
pub struct RfdConfirmDialog {
    title: String,
}

impl RfdConfirmDialog {
    /// Dialog titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[async_trait]
impl ConfirmDialog for RfdConfirmDialog {
    async fn ask(&self, message: &str) -> CoreResult<bool> {
        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(&self.title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;

        debug!(?answer, "Confirmation answered");
        Ok(matches!(answer, MessageDialogResult::Yes))
    }
}
