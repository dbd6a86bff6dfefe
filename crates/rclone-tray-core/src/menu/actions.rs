use crate::{
    ids::{CLOSE_APP_EVENT, MAIN_WINDOW_LABEL},
    menu::MenuAction,
    ports::{ConfirmDialog, WindowManager},
};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

/// Asks for confirmation, then emits `close-app` to the main window.
pub struct ConfirmQuitAction {
    prompt: String,
    dialog: Arc<dyn ConfirmDialog>,
    windows: Arc<dyn WindowManager>,
}

impl ConfirmQuitAction {
    /// Quit action guarded by `prompt`.
    pub fn new(
        prompt: impl Into<String>,
        dialog: Arc<dyn ConfirmDialog>,
        windows: Arc<dyn WindowManager>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            dialog,
            windows,
        }
    }
}

#[async_trait]
impl MenuAction for ConfirmQuitAction {
    #[instrument(skip(self))]
    async fn invoke(&self) {
        let confirmed = match self.dialog.ask(&self.prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, "Quit confirmation failed");
                return;
            }
        };

        if !confirmed {
            debug!("Quit cancelled by user");
            return;
        }

        info!("Quit confirmed while loading");
        if let Err(e) = self.windows.emit(MAIN_WINDOW_LABEL, CLOSE_APP_EVENT).await {
            error!(error = %e, "Failed to request application close");
        }
    }
}

/// Emits a fixed event to the main window.
pub struct EmitAction {
    event: String,
    windows: Arc<dyn WindowManager>,
}

impl EmitAction {
    /// Action emitting `event` on click.
    pub fn new(event: impl Into<String>, windows: Arc<dyn WindowManager>) -> Self {
        Self {
            event: event.into(),
            windows,
        }
    }
}

#[async_trait]
impl MenuAction for EmitAction {
    async fn invoke(&self) {
        if let Err(e) = self.windows.emit(MAIN_WINDOW_LABEL, &self.event).await {
            error!(event = %self.event, error = %e, "Menu action failed to emit");
        }
    }
}

/// Brings the main window back to the front.
pub struct RestoreWindowAction {
    windows: Arc<dyn WindowManager>,
}

impl RestoreWindowAction {
    /// Restore action for `windows`.
    pub fn new(windows: Arc<dyn WindowManager>) -> Self {
        Self { windows }
    }
}

#[async_trait]
impl MenuAction for RestoreWindowAction {
    async fn invoke(&self) {
        if let Err(e) = self.windows.reset_main_window().await {
            error!(error = %e, "Failed to restore main window");
        }
    }
}
