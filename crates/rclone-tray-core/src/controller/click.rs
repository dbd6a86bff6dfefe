use crate::ports::{PointerButton, TrayEvent, TrayEventHandler, WindowManager};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

/// Restores the main window when the tray icon gets a primary click.
pub struct RestoreOnPrimaryClick {
    windows: Arc<dyn WindowManager>,
}

impl RestoreOnPrimaryClick {
    /// Handler restoring windows from `windows`.
    pub fn new(windows: Arc<dyn WindowManager>) -> Self {
        Self { windows }
    }
}

#[async_trait]
impl TrayEventHandler for RestoreOnPrimaryClick {
    async fn on_event(&self, event: TrayEvent) {
        if event != (TrayEvent::Click {
            button: PointerButton::Left,
        }) {
            return;
        }

        debug!(?event, "Tray clicked");
        if let Err(e) = self.windows.reset_main_window().await {
            error!(error = %e, "Failed to restore main window from tray");
        }
    }
}
