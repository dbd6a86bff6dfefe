use crate::{AppCommand, UiBridge, UiCommand};

use rclone_tray_core::{CoreResult, TrayError, ids::MAIN_WINDOW_LABEL, ports::WindowManager};

use std::{panic::Location, sync::Arc};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::debug;

/// The single `main` window owned by the UI thread.
///
/// Events emitted to it are handled by the app loop, which plays the part
/// of window-side logic.
pub struct TaoWindowManager {
    ui: Arc<dyn UiBridge>,
    command_tx: mpsc::Sender<AppCommand>,
}

impl TaoWindowManager {
    /// Window manager restoring through `ui` and delivering events to `command_tx`.
    pub fn new(ui: Arc<dyn UiBridge>, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { ui, command_tx }
    }
}

#[async_trait]
impl WindowManager for TaoWindowManager {
    async fn reset_main_window(&self) -> CoreResult<()> {
        self.ui
            .send(UiCommand::RestoreMainWindow)
            .map_err(|_| TrayError::WindowNotFound {
                label: MAIN_WINDOW_LABEL.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn window_labels(&self) -> CoreResult<Vec<String>> {
        Ok(vec![MAIN_WINDOW_LABEL.to_string()])
    }

    async fn emit(&self, label: &str, event: &str) -> CoreResult<()> {
        if label != MAIN_WINDOW_LABEL {
            return Err(TrayError::WindowNotFound {
                label: label.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.command_tx
            .send(AppCommand::WindowEvent {
                label: label.to_string(),
                event: event.to_string(),
            })
            .await
            .map_err(|e| TrayError::EventEmitFailed {
                event: event.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(label, event, "Window event emitted");
        Ok(())
    }
}
