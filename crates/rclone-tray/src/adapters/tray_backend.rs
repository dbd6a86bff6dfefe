use crate::{AppError, RgbaIcon, TrayDispatch, TrayRequest, UiBridge, UiCommand};

use rclone_tray_core::{
    CoreResult, Menu, TrayError,
    ports::{TrayBackend, TrayHandle, TrayOptions},
};

use std::{panic::Location, path::Path, sync::Arc};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::oneshot;
use tracing::{debug, instrument};

/// Creates the tray on the UI thread through the event loop proxy.
pub struct ProxyTrayBackend {
    ui: Arc<dyn UiBridge>,
    dispatch: Arc<TrayDispatch>,
}

impl ProxyTrayBackend {
    /// Backend sending through `ui`, routing events through `dispatch`.
    pub fn new(ui: Arc<dyn UiBridge>, dispatch: Arc<TrayDispatch>) -> Self {
        Self { ui, dispatch }
    }
}

#[async_trait]
impl TrayBackend for ProxyTrayBackend {
    #[instrument(skip(self))]
    async fn create_tray(&self, options: TrayOptions) -> CoreResult<Arc<dyn TrayHandle>> {
        let icon = RgbaIcon::load(options.icon.clone())
            .await
            .map_err(|e| creation_failed(&e))?;

        let (reply_tx, reply_rx) = oneshot::channel();
        let request = TrayRequest {
            id: options.id.clone(),
            icon,
            tooltip: options.tooltip.clone(),
            menu_on_left_click: options.menu_on_left_click,
        };

        self.ui
            .send(UiCommand::CreateTray {
                request,
                reply: reply_tx,
            })
            .map_err(|e| creation_failed(&e))?;

        match reply_rx.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(creation_failed(&e)),
            Err(_) => {
                return Err(TrayError::TrayCreationFailed {
                    reason: "UI thread dropped the creation request".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        // Only a created tray gets an event handler.
        self.dispatch.set_event_handler(options.on_event).await;

        Ok(Arc::new(ProxyTrayHandle {
            id: options.id,
            ui: Arc::clone(&self.ui),
            dispatch: Arc::clone(&self.dispatch),
        }))
    }
}

/// Tray handle whose mutations are applied by the UI thread.
pub struct ProxyTrayHandle {
    id: String,
    ui: Arc<dyn UiBridge>,
    dispatch: Arc<TrayDispatch>,
}

impl ProxyTrayHandle {
    #[track_caller]
    fn send(&self, command: UiCommand) -> CoreResult<()> {
        self.ui.send(command).map_err(|e| {
            debug!(error = %e, "UI thread gone");
            TrayError::HandleMissing {
                operation: "ui_send",
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}

#[async_trait]
impl TrayHandle for ProxyTrayHandle {
    fn id(&self) -> &str {
        &self.id
    }

    async fn set_icon(&self, icon: &Path) -> CoreResult<()> {
        let icon = RgbaIcon::load(icon.to_path_buf())
            .await
            .map_err(|e| TrayError::TrayUpdateFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.send(UiCommand::SetIcon(icon))
    }

    async fn set_tooltip(&self, tooltip: &str) -> CoreResult<()> {
        self.send(UiCommand::SetTooltip(tooltip.to_string()))
    }

    async fn set_menu(&self, menu: Menu) -> CoreResult<()> {
        self.send(UiCommand::SetMenu(menu.clone()))?;
        self.dispatch.install_menu(menu).await;
        Ok(())
    }
}

#[track_caller]
fn creation_failed(error: &AppError) -> TrayError {
    TrayError::TrayCreationFailed {
        reason: error.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
