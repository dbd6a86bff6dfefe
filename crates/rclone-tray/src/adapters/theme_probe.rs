use crate::{UiBridge, UiCommand};

use rclone_tray_core::{CoreResult, ThemeMode, TrayError, ports::ThemeProbe};

use std::{panic::Location, sync::Arc};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::oneshot;

/// Theme from `dark-light` (host) or the tao main window.
pub struct SystemThemeProbe {
    ui: Arc<dyn UiBridge>,
}

impl SystemThemeProbe {
    /// Probe asking the UI thread through `ui` for window themes.
    pub fn new(ui: Arc<dyn UiBridge>) -> Self {
        Self { ui }
    }
}

#[async_trait]
impl ThemeProbe for SystemThemeProbe {
    async fn host_theme(&self) -> CoreResult<String> {
        let detected = tokio::task::spawn_blocking(dark_light::detect)
            .await
            .map_err(|e| probe_failed(format!("Theme detection task failed: {}", e)))?
            .map_err(|e| probe_failed(e.to_string()))?;

        Ok(match detected {
            dark_light::Mode::Dark => "dark",
            dark_light::Mode::Light => "light",
            dark_light::Mode::Unspecified => "",
        }
        .to_string())
    }

    async fn window_theme(&self) -> CoreResult<ThemeMode> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.ui
            .send(UiCommand::QueryWindowTheme { reply: reply_tx })
            .map_err(|e| probe_failed(e.to_string()))?;

        reply_rx
            .await
            .map_err(|_| probe_failed("UI thread dropped the theme query".to_string()))
    }
}

#[track_caller]
fn probe_failed(reason: String) -> TrayError {
    TrayError::ThemeProbeFailed {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
