use crate::{AppError, AppResult, RgbaIcon};

use rclone_tray_core::{Menu, ThemeMode};

use std::{panic::Location, sync::Mutex};

use error_location::ErrorLocation;
use tao::{event_loop::EventLoopProxy, window::Theme};
use tokio::sync::oneshot;
use tracing::warn;

/// Everything the UI thread needs to create the tray icon.
#[derive(Debug)]
pub struct TrayRequest {
    /// Tray identifier.
    pub id: String,
    /// Decoded initial icon.
    pub icon: RgbaIcon,
    /// Initial tooltip.
    pub tooltip: String,
    /// Open the menu on left click too.
    pub menu_on_left_click: bool,
}

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` and the main window (because `TrayIcon`
/// is `!Send`), so all tray and window mutations flow through this enum.
#[derive(Debug)]
pub enum UiCommand {
    /// Create the tray icon and report the outcome.
    CreateTray {
        /// Tray settings.
        request: TrayRequest,
        /// Receives the creation result.
        reply: oneshot::Sender<AppResult<()>>,
    },
    /// Replace the tray icon.
    SetIcon(RgbaIcon),
    /// Replace the tray tooltip.
    SetTooltip(String),
    /// Replace the tray menu.
    SetMenu(Menu),
    /// Show, unminimize and focus the main window.
    RestoreMainWindow,
    /// Report the main window's theme.
    QueryWindowTheme {
        /// Receives the theme.
        reply: oneshot::Sender<ThemeMode>,
    },
    /// Drop the tray and exit the event loop.
    Shutdown,
}

/// Delivers [`UiCommand`]s to the UI thread.
pub trait UiBridge: Send + Sync {
    /// Queue `command`. Fails once the event loop has exited.
    fn send(&self, command: UiCommand) -> AppResult<()>;
}

/// [`UiBridge`] over the tao event loop proxy.
pub struct EventLoopBridge {
    proxy: Mutex<EventLoopProxy<UiCommand>>,
}

impl EventLoopBridge {
    /// Bridge sending through `proxy`.
    pub fn new(proxy: EventLoopProxy<UiCommand>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl UiBridge for EventLoopBridge {
    #[track_caller]
    fn send(&self, command: UiCommand) -> AppResult<()> {
        let proxy = self.proxy.lock().map_err(|_| AppError::ChannelSendFailed {
            message: "UI proxy lock poisoned".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        proxy
            .send_event(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("UI event loop closed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Answer a [`UiCommand::QueryWindowTheme`] with the window's `theme`.
/// Returns whether the asker was still waiting.
pub fn answer_theme_query(reply: oneshot::Sender<ThemeMode>, theme: Theme) -> bool {
    let mode = match theme {
        Theme::Light => ThemeMode::Light,
        _ => ThemeMode::Dark,
    };

    if reply.send(mode).is_err() {
        warn!(?mode, "Window theme answer not received");
        return false;
    }

    true
}
