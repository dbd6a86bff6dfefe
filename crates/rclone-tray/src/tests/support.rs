//! Test doubles for the UI thread and scratch files.

use crate::{AppError, AppResult, UiBridge, UiCommand};

use rclone_tray_core::ThemeMode;

use std::{
    panic::Location,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use error_location::ErrorLocation;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Plays the UI thread: records each command and answers the ones with a
/// reply channel.
pub(crate) struct RecordingBridge {
    closed: bool,
    theme: ThemeMode,
    sent: Mutex<Vec<String>>,
    tooltips: Mutex<Vec<String>>,
    menus: Mutex<Vec<String>>,
}

impl RecordingBridge {
    pub(crate) fn new() -> Self {
        Self::with_theme(ThemeMode::Dark)
    }

    pub(crate) fn with_theme(theme: ThemeMode) -> Self {
        Self {
            closed: false,
            theme,
            sent: Mutex::new(Vec::new()),
            tooltips: Mutex::new(Vec::new()),
            menus: Mutex::new(Vec::new()),
        }
    }

    /// Bridge whose event loop has already exited.
    pub(crate) fn closed() -> Self {
        Self {
            closed: true,
            ..Self::new()
        }
    }

    /// Command names in send order.
    pub(crate) fn sent(&self) -> Vec<String> {
        lock(&self.sent).clone()
    }

    pub(crate) fn tooltips(&self) -> Vec<String> {
        lock(&self.tooltips).clone()
    }

    /// Ids of the menus sent.
    pub(crate) fn menus(&self) -> Vec<String> {
        lock(&self.menus).clone()
    }
}

impl UiBridge for RecordingBridge {
    fn send(&self, command: UiCommand) -> AppResult<()> {
        if self.closed {
            return Err(AppError::ChannelSendFailed {
                message: "event loop closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let name = match command {
            UiCommand::CreateTray { request, reply } => {
                let _ = reply.send(Ok(()));
                format!("CreateTray:{}", request.id)
            }
            UiCommand::SetIcon(icon) => format!("SetIcon:{}x{}", icon.width, icon.height),
            UiCommand::SetTooltip(tooltip) => {
                lock(&self.tooltips).push(tooltip);
                "SetTooltip".to_string()
            }
            UiCommand::SetMenu(menu) => {
                lock(&self.menus).push(menu.id);
                "SetMenu".to_string()
            }
            UiCommand::RestoreMainWindow => "RestoreMainWindow".to_string(),
            UiCommand::QueryWindowTheme { reply } => {
                let _ = reply.send(self.theme);
                "QueryWindowTheme".to_string()
            }
            UiCommand::Shutdown => "Shutdown".to_string(),
        };

        lock(&self.sent).push(name);
        Ok(())
    }
}

/// Fresh, empty scratch directory unique to `name`.
#[allow(clippy::unwrap_used)]
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rclone-tray-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a `width` x `height` PNG at `path`, creating parent directories.
#[allow(clippy::unwrap_used)]
pub(crate) fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbaImage::new(width, height).save(path).unwrap();
}
