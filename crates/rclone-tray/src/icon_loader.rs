use crate::{AppError, AppResult};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tray_icon::Icon;

/// Decoded icon pixels, safe to move between threads.
#[derive(Clone)]
pub struct RgbaIcon {
    /// RGBA8 pixel data, row-major.
    pub rgba: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl std::fmt::Debug for RgbaIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaIcon")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl RgbaIcon {
    /// Decode a PNG file.
    #[track_caller]
    pub fn from_png_file(path: &Path) -> AppResult<Self> {
        let img = image::open(path).map_err(|e| AppError::IconLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Ok(Self {
            rgba: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Decode on the blocking pool so the runtime threads stay free.
    pub async fn load(path: PathBuf) -> AppResult<Self> {
        tokio::task::spawn_blocking(move || Self::from_png_file(&path))
            .await
            .map_err(|e| AppError::TrayIconFailed {
                reason: format!("Icon decode task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    /// Convert into a native tray icon. UI thread only.
    #[track_caller]
    pub fn into_tray_icon(self) -> AppResult<Icon> {
        Icon::from_rgba(self.rgba, self.width, self.height).map_err(|e| {
            AppError::TrayIconFailed {
                reason: format!("Failed to create icon from RGBA: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
