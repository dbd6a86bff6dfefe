//! Native tray icon owned by the main thread.
//!
//! Turns [`TrayRequest`]s and core [`Menu`]s into `tray-icon` objects. Every
//! call here must happen on the thread running the event loop.

use crate::{AppError, AppResult, RgbaIcon, TrayRequest};

use rclone_tray_core::{Menu, MenuEntry};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::menu::{Menu as NativeMenu, MenuItem as NativeMenuItem, PredefinedMenuItem};
use tray_icon::{TrayIcon, TrayIconBuilder};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
}

impl TrayManager {
    /// Create the tray icon described by `request`.
    #[track_caller]
    #[instrument(skip(request), fields(tray_id = %request.id))]
    pub fn new(request: TrayRequest) -> AppResult<Self> {
        let icon = request.icon.into_tray_icon()?;

        let tray_icon = TrayIconBuilder::new()
            .with_id(request.id.as_str())
            .with_icon(icon)
            .with_tooltip(&request.tooltip)
            .with_menu_on_left_click(request.menu_on_left_click)
            .build()
            .map_err(|e| AppError::TrayIconFailed {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self { tray_icon })
    }

    /// Replace the icon image.
    #[track_caller]
    pub fn set_icon(&mut self, icon: RgbaIcon) -> AppResult<()> {
        let icon = icon.into_tray_icon()?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayIconFailed {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Replace the tooltip.
    #[track_caller]
    pub fn set_tooltip(&mut self, tooltip: &str) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayIconFailed {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Replace the context menu. Item ids are kept so clicks can be routed
    /// back to the core menu.
    #[track_caller]
    #[instrument(skip(self, menu), fields(menu_id = %menu.id))]
    pub fn set_menu(&mut self, menu: &Menu) -> AppResult<()> {
        let native = Self::native_menu(menu)?;
        self.tray_icon.set_menu(Some(Box::new(native)));
        debug!("Tray menu replaced");
        Ok(())
    }

    #[track_caller]
    fn native_menu(menu: &Menu) -> AppResult<NativeMenu> {
        let native = NativeMenu::new();

        for entry in &menu.entries {
            let appended = match entry {
                MenuEntry::Item(item) => native.append(&NativeMenuItem::with_id(
                    item.id.as_str(),
                    &item.text,
                    item.enabled,
                    None,
                )),
                MenuEntry::Separator => native.append(&PredefinedMenuItem::separator()),
            };

            appended.map_err(|e| AppError::TrayIconFailed {
                reason: format!("Failed to add menu entry: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        Ok(native)
    }
}
