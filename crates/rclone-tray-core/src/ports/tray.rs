use crate::{CoreResult, Menu};

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;

/// Mouse button involved in a tray event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
}

/// Pointer interaction with the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// A completed click.
    Click {
        /// Button that was clicked.
        button: PointerButton,
    },
    /// A double click.
    DoubleClick {
        /// Button that was double clicked.
        button: PointerButton,
    },
    /// Pointer entered the icon area.
    Enter,
    /// Pointer left the icon area.
    Leave,
}

/// Receives pointer events for the tray icon.
#[async_trait]
pub trait TrayEventHandler: Send + Sync {
    /// Handle one tray event. Must not fail; log instead.
    async fn on_event(&self, event: TrayEvent);
}

/// Everything needed to create the tray icon.
#[derive(Clone)]
pub struct TrayOptions {
    /// Tray identifier.
    pub id: String,
    /// Absolute path of the initial icon.
    pub icon: PathBuf,
    /// Initial tooltip.
    pub tooltip: String,
    /// Open the menu on a left click as well as a right click.
    pub menu_on_left_click: bool,
    /// Handler for pointer events on the icon.
    pub on_event: Arc<dyn TrayEventHandler>,
}

impl fmt::Debug for TrayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrayOptions")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("tooltip", &self.tooltip)
            .field("menu_on_left_click", &self.menu_on_left_click)
            .finish_non_exhaustive()
    }
}

/// Creates the platform tray icon.
#[async_trait]
pub trait TrayBackend: Send + Sync {
    /// Create the tray icon. On error no handle exists.
    async fn create_tray(&self, options: TrayOptions) -> CoreResult<Arc<dyn TrayHandle>>;
}

/// Live tray icon owned by the controller after a successful `init`.
#[async_trait]
pub trait TrayHandle: Send + Sync {
    /// Tray identifier.
    fn id(&self) -> &str;

    /// Replace the icon with the image at `icon`.
    async fn set_icon(&self, icon: &Path) -> CoreResult<()>;

    /// Replace the tooltip.
    async fn set_tooltip(&self, tooltip: &str) -> CoreResult<()>;

    /// Replace the context menu.
    async fn set_menu(&self, menu: Menu) -> CoreResult<()>;
}
