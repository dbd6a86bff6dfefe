//! Fixed identifiers shared between the tray and the host application.

/// Identifier of the single tray icon this process manages.
pub const TRAY_ID: &str = "main-tray";

/// Label of the window that receives tray events.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Event asking the main window to rebuild the tray.
pub const REBUILD_TRAY_EVENT: &str = "rebuild-tray";

/// Event asking the main window to shut the application down.
pub const CLOSE_APP_EVENT: &str = "close-app";

/// Root of all tray icon resources.
pub const ICON_ROOT: &str = "icons/favicon";

/// Base icon, legible on dark menu bars.
pub const DARK_ICON: &str = "icons/favicon/icon.png";

/// Icon variant for light menu bars.
pub const LIGHT_ICON: &str = "icons/favicon/icon-light.png";

/// Tooltip shown while the loading animation runs.
pub const LOADING_TOOLTIP: &str = "Loading...";

/// Id of the restricted menu installed while loading.
pub const LOADING_MENU_ID: &str = "loading-menu";

/// Id of the quit item in the loading menu.
pub const LOADING_QUIT_ITEM_ID: &str = "quit-loading";

/// Prompt shown before quitting while an operation is in progress.
pub const QUIT_WHILE_LOADING_PROMPT: &str =
    "An operation is in progress, are you sure you want to exit?";
