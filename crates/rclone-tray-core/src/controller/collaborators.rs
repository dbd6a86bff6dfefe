use crate::ports::{
    ConfirmDialog, CrashReporter, MenuBuilder, ResourceResolver, ThemeProbe, TrayBackend,
    WindowManager,
};

use std::sync::Arc;

/// External services the tray controller is built from.
#[derive(Clone)]
pub struct TrayCollaborators {
    /// Creates the platform tray icon.
    pub backend: Arc<dyn TrayBackend>,
    /// Builds the default-state menu.
    pub menus: Arc<dyn MenuBuilder>,
    /// Window lookup, restore and event delivery.
    pub windows: Arc<dyn WindowManager>,
    /// Receives initialization failures.
    pub crash_reporter: Arc<dyn CrashReporter>,
    /// Resolves icon resources to files.
    pub resources: Arc<dyn ResourceResolver>,
    /// Reports the active theme.
    pub theme_probe: Arc<dyn ThemeProbe>,
    /// Asks the user before quitting mid-operation.
    pub dialog: Arc<dyn ConfirmDialog>,
}
