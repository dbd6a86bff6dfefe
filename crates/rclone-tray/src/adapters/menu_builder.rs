use rclone_tray_core::{
    CoreResult, EmitAction, Menu, MenuAction, MenuItem, RebuildSignal, RestoreWindowAction,
    ids::CLOSE_APP_EVENT, ports::MenuBuilder, ports::WindowManager,
};

use std::sync::Arc;

use async_trait::async_trait;

/// Asks for a tray rebuild through the rebuild signal.
struct TriggerRebuildAction {
    signal: RebuildSignal,
}

#[async_trait]
impl MenuAction for TriggerRebuildAction {
    async fn invoke(&self) {
        // Errors are logged by the signal.
        let _ = self.signal.trigger().await;
    }
}

/// Menu shown in the default tray state.
pub struct DefaultMenuBuilder {
    display_name: String,
    windows: Arc<dyn WindowManager>,
}

impl DefaultMenuBuilder {
    /// Builder labelling items with `display_name`.
    pub fn new(display_name: impl Into<String>, windows: Arc<dyn WindowManager>) -> Self {
        Self {
            display_name: display_name.into(),
            windows,
        }
    }
}

#[async_trait]
impl MenuBuilder for DefaultMenuBuilder {
    async fn build_menu(&self) -> CoreResult<Menu> {
        let windows = &self.windows;

        Ok(Menu::new("default-menu")
            .with_item(MenuItem::new(
                "show-window",
                format!("Show {}", self.display_name),
                Arc::new(RestoreWindowAction::new(Arc::clone(windows))),
            ))
            .with_item(MenuItem::new(
                "refresh-tray",
                "Refresh tray",
                Arc::new(TriggerRebuildAction {
                    signal: RebuildSignal::new(Arc::clone(windows)),
                }),
            ))
            .with_separator()
            .with_item(MenuItem::new(
                "quit",
                "Quit",
                Arc::new(EmitAction::new(CLOSE_APP_EVENT, Arc::clone(windows))),
            )))
    }
}
