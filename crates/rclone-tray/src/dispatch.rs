//! Routes native tray events back to core handlers.
//!
//! The UI thread only knows menu ids; the actions behind them live here,
//! on the async side.

use rclone_tray_core::{
    Menu, MenuAction,
    ports::{PointerButton, TrayEvent, TrayEventHandler},
};

use std::sync::Arc;

use tokio::sync::Mutex;
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};

/// Installed menu and tray event handler.
#[derive(Default)]
pub struct TrayDispatch {
    menu: Mutex<Option<Menu>>,
    handler: Mutex<Option<Arc<dyn TrayEventHandler>>>,
}

impl TrayDispatch {
    /// Remember `menu` as the one currently shown.
    pub async fn install_menu(&self, menu: Menu) {
        *self.menu.lock().await = Some(menu);
    }

    /// Action behind a clicked menu id of the current menu.
    pub async fn menu_action(&self, item_id: &str) -> Option<Arc<dyn MenuAction>> {
        self.menu.lock().await.as_ref()?.action(item_id)
    }

    /// Register the handler for tray pointer events.
    pub async fn set_event_handler(&self, handler: Arc<dyn TrayEventHandler>) {
        *self.handler.lock().await = Some(handler);
    }

    /// Handler for tray pointer events, once the tray exists.
    pub async fn event_handler(&self) -> Option<Arc<dyn TrayEventHandler>> {
        self.handler.lock().await.clone()
    }
}

/// Translate a native tray event. Button presses are ignored; a click
/// counts on release.
pub fn translate_tray_event(event: &TrayIconEvent) -> Option<TrayEvent> {
    match event {
        TrayIconEvent::Click {
            button,
            button_state: MouseButtonState::Up,
            ..
        } => Some(TrayEvent::Click {
            button: translate_button(*button),
        }),
        TrayIconEvent::DoubleClick { button, .. } => Some(TrayEvent::DoubleClick {
            button: translate_button(*button),
        }),
        TrayIconEvent::Enter { .. } => Some(TrayEvent::Enter),
        TrayIconEvent::Leave { .. } => Some(TrayEvent::Leave),
        _ => None,
    }
}

fn translate_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    }
}
