/// Commands delivered to the app loop on the async runtime.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// An event addressed to a window, handled by window-side logic.
    WindowEvent {
        /// Target window label.
        label: String,
        /// Event name, e.g. `rebuild-tray`.
        event: String,
    },
}
