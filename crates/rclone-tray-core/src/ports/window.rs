use crate::CoreResult;

use async_trait::async_trait;

/// Access to the application's windows.
#[async_trait]
pub trait WindowManager: Send + Sync {
    /// Restore, show and focus the main window.
    async fn reset_main_window(&self) -> CoreResult<()>;

    /// Labels of every open window.
    async fn window_labels(&self) -> CoreResult<Vec<String>>;

    /// Deliver a named event to the window with `label`.
    async fn emit(&self, label: &str, event: &str) -> CoreResult<()>;
}
