use crate::{CoreResult, ThemeMode};

use async_trait::async_trait;

/// Platform queries for the active color scheme.
#[async_trait]
pub trait ThemeProbe: Send + Sync {
    /// Ask the host for the system theme. Returns the raw host value,
    /// normally `"dark"` or `"light"`.
    async fn host_theme(&self) -> CoreResult<String>;

    /// Read the theme of the active window.
    async fn window_theme(&self) -> CoreResult<ThemeMode>;
}
