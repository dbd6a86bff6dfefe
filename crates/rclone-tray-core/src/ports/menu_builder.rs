use crate::{CoreResult, Menu};

use async_trait::async_trait;

/// Produces the full menu shown in the default tray state.
#[async_trait]
pub trait MenuBuilder: Send + Sync {
    /// Build a fresh menu from current application state.
    async fn build_menu(&self) -> CoreResult<Menu>;
}
