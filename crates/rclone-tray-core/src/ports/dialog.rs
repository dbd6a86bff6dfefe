use crate::CoreResult;

use async_trait::async_trait;

/// Yes/no confirmation shown to the user.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// Ask `message` and suspend until the user answers. `true` means yes.
    async fn ask(&self, message: &str) -> CoreResult<bool>;
}
