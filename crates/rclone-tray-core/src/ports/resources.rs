use crate::CoreResult;

use std::path::PathBuf;

use async_trait::async_trait;

/// Maps bundled resource paths to files on disk.
#[async_trait]
pub trait ResourceResolver: Send + Sync {
    /// Resolve `relative` (e.g. `icons/favicon/icon.png`) to an absolute path.
    async fn resolve_resource(&self, relative: &str) -> CoreResult<PathBuf>;
}
