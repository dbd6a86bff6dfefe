use crate::{AppResult, config::ResourcesConfig};

use rclone_tray_core::{CoreResult, TrayError, ports::ResourceResolver};

use std::{
    panic::Location,
    path::{Component, Path, PathBuf},
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tracing::info;

/// Resolves resources inside one bundle directory.
pub struct BundleResourceResolver {
    root: PathBuf,
}

impl BundleResourceResolver {
    /// Resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Configured root, or `resources` next to the executable.
    #[track_caller]
    pub fn from_config(config: &ResourcesConfig) -> AppResult<Self> {
        let root = match &config.root {
            Some(root) => root.clone(),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent()
                    .map(|dir| dir.join("resources"))
                    .unwrap_or_else(|| PathBuf::from("resources"))
            }
        };

        info!(root = ?root, "Resource root");
        Ok(Self::new(root))
    }
}

#[async_trait]
impl ResourceResolver for BundleResourceResolver {
    async fn resolve_resource(&self, relative: &str) -> CoreResult<PathBuf> {
        let relative_path = Path::new(relative);

        let escapes = relative_path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(unresolved(relative, "path leaves the resource root"));
        }

        let path = self.root.join(relative_path);
        if !path.is_file() {
            return Err(unresolved(relative, format!("no file at {}", path.display())));
        }

        Ok(path)
    }
}

#[track_caller]
fn unresolved(relative: &str, reason: impl Into<String>) -> TrayError {
    TrayError::ResourceResolutionFailed {
        path: relative.to_string(),
        reason: reason.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
