use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of bundled resources (icons).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Resource root (None = `resources` next to the executable).
    #[serde(default)]
    pub root: Option<PathBuf>,
}
