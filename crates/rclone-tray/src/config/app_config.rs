use crate::config::default_display_name;

use serde::{Deserialize, Serialize};

/// Application identity shown in the tray and window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name used as tooltip and window title.
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
        }
    }
}
