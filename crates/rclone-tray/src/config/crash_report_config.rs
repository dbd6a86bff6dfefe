use crate::config::default_crash_reports_enabled;

use serde::{Deserialize, Serialize};

/// Crash report collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrashReportConfig {
    /// Append tray failures to `crash-reports.log` in the data directory.
    #[serde(default = "default_crash_reports_enabled")]
    pub enabled: bool,
}

impl Default for CrashReportConfig {
    fn default() -> Self {
        Self {
            enabled: default_crash_reports_enabled(),
        }
    }
}
