mod app_config;
#[allow(clippy::module_inception)]
mod config;
mod crash_report_config;
mod resources_config;

pub(crate) use {
    app_config::AppConfig, config::Config, crash_report_config::CrashReportConfig,
    resources_config::ResourcesConfig,
};

pub(crate) const DEFAULT_DISPLAY_NAME: &str = "Rclone";
pub(crate) const DEFAULT_CRASH_REPORTS_ENABLED: bool = true;

pub(crate) fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

pub(crate) fn default_crash_reports_enabled() -> bool {
    DEFAULT_CRASH_REPORTS_ENABLED
}
