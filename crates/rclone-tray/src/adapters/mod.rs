//! Platform implementations of the core ports.

mod crash_reporter;
mod dialog;
mod menu_builder;
mod resources;
mod theme_probe;
mod tray_backend;
mod window_manager;

pub(crate) use {
    crash_reporter::{LogCrashReporter, crash_report_layer},
    dialog::RfdConfirmDialog,
    menu_builder::DefaultMenuBuilder,
    resources::BundleResourceResolver,
    theme_probe::SystemThemeProbe,
    tray_backend::ProxyTrayBackend,
    window_manager::TaoWindowManager,
};
