//! Collaborator interfaces the tray controller depends on.
//!
//! The host application implements each of these against the real platform;
//! tests implement them in memory.

mod crash_reporter;
mod dialog;
mod menu_builder;
mod resources;
mod theme_probe;
mod tray;
mod window;

pub use {
    crash_reporter::CrashReporter,
    dialog::ConfirmDialog,
    menu_builder::MenuBuilder,
    resources::ResourceResolver,
    theme_probe::ThemeProbe,
    tray::{PointerButton, TrayBackend, TrayEvent, TrayEventHandler, TrayHandle, TrayOptions},
    window::WindowManager,
};
