//! rclone-tray Core Library
//!
//! Platform-free tray state controller: theme-aware icon selection, the
//! loading animation, and the rebuild signal. Every platform service is a
//! trait in [`ports`], implemented by the host application.
//!
//! # Example
//!
//! ```no_run
//! use rclone_tray_core::{CoreResult, Platform, TrayCollaborators, TrayController};
//!
//! async fn run(collaborators: TrayCollaborators) -> CoreResult<()> {
//!     let mut tray = TrayController::new(Platform::current(), "Rclone", collaborators);
//!
//!     tray.init().await?;
//!     tray.show_loading().await?;
//!     // ... long-running work ...
//!     tray.show_default().await?;
//!     Ok(())
//! }
//! ```

mod animation;
mod controller;
mod error;
mod icon;
pub mod ids;
mod menu;
mod platform;
pub mod ports;
mod signal;
mod theme;

pub use {
    animation::{AnimationDriver, FRAME_COUNT, FRAME_DELAY},
    controller::{RestoreOnPrimaryClick, TrayCollaborators, TrayController, TrayState},
    error::Result as CoreResult,
    error::TrayError,
    icon::{IconResolver, frame_file_name, frame_resource_path, wrap_frame_index},
    menu::{ConfirmQuitAction, EmitAction, Menu, MenuAction, MenuEntry, MenuItem, RestoreWindowAction},
    platform::Platform,
    signal::RebuildSignal,
    theme::ThemeMode,
};
