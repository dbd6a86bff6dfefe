//! rclone-tray: system tray presence for the Rclone desktop application.

mod adapters;
mod app;
mod app_command;
mod config;
mod dispatch;
mod error;
mod icon_loader;
mod tray_manager;
mod ui_command;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    dispatch::TrayDispatch,
    error::{AppError, Result as AppResult},
    icon_loader::RgbaIcon,
    tray_manager::TrayManager,
    ui_command::{EventLoopBridge, TrayRequest, UiBridge, UiCommand, answer_theme_query},
};

use crate::{adapters::crash_report_layer, config::Config};

use rclone_tray_core::ids::{MAIN_WINDOW_LABEL, REBUILD_TRAY_EVENT};

use std::sync::Arc;

use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::{Window, WindowBuilder},
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "rclone_tray=debug,rclone_tray_core=debug";

/// Application entry point.
fn main() {
    let config = Config::load();

    let crash_layer = match (&config, Config::data_dir()) {
        (Ok(config), Ok(dir)) => crash_report_layer(&dir, config.crash_reports.enabled),
        _ => None,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer().with_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
            ),
        )
        .with(crash_layer)
        .init();

    let config = match config {
        Ok(c) => {
            info!(display_name = %c.app.display_name, "Configuration loaded");
            c
        }
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<UiCommand>::with_user_event().build();

    // Hidden until restored from the tray; closing only hides it again.
    let window = match WindowBuilder::new()
        .with_title(&config.app.display_name)
        .with_visible(false)
        .build(&event_loop)
    {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create main window: {:?}", e);
            std::process::exit(1);
        }
    };

    let ui: Arc<dyn UiBridge> = Arc::new(EventLoopBridge::new(event_loop.create_proxy()));
    let (command_tx, command_rx) = mpsc::channel(32);
    let theme_tx = command_tx.clone();

    let mut startup = Some((config, ui, command_tx, command_rx));

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager: Option<TrayManager> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let Some((config, ui, command_tx, command_rx)) = startup.take() else {
                    return;
                };

                // Spawn tokio runtime on separate thread.
                // TrayManager and the window stay on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = match App::build(&config, Arc::clone(&ui), command_tx, command_rx)
                        {
                            Ok(app) => app,
                            Err(e) => {
                                error!(error = ?e, "Failed to start application");
                                let _ = ui.send(UiCommand::Shutdown);
                                return;
                            }
                        };

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            Event::UserEvent(cmd) => {
                if apply_ui_command(cmd, &mut tray_manager, &window) {
                    tray_manager = None;
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                window.set_visible(false);
            }
            Event::WindowEvent {
                event: WindowEvent::ThemeChanged(theme),
                ..
            } => {
                debug!(?theme, "System theme changed");
                let rebuild = AppCommand::WindowEvent {
                    label: MAIN_WINDOW_LABEL.to_string(),
                    event: REBUILD_TRAY_EVENT.to_string(),
                };
                if let Err(e) = theme_tx.try_send(rebuild) {
                    warn!(error = %e, "Failed to request tray rebuild after theme change");
                }
            }
            _ => {}
        }
    });
}

/// Apply one command on the UI thread. Returns `true` once the event loop
/// should exit.
fn apply_ui_command(
    cmd: UiCommand,
    tray_manager: &mut Option<TrayManager>,
    window: &Window,
) -> bool {
    match cmd {
        UiCommand::CreateTray { request, reply } => {
            let result = TrayManager::new(request).map(|manager| {
                *tray_manager = Some(manager);
            });
            if reply.send(result).is_err() {
                warn!("Tray creation result not received");
            }
        }
        UiCommand::SetIcon(icon) => {
            if let Some(manager) = tray_manager.as_mut() {
                if let Err(e) = manager.set_icon(icon) {
                    error!(error = ?e, "Failed to update tray icon");
                }
            }
        }
        UiCommand::SetTooltip(tooltip) => {
            if let Some(manager) = tray_manager.as_mut() {
                if let Err(e) = manager.set_tooltip(&tooltip) {
                    error!(error = ?e, "Failed to update tray tooltip");
                }
            }
        }
        UiCommand::SetMenu(menu) => {
            if let Some(manager) = tray_manager.as_mut() {
                if let Err(e) = manager.set_menu(&menu) {
                    error!(error = ?e, "Failed to update tray menu");
                }
            }
        }
        UiCommand::RestoreMainWindow => {
            window.set_visible(true);
            window.set_minimized(false);
            window.set_focus();
            debug!("Main window restored");
        }
        UiCommand::QueryWindowTheme { reply } => {
            answer_theme_query(reply, window.theme());
        }
        UiCommand::Shutdown => {
            info!("UI shutting down");
            return true;
        }
    }

    false
}
