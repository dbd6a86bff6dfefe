use crate::{
    AppCommand, AppResult, TrayDispatch, UiBridge, UiCommand,
    adapters::{
        BundleResourceResolver, DefaultMenuBuilder, LogCrashReporter, ProxyTrayBackend,
        RfdConfirmDialog, SystemThemeProbe, TaoWindowManager,
    },
    config::Config,
    dispatch::translate_tray_event,
};

use rclone_tray_core::{
    FRAME_COUNT, Platform, TrayCollaborators, TrayController, frame_resource_path,
    ids::{CLOSE_APP_EVENT, DARK_ICON, LIGHT_ICON, MAIN_WINDOW_LABEL, REBUILD_TRAY_EVENT},
    ports::{ResourceResolver, WindowManager},
};

use std::{ops::ControlFlow, sync::Arc, time::Duration};

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Main application state.
///
/// Runs on the async runtime thread and is the only owner of the tray
/// controller. Tray and window mutations travel to the main thread through
/// `ui` because `TrayIcon` is `!Send`.
pub struct App {
    pub(crate) controller: TrayController,
    pub(crate) dispatch: Arc<TrayDispatch>,
    pub(crate) ui: Arc<dyn UiBridge>,
    pub(crate) resources: Arc<dyn ResourceResolver>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
}

impl App {
    /// Wire the platform adapters into a tray controller.
    #[track_caller]
    pub(crate) fn build(
        config: &Config,
        ui: Arc<dyn UiBridge>,
        command_tx: mpsc::Sender<AppCommand>,
        command_rx: mpsc::Receiver<AppCommand>,
    ) -> AppResult<Self> {
        let dispatch = Arc::new(TrayDispatch::default());
        let display_name = config.app.display_name.clone();

        let windows: Arc<dyn WindowManager> =
            Arc::new(TaoWindowManager::new(Arc::clone(&ui), command_tx));
        let resources: Arc<dyn ResourceResolver> =
            Arc::new(BundleResourceResolver::from_config(&config.resources)?);

        let collaborators = TrayCollaborators {
            backend: Arc::new(ProxyTrayBackend::new(Arc::clone(&ui), Arc::clone(&dispatch))),
            menus: Arc::new(DefaultMenuBuilder::new(&display_name, Arc::clone(&windows))),
            windows,
            crash_reporter: Arc::new(LogCrashReporter),
            resources: Arc::clone(&resources),
            theme_probe: Arc::new(SystemThemeProbe::new(Arc::clone(&ui))),
            dialog: Arc::new(RfdConfirmDialog::new(&display_name)),
        };

        Ok(Self {
            controller: TrayController::new(Platform::current(), display_name, collaborators),
            dispatch,
            ui,
            resources,
            command_rx,
        })
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("rclone-tray starting");

        // Both native receivers are crossbeam channels with a blocking
        // recv(). Each forwarder stops at its next event once the matching
        // receiver below is dropped.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        let menu_forwarder = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let (icon_event_tx, mut icon_event_rx) = mpsc::channel(32);
        let icon_forwarder = tokio::task::spawn_blocking(move || {
            let receiver = TrayIconEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if icon_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        if let Err(e) = self.start_tray().await {
            warn!(error = %e, "Continuing without a tray icon");
        }

        loop {
            tokio::select! {
                Some(event) = menu_event_rx.recv() => {
                    self.handle_menu_event(event).await;
                }

                Some(event) = icon_event_rx.recv() => {
                    self.handle_tray_icon_event(event).await;
                }

                Some(cmd) = self.command_rx.recv() => {
                    if self.handle_command(cmd).await.is_break() {
                        break;
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(menu_event_rx);
        drop(icon_event_rx);

        Self::join_forwarder("menu", menu_forwarder).await;
        Self::join_forwarder("tray icon", icon_forwarder).await;

        self.request_ui_shutdown();
        info!("rclone-tray shut down successfully");

        Ok(())
    }

    /// Create the tray, keep it in the loading face while the icon set is
    /// checked, then switch to the default face.
    ///
    /// Fails only when the tray cannot be created.
    pub(crate) async fn start_tray(&mut self) -> AppResult<()> {
        self.controller.init().await?;

        // Errors below are logged by the controller.
        let _ = self.controller.show_loading().await;
        self.preflight_icons().await;
        let _ = self.controller.show_default().await;

        Ok(())
    }

    /// Resolve every icon the tray may show and report the missing ones.
    #[instrument(skip(self))]
    async fn preflight_icons(&self) {
        let paths = (0..=FRAME_COUNT)
            .map(frame_resource_path)
            .chain([DARK_ICON.to_string(), LIGHT_ICON.to_string()]);

        let mut missing = 0usize;
        for path in paths {
            if let Err(e) = self.resources.resolve_resource(&path).await {
                warn!(path = %path, error = %e, "Tray icon resource missing");
                missing += 1;
            }
        }

        if missing == 0 {
            info!("All tray icon resources present");
        } else {
            warn!(missing, "Some tray icon resources are missing");
        }
    }

    /// Act on one command for the main window. Breaks once the app should
    /// shut down; events for any other window are dropped.
    pub(crate) async fn handle_command(&mut self, cmd: AppCommand) -> ControlFlow<()> {
        let AppCommand::WindowEvent { label, event } = cmd;

        if label != MAIN_WINDOW_LABEL {
            debug!(
                label = %label,
                event = %event,
                "Event for unknown window dropped"
            );
            return ControlFlow::Continue(());
        }

        match event.as_str() {
            CLOSE_APP_EVENT => {
                info!("Close requested");
                return ControlFlow::Break(());
            }
            REBUILD_TRAY_EVENT => {
                // Logged by the controller.
                let _ = self.controller.show_default().await;
            }
            _ => debug!(event = %event, "Unhandled window event"),
        }

        ControlFlow::Continue(())
    }

    /// Ask the UI thread to drop the tray and leave its event loop.
    pub(crate) fn request_ui_shutdown(&self) {
        if let Err(e) = self.ui.send(UiCommand::Shutdown) {
            debug!(error = %e, "UI thread already gone");
        }
    }

    /// Run the action behind a clicked menu item.
    ///
    /// Actions may wait on the user (the quit confirmation), so they run as
    /// their own task.
    #[instrument(skip(self, event), fields(item_id = %event.id.0))]
    async fn handle_menu_event(&self, event: MenuEvent) {
        match self.dispatch.menu_action(&event.id.0).await {
            Some(action) => {
                tokio::spawn(async move { action.invoke().await });
            }
            None => debug!("No action for menu item"),
        }
    }

    async fn handle_tray_icon_event(&self, event: TrayIconEvent) {
        let Some(event) = translate_tray_event(&event) else {
            return;
        };

        if let Some(handler) = self.dispatch.event_handler().await {
            tokio::spawn(async move { handler.on_event(event).await });
        }
    }

    async fn join_forwarder(name: &str, handle: JoinHandle<()>) {
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => info!(name, "Event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(name, error = ?e, "Event forwarder task panicked"),
            Err(_) => info!(
                name,
                "Event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }
    }
}
