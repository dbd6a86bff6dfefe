//! Tray state machine.
//!
//! Owns the one tray handle and the loading animation. Operations never
//! panic and never leave two animation timers alive; every failure is logged
//! where it happens and returned for callers that care.

use crate::{
    CoreResult, Platform, TrayError,
    animation::AnimationDriver,
    controller::{RestoreOnPrimaryClick, TrayCollaborators, TrayState},
    icon::{IconResolver, LOADING_ICON},
    ids::{
        LOADING_MENU_ID, LOADING_QUIT_ITEM_ID, LOADING_TOOLTIP, QUIT_WHILE_LOADING_PROMPT, TRAY_ID,
    },
    menu::{ConfirmQuitAction, Menu, MenuItem},
    ports::{
        ConfirmDialog, CrashReporter, MenuBuilder, TrayBackend, TrayHandle, TrayOptions,
        WindowManager,
    },
    signal::RebuildSignal,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};

/// Coordinates the tray icon, its menu and the loading animation.
pub struct TrayController {
    platform: Platform,
    display_name: String,
    state: TrayState,
    tray: Option<Arc<dyn TrayHandle>>,
    icons: IconResolver,
    animation: AnimationDriver,
    signal: RebuildSignal,
    backend: Arc<dyn TrayBackend>,
    menus: Arc<dyn MenuBuilder>,
    windows: Arc<dyn WindowManager>,
    crash_reporter: Arc<dyn CrashReporter>,
    dialog: Arc<dyn ConfirmDialog>,
}

impl TrayController {
    /// Uninitialized controller. `display_name` becomes the default tooltip.
    pub fn new(
        platform: Platform,
        display_name: impl Into<String>,
        collaborators: TrayCollaborators,
    ) -> Self {
        let TrayCollaborators {
            backend,
            menus,
            windows,
            crash_reporter,
            resources,
            theme_probe,
            dialog,
        } = collaborators;

        Self {
            platform,
            display_name: display_name.into(),
            state: TrayState::Uninitialized,
            tray: None,
            icons: IconResolver::new(platform, theme_probe, resources),
            animation: AnimationDriver::new(),
            signal: RebuildSignal::new(Arc::clone(&windows)),
            backend,
            menus,
            windows,
            crash_reporter,
            dialog,
        }
    }

    /// Current state.
    pub fn state(&self) -> TrayState {
        self.state
    }

    /// Whether the loading animation is running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Tray handle obtained by [`init`](Self::init), if it succeeded.
    pub fn tray(&self) -> Option<&Arc<dyn TrayHandle>> {
        self.tray.as_ref()
    }

    /// Create the tray icon with the theme icon and application tooltip.
    ///
    /// Meant to run once. A second call keeps the existing icon. On failure
    /// the error is sent to the crash reporter and the controller stays
    /// [`TrayState::Uninitialized`]; no retry happens.
    #[instrument(skip(self))]
    pub async fn init(&mut self) -> CoreResult<()> {
        if let Some(tray) = &self.tray {
            warn!(tray_id = tray.id(), "Tray already initialized");
            return Ok(());
        }

        info!("Initializing tray");

        match self.create_tray().await {
            Ok(tray) => {
                info!(tray_id = tray.id(), "Tray created");
                self.tray = Some(tray);
                self.state = TrayState::Default;
                Ok(())
            }
            Err(e) => {
                self.crash_reporter.capture_error(&e);
                error!(error = %e, "Failed to create tray");
                Err(e)
            }
        }
    }

    async fn create_tray(&self) -> CoreResult<Arc<dyn TrayHandle>> {
        let icon = self.icons.resolve_icon().await?;

        let options = TrayOptions {
            id: TRAY_ID.to_string(),
            icon,
            tooltip: self.display_name.clone(),
            menu_on_left_click: true,
            on_event: Arc::new(RestoreOnPrimaryClick::new(Arc::clone(&self.windows))),
        };

        self.backend.create_tray(options).await
    }

    /// Switch to the animated loading face with a quit-only menu.
    ///
    /// No-op on Linux. Calling it while already loading restarts the
    /// animation with a single timer.
    #[instrument(skip(self), fields(platform = ?self.platform))]
    pub async fn show_loading(&mut self) -> CoreResult<()> {
        if !self.platform.supports_icon_animation() {
            info!("Icon animation unsupported on this platform, skipping");
            return Ok(());
        }

        let tray = self.handle("show_loading")?;

        // Old timer must not overwrite the globe below.
        self.animation.stop();

        if let Err(e) = tray.set_menu(self.loading_menu()).await {
            warn!(error = %e, "Failed to install loading menu");
        }

        if let Ok(globe) = self.icons.resolve(LOADING_ICON).await {
            if let Err(e) = tray.set_icon(&globe).await {
                warn!(error = %e, "Failed to set loading icon");
            }
        }

        if let Err(e) = tray.set_tooltip(LOADING_TOOLTIP).await {
            warn!(error = %e, "Failed to set loading tooltip");
        }

        self.animation.start(tray, self.icons.resources());
        self.state = TrayState::Loading;

        Ok(())
    }

    /// Stop any animation and show the theme icon with a fresh menu.
    #[instrument(skip(self))]
    pub async fn show_default(&mut self) -> CoreResult<()> {
        let tray = self.handle("show_default")?;

        self.animation.stop();

        match self.menus.build_menu().await {
            Ok(menu) => {
                if let Err(e) = tray.set_menu(menu).await {
                    warn!(error = %e, "Failed to install tray menu");
                }
            }
            Err(e) => warn!(error = %e, "Menu builder failed, keeping current menu"),
        }

        if let Ok(icon) = self.icons.resolve_icon().await {
            if let Err(e) = tray.set_icon(&icon).await {
                warn!(error = %e, "Failed to set theme icon");
            }
        }

        if let Err(e) = tray.set_tooltip(&self.display_name).await {
            warn!(error = %e, "Failed to set tooltip");
        }

        self.state = TrayState::Default;
        info!("Tray menu rebuilt");

        Ok(())
    }

    /// Ask the main window to rebuild the tray. Does not change state.
    pub async fn trigger_rebuild(&self) -> CoreResult<()> {
        self.signal.trigger().await.inspect_err(|e| {
            error!(error = %e, "Failed to trigger tray rebuild");
        })
    }

    fn loading_menu(&self) -> Menu {
        let quit = ConfirmQuitAction::new(
            QUIT_WHILE_LOADING_PROMPT,
            Arc::clone(&self.dialog),
            Arc::clone(&self.windows),
        );

        Menu::new(LOADING_MENU_ID).with_item(MenuItem::new(
            LOADING_QUIT_ITEM_ID,
            "Quit",
            Arc::new(quit),
        ))
    }

    #[track_caller]
    fn handle(&self, operation: &'static str) -> CoreResult<Arc<dyn TrayHandle>> {
        match &self.tray {
            Some(tray) => Ok(Arc::clone(tray)),
            None => {
                error!(operation, "Tray not found");
                Err(TrayError::HandleMissing {
                    operation,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
