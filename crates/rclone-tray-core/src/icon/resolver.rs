//! Theme-aware icon selection.
//!
//! Picks the icon variant that stays visible on the current menu bar and
//! names the frames of the loading animation.

use crate::{
    CoreResult, Platform, ThemeMode,
    animation::FRAME_COUNT,
    ids::{DARK_ICON, ICON_ROOT, LIGHT_ICON},
    ports::{ResourceResolver, ThemeProbe},
};

use std::{path::PathBuf, sync::Arc};

use tracing::{debug, instrument, warn};

/// Static globe shown as soon as loading starts, before the first frame.
pub(crate) const LOADING_ICON: &str = "icons/favicon/frame_00_delay-0.1s.png";

/// Bring a frame index back into `1..=FRAME_COUNT`.
///
/// Index 0 is kept; it names the static globe.
pub fn wrap_frame_index(index: u8) -> u8 {
    if index > FRAME_COUNT { 1 } else { index }
}

/// File name of animation frame `index`, e.g. `frame_03_delay-0.1s.png`.
pub fn frame_file_name(index: u8) -> String {
    format!("frame_{:02}_delay-0.1s.png", wrap_frame_index(index))
}

/// Resource path of animation frame `index`.
pub fn frame_resource_path(index: u8) -> String {
    format!("{}/{}", ICON_ROOT, frame_file_name(index))
}

/// Resolves the tray icon for the active theme.
#[derive(Clone)]
pub struct IconResolver {
    platform: Platform,
    probe: Arc<dyn ThemeProbe>,
    resources: Arc<dyn ResourceResolver>,
}

impl IconResolver {
    /// Resolver probing `platform`'s theme through `probe`.
    pub fn new(
        platform: Platform,
        probe: Arc<dyn ThemeProbe>,
        resources: Arc<dyn ResourceResolver>,
    ) -> Self {
        Self {
            platform,
            probe,
            resources,
        }
    }

    /// Resource path of the icon for `theme`.
    pub fn icon_path_for(theme: ThemeMode) -> &'static str {
        match theme {
            ThemeMode::Dark => DARK_ICON,
            ThemeMode::Light => LIGHT_ICON,
        }
    }

    /// Ask the platform for the current theme.
    ///
    /// On macOS the host is asked; everywhere else the active window.
    #[instrument(skip(self), fields(platform = ?self.platform))]
    pub async fn probe_theme(&self) -> CoreResult<ThemeMode> {
        if self.platform.uses_host_theme() {
            let value = self.probe.host_theme().await?;
            Ok(ThemeMode::from_host_value(&value))
        } else {
            self.probe.window_theme().await
        }
    }

    /// Current theme, falling back to [`ThemeMode::Dark`] on any failure.
    pub async fn current_theme(&self) -> ThemeMode {
        let theme = match self.probe_theme().await {
            Ok(theme) => theme,
            Err(e) => {
                warn!(error = %e, "Theme probe failed, using dark icon");
                ThemeMode::Dark
            }
        };
        debug!(theme = theme.as_str(), "Theme resolved");
        theme
    }

    /// Absolute path of the icon for the current theme.
    ///
    /// Theme failures never surface here; only resource resolution can fail.
    #[instrument(skip(self))]
    pub async fn resolve_icon(&self) -> CoreResult<PathBuf> {
        let theme = self.current_theme().await;
        let relative = Self::icon_path_for(theme);
        debug!(path = relative, "Picked tray icon");
        self.resolve(relative).await
    }

    /// Resolve any relative icon resource, logging failures.
    pub async fn resolve(&self, relative: &str) -> CoreResult<PathBuf> {
        match self.resources.resolve_resource(relative).await {
            Ok(path) => Ok(path),
            Err(e) => {
                warn!(path = relative, error = %e, "Icon resource unavailable");
                Err(e)
            }
        }
    }

    /// Resource resolver used for frames.
    pub(crate) fn resources(&self) -> Arc<dyn ResourceResolver> {
        Arc::clone(&self.resources)
    }
}
