//! In-memory implementations of every port.

use crate::{
    CoreResult, Menu, Platform, ThemeMode, TrayCollaborators, TrayController, TrayError,
    ports::{
        ConfirmDialog, CrashReporter, MenuBuilder, ResourceResolver, ThemeProbe, TrayBackend,
        TrayHandle, TrayOptions, WindowManager,
    },
};

use std::{
    collections::HashSet,
    panic::Location,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use error_location::ErrorLocation;

pub(crate) const APP_NAME: &str = "Rclone";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[track_caller]
fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

/// Records every mutation applied to the tray.
#[derive(Default)]
pub(crate) struct FakeTray {
    icons: Mutex<Vec<PathBuf>>,
    tooltips: Mutex<Vec<String>>,
    menus: Mutex<Vec<Menu>>,
}

impl FakeTray {
    pub(crate) fn icon_count(&self) -> usize {
        lock(&self.icons).len()
    }

    /// File names of every icon set, oldest first.
    pub(crate) fn icon_names(&self) -> Vec<String> {
        lock(&self.icons)
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    pub(crate) fn last_icon(&self) -> Option<PathBuf> {
        lock(&self.icons).last().cloned()
    }

    pub(crate) fn last_tooltip(&self) -> Option<String> {
        lock(&self.tooltips).last().cloned()
    }

    pub(crate) fn last_menu(&self) -> Option<Menu> {
        lock(&self.menus).last().cloned()
    }

    pub(crate) fn menu_count(&self) -> usize {
        lock(&self.menus).len()
    }
}

#[async_trait]
impl TrayHandle for FakeTray {
    fn id(&self) -> &str {
        crate::ids::TRAY_ID
    }

    async fn set_icon(&self, icon: &Path) -> CoreResult<()> {
        lock(&self.icons).push(icon.to_path_buf());
        Ok(())
    }

    async fn set_tooltip(&self, tooltip: &str) -> CoreResult<()> {
        lock(&self.tooltips).push(tooltip.to_string());
        Ok(())
    }

    async fn set_menu(&self, menu: Menu) -> CoreResult<()> {
        lock(&self.menus).push(menu);
        Ok(())
    }
}

/// Hands out one shared [`FakeTray`], or fails every creation.
pub(crate) struct FakeBackend {
    tray: Arc<FakeTray>,
    fail: bool,
    created: Mutex<Vec<TrayOptions>>,
}

impl FakeBackend {
    pub(crate) fn created(&self) -> Vec<TrayOptions> {
        lock(&self.created).clone()
    }
}

#[async_trait]
impl TrayBackend for FakeBackend {
    async fn create_tray(&self, options: TrayOptions) -> CoreResult<Arc<dyn TrayHandle>> {
        if self.fail {
            return Err(TrayError::TrayCreationFailed {
                reason: "status area unavailable".to_string(),
                location: here(),
            });
        }
        lock(&self.created).push(options);
        Ok(Arc::clone(&self.tray) as Arc<dyn TrayHandle>)
    }
}

/// Resolves everything under `/bundle` except paths marked missing.
#[derive(Default)]
pub(crate) struct FakeResources {
    missing: Mutex<HashSet<String>>,
}

impl FakeResources {
    pub(crate) fn mark_missing(&self, relative: &str) {
        lock(&self.missing).insert(relative.to_string());
    }
}

#[async_trait]
impl ResourceResolver for FakeResources {
    async fn resolve_resource(&self, relative: &str) -> CoreResult<PathBuf> {
        if lock(&self.missing).contains(relative) {
            return Err(TrayError::ResourceResolutionFailed {
                path: relative.to_string(),
                reason: "not bundled".to_string(),
                location: here(),
            });
        }
        Ok(Path::new("/bundle").join(relative))
    }
}

/// Theme answers; `None` makes the matching query fail.
pub(crate) struct FakeThemeProbe {
    pub(crate) host: Option<String>,
    pub(crate) window: Option<ThemeMode>,
}

impl FakeThemeProbe {
    pub(crate) fn dark() -> Self {
        Self {
            host: Some("dark".to_string()),
            window: Some(ThemeMode::Dark),
        }
    }
}

#[async_trait]
impl ThemeProbe for FakeThemeProbe {
    async fn host_theme(&self) -> CoreResult<String> {
        self.host.clone().ok_or_else(|| TrayError::ThemeProbeFailed {
            reason: "host call rejected".to_string(),
            location: here(),
        })
    }

    async fn window_theme(&self) -> CoreResult<ThemeMode> {
        self.window.ok_or_else(|| TrayError::ThemeProbeFailed {
            reason: "no active window".to_string(),
            location: here(),
        })
    }
}

/// Window set with recorded events and restores.
pub(crate) struct FakeWindows {
    labels: Vec<String>,
    emitted: Mutex<Vec<(String, String)>>,
    resets: Mutex<usize>,
}

impl FakeWindows {
    pub(crate) fn with_labels(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            emitted: Mutex::new(Vec::new()),
            resets: Mutex::new(0),
        }
    }

    pub(crate) fn emitted(&self) -> Vec<(String, String)> {
        lock(&self.emitted).clone()
    }

    pub(crate) fn resets(&self) -> usize {
        *lock(&self.resets)
    }
}

#[async_trait]
impl WindowManager for FakeWindows {
    async fn reset_main_window(&self) -> CoreResult<()> {
        *lock(&self.resets) += 1;
        Ok(())
    }

    async fn window_labels(&self) -> CoreResult<Vec<String>> {
        Ok(self.labels.clone())
    }

    async fn emit(&self, label: &str, event: &str) -> CoreResult<()> {
        if !self.labels.iter().any(|known| known == label) {
            return Err(TrayError::WindowNotFound {
                label: label.to_string(),
                location: here(),
            });
        }
        lock(&self.emitted).push((label.to_string(), event.to_string()));
        Ok(())
    }
}

/// Answers every question with a fixed reply.
pub(crate) struct FakeDialog {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl FakeDialog {
    pub(crate) fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn asked(&self) -> Vec<String> {
        lock(&self.asked).clone()
    }
}

#[async_trait]
impl ConfirmDialog for FakeDialog {
    async fn ask(&self, message: &str) -> CoreResult<bool> {
        lock(&self.asked).push(message.to_string());
        Ok(self.answer)
    }
}

#[derive(Default)]
pub(crate) struct FakeCrashReporter {
    captured: Mutex<Vec<String>>,
}

impl FakeCrashReporter {
    pub(crate) fn captured(&self) -> Vec<String> {
        lock(&self.captured).clone()
    }
}

impl CrashReporter for FakeCrashReporter {
    fn capture_error(&self, error: &TrayError) {
        lock(&self.captured).push(error.to_string());
    }
}

/// Builds a one-item menu, or fails.
#[derive(Default)]
pub(crate) struct FakeMenuBuilder {
    fail: bool,
    builds: Mutex<usize>,
}

impl FakeMenuBuilder {
    pub(crate) fn builds(&self) -> usize {
        *lock(&self.builds)
    }
}

#[async_trait]
impl MenuBuilder for FakeMenuBuilder {
    async fn build_menu(&self) -> CoreResult<Menu> {
        *lock(&self.builds) += 1;
        if self.fail {
            return Err(TrayError::MenuBuildFailed {
                reason: "remotes unavailable".to_string(),
                location: here(),
            });
        }
        Ok(Menu::new("default-menu"))
    }
}

/// Knobs for [`Harness::build`].
pub(crate) struct HarnessOptions {
    pub(crate) platform: Platform,
    pub(crate) fail_creation: bool,
    pub(crate) fail_menu: bool,
    pub(crate) theme: FakeThemeProbe,
    pub(crate) window_labels: Vec<&'static str>,
    pub(crate) quit_answer: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Windows,
            fail_creation: false,
            fail_menu: false,
            theme: FakeThemeProbe::dark(),
            window_labels: vec!["main"],
            quit_answer: true,
        }
    }
}

/// Controller wired to fakes, with the fakes kept for assertions.
pub(crate) struct Harness {
    pub(crate) controller: TrayController,
    pub(crate) tray: Arc<FakeTray>,
    pub(crate) backend: Arc<FakeBackend>,
    pub(crate) resources: Arc<FakeResources>,
    pub(crate) windows: Arc<FakeWindows>,
    pub(crate) dialog: Arc<FakeDialog>,
    pub(crate) crash_reporter: Arc<FakeCrashReporter>,
    pub(crate) menus: Arc<FakeMenuBuilder>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::build(HarnessOptions::default())
    }

    pub(crate) fn on(platform: Platform) -> Self {
        Self::build(HarnessOptions {
            platform,
            ..HarnessOptions::default()
        })
    }

    pub(crate) fn build(options: HarnessOptions) -> Self {
        let tray = Arc::new(FakeTray::default());
        let backend = Arc::new(FakeBackend {
            tray: Arc::clone(&tray),
            fail: options.fail_creation,
            created: Mutex::new(Vec::new()),
        });
        let resources = Arc::new(FakeResources::default());
        let windows = Arc::new(FakeWindows::with_labels(&options.window_labels));
        let dialog = Arc::new(FakeDialog::answering(options.quit_answer));
        let crash_reporter = Arc::new(FakeCrashReporter::default());
        let menus = Arc::new(FakeMenuBuilder {
            fail: options.fail_menu,
            builds: Mutex::new(0),
        });

        let collaborators = TrayCollaborators {
            backend: backend.clone(),
            menus: menus.clone(),
            windows: windows.clone(),
            crash_reporter: crash_reporter.clone(),
            resources: resources.clone(),
            theme_probe: Arc::new(options.theme),
            dialog: dialog.clone(),
        };

        Self {
            controller: TrayController::new(options.platform, APP_NAME, collaborators),
            tray,
            backend,
            resources,
            windows,
            dialog,
            crash_reporter,
            menus,
        }
    }
}
