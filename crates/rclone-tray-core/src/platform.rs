/// Operating system family the tray runs on.
///
/// Two families get special treatment: [`Platform::MacOs`] asks the host for
/// the system theme instead of the window, and [`Platform::Linux`] skips the
/// loading animation because tray icon replacement is unreliable there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS.
    MacOs,
    /// Linux and other freedesktop systems.
    Linux,
    /// Windows.
    Windows,
    /// Anything else.
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Whether the theme must come from the host rather than the window.
    pub fn uses_host_theme(self) -> bool {
        self == Platform::MacOs
    }

    /// Whether the tray icon can be swapped often enough to animate.
    pub fn supports_icon_animation(self) -> bool {
        self != Platform::Linux
    }
}
