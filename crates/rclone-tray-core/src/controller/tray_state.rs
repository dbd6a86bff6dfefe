/// Which face the tray currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayState {
    /// No tray icon exists yet, or creating it failed.
    Uninitialized,
    /// Theme icon, full menu, application name as tooltip.
    Default,
    /// Animated icon, quit-only menu, loading tooltip.
    Loading,
}
