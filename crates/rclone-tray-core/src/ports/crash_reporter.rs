use crate::TrayError;

/// Out-of-band error collection. Fire-and-forget.
pub trait CrashReporter: Send + Sync {
    /// Record an error that made the tray unusable.
    fn capture_error(&self, error: &TrayError);
}
