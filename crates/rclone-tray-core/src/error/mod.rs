use error_location::ErrorLocation;
use thiserror::Error;

/// Tray subsystem errors with source location tracking.
///
/// Every public operation logs these at the point of failure, so callers may
/// ignore them. They are returned so that the failure path stays observable.
#[derive(Error, Debug)]
pub enum TrayError {
    /// Theme could not be determined from the host or the window.
    #[error("Theme probe failed: {reason} {location}")]
    ThemeProbeFailed {
        /// Description of the probe failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No tray handle is held, either because `init` never ran or it failed.
    #[error("Tray handle missing during {operation} {location}")]
    HandleMissing {
        /// Operation that needed the handle.
        operation: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A relative resource path could not be resolved to a file.
    #[error("Failed to resolve resource {path}: {reason} {location}")]
    ResourceResolutionFailed {
        /// Relative resource path that was requested.
        path: String,
        /// Description of the resolution failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The platform refused to create the tray icon.
    #[error("Tray creation failed: {reason} {location}")]
    TrayCreationFailed {
        /// Description of the creation failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An icon, tooltip or menu mutation on an existing tray failed.
    #[error("Tray update failed: {reason} {location}")]
    TrayUpdateFailed {
        /// Description of the update failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The menu builder could not produce a menu.
    #[error("Menu build failed: {reason} {location}")]
    MenuBuildFailed {
        /// Description of the build failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No window with the requested label exists.
    #[error("Window not found: {label} {location}")]
    WindowNotFound {
        /// Label that was looked up.
        label: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An event could not be delivered to a window.
    #[error("Failed to emit {event}: {reason} {location}")]
    EventEmitFailed {
        /// Event name.
        event: String,
        /// Description of the delivery failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`TrayError`].
pub type Result<T> = std::result::Result<T, TrayError>;
