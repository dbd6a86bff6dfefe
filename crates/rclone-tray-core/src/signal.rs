use crate::{
    CoreResult, TrayError,
    ids::{MAIN_WINDOW_LABEL, REBUILD_TRAY_EVENT},
    ports::WindowManager,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};

/// Lets any component ask for a tray rebuild without touching the tray.
///
/// The request goes to the main window as a `rebuild-tray` event; window-side
/// logic decides what to do with it.
#[derive(Clone)]
pub struct RebuildSignal {
    windows: Arc<dyn WindowManager>,
}

impl RebuildSignal {
    /// Signal delivered through `windows`.
    pub fn new(windows: Arc<dyn WindowManager>) -> Self {
        Self { windows }
    }

    /// Emit one `rebuild-tray` event to the main window only.
    #[instrument(skip(self))]
    pub async fn trigger(&self) -> CoreResult<()> {
        let labels = self.windows.window_labels().await?;

        if !labels.iter().any(|label| label == MAIN_WINDOW_LABEL) {
            warn!("Main window not open, tray rebuild not requested");
            return Err(TrayError::WindowNotFound {
                label: MAIN_WINDOW_LABEL.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.windows
            .emit(MAIN_WINDOW_LABEL, REBUILD_TRAY_EVENT)
            .await?;

        debug!("Tray rebuild requested");
        Ok(())
    }
}
