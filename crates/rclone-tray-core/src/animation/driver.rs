use crate::{
    animation::session::AnimationSession,
    ports::{ResourceResolver, TrayHandle},
};

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

/// Cycles the tray icon through the loading frames.
///
/// Holds at most one [`AnimationSession`]. Starting replaces the current
/// session and stopping clears it, so two timers never race on the icon.
/// A tick already running when the session is cancelled may still set one
/// more frame.
#[derive(Default)]
pub struct AnimationDriver {
    session: Option<AnimationSession>,
}

impl AnimationDriver {
    /// Idle driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session on `tray`, cancelling any running one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        &mut self,
        tray: Arc<dyn TrayHandle>,
        resources: Arc<dyn ResourceResolver>,
    ) -> Uuid {
        self.stop();

        let session = AnimationSession::spawn(tray, resources);
        let session_id = session.id();
        self.session = Some(session);

        info!(session_id = %session_id, "Loading animation started");
        session_id
    }

    /// Cancel the running session. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                info!(session_id = %session.id(), "Loading animation stopped");
                drop(session);
                true
            }
            None => {
                debug!("No loading animation to stop");
                false
            }
        }
    }

    /// Whether a session is active.
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Id of the active session.
    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(AnimationSession::id)
    }

    /// Frame index the active session will show next.
    pub fn next_frame(&self) -> Option<u8> {
        self.session.as_ref().map(AnimationSession::next_frame)
    }
}
