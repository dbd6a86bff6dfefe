use crate::{
    animation::FRAME_DELAY,
    icon::{frame_resource_path, wrap_frame_index},
    ports::{ResourceResolver, TrayHandle},
};

use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

/// One run of the loading animation.
///
/// Owns the timer task; dropping the session aborts it.
pub(crate) struct AnimationSession {
    id: Uuid,
    next_frame: Arc<AtomicU8>,
    task: JoinHandle<()>,
}

impl AnimationSession {
    /// Spawn the frame timer. The first frame shows one delay after start.
    pub(crate) fn spawn(tray: Arc<dyn TrayHandle>, resources: Arc<dyn ResourceResolver>) -> Self {
        let id = Uuid::new_v4();
        let next_frame = Arc::new(AtomicU8::new(1));

        let task = tokio::spawn(
            run_frames(tray, resources, Arc::clone(&next_frame))
                .instrument(info_span!("animation", session_id = %id)),
        );

        Self {
            id,
            next_frame,
            task,
        }
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    /// Index the next tick will show, before wrapping.
    pub(crate) fn next_frame(&self) -> u8 {
        self.next_frame.load(Ordering::Relaxed)
    }
}

impl Drop for AnimationSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_frames(
    tray: Arc<dyn TrayHandle>,
    resources: Arc<dyn ResourceResolver>,
    next_frame: Arc<AtomicU8>,
) {
    let mut ticker = interval_at(Instant::now() + FRAME_DELAY, FRAME_DELAY);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let frame = wrap_frame_index(next_frame.load(Ordering::Relaxed));
        let relative = frame_resource_path(frame);

        // A bad frame is skipped; the cadence keeps going.
        match resources.resolve_resource(&relative).await {
            Ok(path) => {
                if let Err(e) = tray.set_icon(&path).await {
                    warn!(frame, error = %e, "Failed to apply animation frame");
                }
            }
            Err(e) => warn!(frame, error = %e, "Skipping unresolved animation frame"),
        }

        debug!(frame, "Animation frame shown");
        next_frame.store(frame + 1, Ordering::Relaxed);
    }
}
