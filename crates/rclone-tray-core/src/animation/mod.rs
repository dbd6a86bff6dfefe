mod driver;
mod session;

use std::time::Duration;

pub use driver::AnimationDriver;

/// Number of frames in the loading animation.
pub const FRAME_COUNT: u8 = 17;

/// Delay between two animation frames.
pub const FRAME_DELAY: Duration = Duration::from_millis(200);
