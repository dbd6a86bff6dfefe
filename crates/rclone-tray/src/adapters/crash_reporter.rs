use rclone_tray_core::{TrayError, ports::CrashReporter};

use std::path::Path;

use tracing::{Level, Subscriber, error, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{Layer, filter::Targets, fmt, registry::LookupSpan};

/// Log target of captured failures. Only events on this target reach the
/// crash report file.
pub const CRASH_TARGET: &str = "rclone_tray::crash";

/// Reports failures as error events on [`CRASH_TARGET`].
pub struct LogCrashReporter;

impl CrashReporter for LogCrashReporter {
    fn capture_error(&self, failure: &TrayError) {
        error!(target: CRASH_TARGET, error = %failure, "Captured tray failure");
    }
}

/// Layer appending [`CRASH_TARGET`] events to `crash-reports.log` in `dir`.
///
/// `None` when reporting is disabled or the file cannot be opened; crash
/// events then only reach the console.
pub fn crash_report_layer<S>(
    dir: &Path,
    enabled: bool,
) -> Option<Box<dyn Layer<S> + Send + Sync + 'static>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if !enabled {
        return None;
    }

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("crash-reports")
        .filename_suffix("log")
        .build(dir);

    let appender = match appender {
        Ok(appender) => appender,
        Err(e) => {
            warn!(error = %e, dir = ?dir, "Crash report file unavailable");
            return None;
        }
    };

    Some(
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_filter(Targets::new().with_target(CRASH_TARGET, Level::ERROR))
            .boxed(),
    )
}
