//! Logging setup
//!
//! The terminal belongs to the UI, so logs go to a file through a
//! non-blocking appender. The filter comes from `VOLSTAGE_LOG` and
//! defaults to `info`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "VOLSTAGE_LOG";

/// Log file name inside the configured log directory
pub const LOG_FILE: &str = "volstage.log";

/// Build the filter from `VOLSTAGE_LOG`, falling back to `info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `<log_dir>/volstage.log`.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// and stops the writer thread.
pub fn init(log_dir: &Path) -> color_eyre::Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| color_eyre::eyre::eyre!("failed to install logger: {err}"))?;

    Ok(guard)
}
