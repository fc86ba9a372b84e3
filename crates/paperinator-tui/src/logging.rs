use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default log directory: `<cache_dir>/paperinator/logs`.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("paperinator").join("logs"))
}

/// Route `tracing` output to a daily rolling file. The terminal belongs to the
/// UI, so nothing is written to stdout or stderr.
///
/// The filter comes from `PAPERINATOR_LOG`, then `RUST_LOG`, then `info`.
/// Returns the writer guard, which must live until exit so buffered lines are
/// flushed. `None` means logging is disabled (no usable directory).
pub fn init(log_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let dir = log_dir.or_else(default_log_dir)?;
    std::fs::create_dir_all(&dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&dir, "paperinator.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env("PAPERINATOR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Some(guard)
}
