use std::path::Path;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "novamatch=info";
const LOG_FILE_PREFIX: &str = "novamatch.log";

/// Installs the global subscriber: a daily log file under `logs_dir` plus
/// warnings on stderr.
///
/// The returned guard flushes the file writer and must live until exit.
pub fn init(logs_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr.with_max_level(Level::WARN)))
        .init();

    Ok(guard)
}
