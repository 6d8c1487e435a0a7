//! Logging setup and configuration

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};
use crate::config::Config;

pub struct LoggingGuard {
    pub _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Console output goes to stderr, filtered by `RUST_LOG` (default `warn`) so it
/// never mixes with rendered tables. The log file, when enabled, records `info`.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Arc<LoggingGuard>> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "trade-journal.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(false)
                .with_level(true)
                .with_ansi(false)
                .compact()
                .with_filter(LevelFilter::INFO);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_level(true)
                .with_filter(console_filter),
        )
        .with(file_layer)
        .init();

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

pub fn setup_output_directories(config: &Config) -> Result<()> {
    use std::fs;

    if let Some(dir) = &config.log_dir {
        fs::create_dir_all(dir)?;
    }

    Ok(())
}
