//! Process-wide tracing setup for the binary: an append-mode log file plus stderr.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub struct LogConfig<'a> {
    pub log_file: &'a Path,
    pub verbose: bool,
}

pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let file = open_log_file(config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let default_level = if config.verbose { "debug" } else { "info" };
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_filter(filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter()),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
