//! Logging Infrastructure
//!
//! The terminal belongs to the UI, so nothing is written to stdout/stderr:
//! - tui-logger layer feeding the in-app log pane
//! - optional daily rolling file log (plain or JSON)

use crate::core::Config;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, prelude::*};

/// File name prefix of the rolling log files
const LOG_FILE_PREFIX: &str = "reservation-desk";

/// Make sure the log directory exists and return it
pub fn prepare_log_dir(dir: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(dir);
    fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

fn file_layer(
    log_dir: &Path,
    json_format: bool,
) -> Box<dyn Layer<Registry> + Send + Sync + 'static> {
    let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);

    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::sync::Mutex::new(appender))
            .boxed()
    } else {
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::sync::Mutex::new(appender))
            .boxed()
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` wins over `LOG_LEVEL` when both are set. Must be called once,
/// before the terminal switches to raw mode.
pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let file = match config.log_dir.as_deref() {
        Some(dir) => Some(file_layer(&prepare_log_dir(dir)?, config.log_json)),
        None => None,
    };

    tracing_subscriber::registry()
        .with(file)
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .try_init()?;

    // Route the `log` facade to the pane as well
    let pane_level = log::LevelFilter::from_str(&config.log_level).unwrap_or(log::LevelFilter::Info);
    tui_logger::init_logger(pane_level).ok();
    tui_logger::set_default_level(pane_level);

    Ok(())
}
