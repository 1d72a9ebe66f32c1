//! Logging setup
//!
//! All modules log through the `log` facade. [`init`] installs a `fern`
//! dispatcher that stamps each record and forwards it to the in-memory
//! [`Logger`] ring (shown by the gallery log panel) and, when enabled in the
//! configuration, to a log file in the local data directory.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_RING_CAPACITY};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared bounded log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_RING_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Add an already formatted log entry, evicting the oldest when full
    pub fn log(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a log line the way both sinks store it
#[must_use]
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{}] {:<5} {}: {}", Local::now().format("%H:%M:%S%.3f"), level, target, message)
}

/// Location of the log file written when file logging is enabled
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Install the global logger.
///
/// Returns the log file path when file logging is enabled. Can only succeed
/// once per process.
pub fn init(config: &LoggingConfig, memory: Logger) -> Result<Option<PathBuf>> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let line = format_line(record.level(), record.target(), message);
            out.finish(format_args!("{}", line))
        })
        .level(level)
        .chain(fern::Output::call(move |record| memory.log(record.args().to_string())));

    let mut file_path = None;
    if config.enabled {
        let path = log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
        file_path = Some(path);
    }

    dispatch.apply().context("Failed to install logger")?;
    log::info!("Logging initialised at level {}", level);
    Ok(file_path)
}
