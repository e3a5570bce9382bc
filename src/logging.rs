//! Logger setup: `env_logger` on stderr, mirrored into a log file

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use crate::error::Result;

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();

/// Default log file location
pub fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .map(|p| p.join("hintwarp"))
        .unwrap_or_else(std::env::temp_dir)
        .join("hintwarp.log")
}

/// Install the global logger. The filter comes from `RUST_LOG` (default
/// `info`). Calling this more than once keeps the first logger.
pub fn init() -> Result<()> {
    if LOG_FILE.get().is_some() {
        return Ok(());
    }

    let path = log_file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    if LOG_FILE.set(Mutex::new(file)).is_err() {
        return Ok(());
    }

    let installed = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            let line = format!("[{}] {} - {}\n", timestamp, record.level(), record.args());

            if let Some(file_mutex) = LOG_FILE.get() {
                if let Ok(mut file) = file_mutex.lock() {
                    let _ = file.write_all(line.as_bytes());
                    let _ = file.flush();
                }
            }

            write!(buf, "{}", line)
        })
        .try_init();

    if installed.is_err() {
        log::debug!("Logger already installed");
    }
    Ok(())
}
