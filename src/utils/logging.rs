// src/utils/logging.rs
use chrono::Local;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

const LOG_DIR_NAME: &str = "k8s-resource-manager";
const LOG_FILE_NAME: &str = "manager.log";

pub trait Logger: Send + Sync {
    fn log(&mut self, message: &str);
    fn debug_log(&mut self, message: &str);
}

/// Appends timestamped lines to a file. The file is reopened per line so a
/// long interactive session never holds a stale handle.
#[derive(Debug)]
pub struct FileLogger {
    log_file: PathBuf,
    debug: bool,
}

impl FileLogger {
    pub fn new<P: AsRef<Path>>(log_file: P, debug: bool) -> std::io::Result<Self> {
        let log_file = log_file.as_ref().to_path_buf();

        // Create log directory if it doesn't exist
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Fail early if the file cannot be opened for appending
        OpenOptions::new().create(true).append(true).open(&log_file)?;

        Ok(FileLogger { log_file, debug })
    }

    pub fn path(&self) -> &Path {
        &self.log_file
    }

    fn write_to_file(&self, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;

        writeln!(file, "{}: {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
    }
}

impl Logger for FileLogger {
    fn log(&mut self, message: &str) {
        if let Err(e) = self.write_to_file(message) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    fn debug_log(&mut self, message: &str) {
        if self.debug {
            if let Err(e) = self.write_to_file(&format!("[DEBUG] {}", message)) {
                eprintln!("Failed to write debug log: {}", e);
            }
        }
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&mut self, _message: &str) {}
    fn debug_log(&mut self, _message: &str) {}
}

/// `<data_local_dir>/k8s-resource-manager/manager.log`, or a file in the
/// working directory when the platform has no data directory.
pub fn default_log_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME),
        None => PathBuf::from(format!("{}.log", LOG_DIR_NAME)),
    }
}
