//! Error types
//!
//! Only the outer layers can fail hard: reading application settings and
//! reading or flushing a config file. Mount, unmount and audit operations
//! report best-effort outcomes through the status enums in each module's
//! `results` instead.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Config file (ini) errors
#[derive(Debug)]
pub enum StorageError {
    ReadFailed(PathBuf, io::Error),
    WriteFailed(PathBuf, io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(p, e) => {
                write!(f, "Failed to read config {}: {}", p.display(), e)
            }
            StorageError::WriteFailed(p, e) => {
                write!(f, "Failed to write config {}: {}", p.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Top-level error for the console binary
#[derive(Debug)]
pub enum AppError {
    Settings(config::ConfigError),
    Storage(StorageError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Settings(e) => write!(f, "Settings error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Settings(error)
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::Storage(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
