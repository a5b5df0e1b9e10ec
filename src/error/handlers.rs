//! Error handlers
//!
//! Provides error reporting for the console binary.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("Mount manager error: {}", err);
}

/// Process exit code for an application error
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Settings(_) => 78,
        AppError::Storage(_) => 74,
        AppError::IoError(_) => 74,
    }
}
