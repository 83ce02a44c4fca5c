//! Application error type with process exit code mapping.

use domain::{DomainError, ErrorKind};
use thiserror::Error;

/// Exit status for a failed read or write of the gallery document.
pub const EXIT_IO_ERROR: u8 = 74;

/// Exit status for any other failure.
pub const EXIT_SOFTWARE: u8 = 70;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(err) => err.kind(),
        }
    }

    /// Maps the error onto a process exit status.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Persistence => EXIT_IO_ERROR,
            _ => EXIT_SOFTWARE,
        }
    }
}
