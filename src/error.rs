//! Error types for palette parsing and theme export.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for palette processing, also used as process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (2)
    FileNotFound = 2,
    /// Empty file (3)
    EmptyFile = 3,
    /// Malformed palette document (4)
    InvalidPalette = 4,
    /// Invalid argument, such as an unknown format or role name (5)
    InvalidArgument = 5,
    /// Export target without an implementation (6)
    NotImplemented = 6,
    /// Clipboard or worker failure (7)
    Unavailable = 7,
    /// Read or write failure (8)
    Io = 8,
}

/// Main error type for the exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid palette document: {message}")]
    InvalidPalette { message: String },

    #[error("Invalid color value '{value}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor { value: String },

    #[error("Unknown color role '{name}'")]
    UnknownRole { name: String },

    #[error("Missing color role '{role}' in palette")]
    MissingRole { role: String },

    #[error("Unknown ColorFormat type '{value}'")]
    UnknownColorFormat { value: String },

    #[error("Invalid saved state for '{key}': '{value}'")]
    InvalidState { key: String, value: String },

    #[error("Export to {feature} is not implemented")]
    NotImplemented { feature: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Export worker has stopped")]
    WorkerStopped,

    #[error("Export did not finish within {seconds}s")]
    ExportTimeout { seconds: u64 },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ExportError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ExportError::InvalidPalette { .. } => ErrorCode::InvalidPalette,
            ExportError::InvalidColor { .. } => ErrorCode::InvalidPalette,
            ExportError::MissingRole { .. } => ErrorCode::InvalidPalette,
            ExportError::UnknownRole { .. } => ErrorCode::InvalidArgument,
            ExportError::UnknownColorFormat { .. } => ErrorCode::InvalidArgument,
            ExportError::InvalidState { .. } => ErrorCode::InvalidArgument,
            ExportError::NotImplemented { .. } => ErrorCode::NotImplemented,
            ExportError::Clipboard { .. } => ErrorCode::Unavailable,
            ExportError::WorkerStopped => ErrorCode::Unavailable,
            ExportError::ExportTimeout { .. } => ErrorCode::Unavailable,
            ExportError::UnknownCommand { .. } => ErrorCode::InvalidArgument,
            ExportError::Io(_) => ErrorCode::Io,
            ExportError::Json(_) => ErrorCode::InvalidPalette,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ExportError::UnknownColorFormat {
            value: "Bogus".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert_eq!(err.code_value(), 5);

        let err = ExportError::NotImplemented {
            feature: "Views theme file".to_string(),
        };
        assert_eq!(err.code_value(), 6);
        assert_eq!(err.to_string(), "Export to Views theme file is not implemented");
    }

    #[test]
    fn test_io_errors_are_not_file_not_found() {
        let err = ExportError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.code(), ErrorCode::Io);
        assert_eq!(err.code_value(), 8);
    }
}
