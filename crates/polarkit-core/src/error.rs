//! Error handling for PolarKit
//!
//! Provides structured error types for the two layers of the application:
//! - Command errors (parsing/validation of the command stream)
//! - Device errors (machine configuration, work envelope)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Command stream error type
///
/// Represents errors detected while decoding one line of the command file.
/// None of these are fatal to a run: the offending line is reported and
/// skipped, and processing continues with the next line.
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    /// Line is missing the trailing `END` terminator
    #[error("Line {line_number}: missing 'END' or invalid command format")]
    MissingTerminator {
        /// The 1-based line number in the command file.
        line_number: u64,
    },

    /// Line contained only the terminator
    #[error("Line {line_number}: empty command line")]
    EmptyCommand {
        /// The 1-based line number in the command file.
        line_number: u64,
    },

    /// Wrong number of arguments for a known command code
    #[error("Line {line_number}: invalid number of arguments for {code}")]
    WrongArgumentCount {
        /// The 1-based line number in the command file.
        line_number: u64,
        /// The command code the arity check failed for.
        code: String,
    },

    /// A numeric field failed to parse
    #[error("Line {line_number}: invalid number format in field '{field}'")]
    InvalidNumber {
        /// The 1-based line number in the command file.
        line_number: u64,
        /// The offending field text.
        field: String,
    },

    /// Command code is not recognized
    #[error("Line {line_number}: unknown command code: {code}")]
    UnknownCode {
        /// The 1-based line number in the command file.
        line_number: u64,
        /// The unrecognized code.
        code: String,
    },
}

impl CommandError {
    /// The line number the error was detected on
    pub fn line_number(&self) -> u64 {
        match self {
            Self::MissingTerminator { line_number }
            | Self::EmptyCommand { line_number }
            | Self::WrongArgumentCount { line_number, .. }
            | Self::InvalidNumber { line_number, .. }
            | Self::UnknownCode { line_number, .. } => *line_number,
        }
    }
}

/// Device/machine error type
///
/// Represents errors related to the plotter's physical envelope and its
/// configuration.
#[derive(Error, Debug, Clone)]
pub enum DeviceError {
    /// Target position lies outside the configured work envelope
    #[error("Target position ({x}, {y}) outside work envelope")]
    PositionOutOfBounds {
        /// Rejected absolute X coordinate.
        x: f64,
        /// Rejected absolute Y coordinate.
        y: f64,
    },

    /// Machine configuration failed validation
    #[error("Invalid machine configuration: {reason}")]
    ConfigInvalid {
        /// The reason validation failed.
        reason: String,
    },
}

/// Main error type for PolarKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Command stream error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Device/machine error
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a command stream error
    pub fn is_command_error(&self) -> bool {
        matches!(self, Error::Command(_))
    }

    /// Check if this is a device error
    pub fn is_device_error(&self) -> bool {
        matches!(self, Error::Device(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_carries_line_number() {
        let err = CommandError::UnknownCode {
            line_number: 7,
            code: "C99".to_string(),
        };
        assert_eq!(err.line_number(), 7);
        assert_eq!(err.to_string(), "Line 7: unknown command code: C99");
    }

    #[test]
    fn unified_error_classification() {
        let err: Error = CommandError::EmptyCommand { line_number: 1 }.into();
        assert!(err.is_command_error());
        assert!(!err.is_device_error());

        let err: Error = DeviceError::PositionOutOfBounds { x: 1e4, y: 0.0 }.into();
        assert!(err.is_device_error());
    }
}
