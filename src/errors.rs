/*!
 * Error types for the srtprep application.
 *
 * The processing core never fails on document content; these errors cover
 * what the host layer can hit around it (reading input, variable files,
 * strict mode), using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while handling a subtitle document
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The input bytes are not UTF-8 text
    #[error("Subtitle document is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    /// Strict mode found error diagnostics
    #[error("{count} subtitle error(s) found in {file}")]
    ValidationFailed {
        /// Input file name
        file: String,
        /// Number of error diagnostics
        count: usize,
    },
}

/// Errors that can occur when loading or saving a variable table
#[derive(Error, Debug)]
pub enum VariableError {
    /// The variable file is not a JSON object of strings
    #[error("Failed to parse variable table: {0}")]
    ParseError(String),

    /// The table could not be written out
    #[error("Failed to serialize variable table: {0}")]
    SerializeError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle handling
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from the variable table
    #[error("Variable error: {0}")]
    Variables(#[from] VariableError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
