/// Rosterdb Error Module
///
/// This module defines the error types for the rosterdb application.
/// It provides structured error handling with proper error propagation and
/// user-friendly error messages.
use thiserror::Error;

/// Error type for the rosterdb application.
///
/// This enum covers the failure scenarios that can occur within rosterdb:
/// - Database operations (connection, schema setup, queries, updates)
/// - Configuration loading and parsing
/// - Field validation during the edit flow
/// - Terminal I/O
#[derive(Error, Debug)]
pub enum RosterError {
    /// Database-related errors from SQLite operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Configuration loading and parsing errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Field validation errors from the edit flow
    #[error("Invalid value: {0}")]
    Validation(#[from] crate::fields::ValidationError),

    /// No student row exists for the requested StudentID
    #[error("No student found with ID {0}.")]
    NotFound(i64),

    /// Terminal and file system I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use RosterError as the error type.
///
/// This provides a consistent error type across the entire application
/// instead of using `Result<T, String>` or mixed error types.
pub type Result<T> = std::result::Result<T, RosterError>;
