/// Core Module for rosterdb
///
/// This module contains the shared infrastructure used by the rest of the
/// application: the error type and the crate-wide `Result` alias.

pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
