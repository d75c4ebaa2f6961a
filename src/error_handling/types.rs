//! Error type definitions.
//!
//! This module defines the typed errors raised during process startup. None
//! of these can occur once the server is accepting traffic: the enrichment
//! pipeline itself has no error path.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The datacenter blocklist file could not be read or parsed.
    #[error("Datacenter blocklist error: {0}")]
    BlocklistError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = InitializationError::BlocklistError("bad JSON".to_string());
        assert!(err.to_string().contains("Datacenter blocklist error"));
        assert!(err.to_string().contains("bad JSON"));
    }
}
