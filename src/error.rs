//! Error handling for the pile classification pass
//!
//! Filtering decisions (degenerate catalog entries, disabled categories) are
//! not errors. Everything here is a fault that aborts the pass.

/// Main error type for the pile engine
#[derive(Debug, thiserror::Error)]
pub enum PileError {
    // Identifier Errors
    #[error("Invalid asset location '{value}': {reason}")]
    InvalidAssetLocation { value: String, reason: String },

    #[error("Invalid wildcard pattern '{pattern}': {error}")]
    InvalidPattern { pattern: String, error: String },

    // Configuration Errors
    #[error("Failed to load config {path}: {error}")]
    ConfigLoad { path: String, error: String },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // Behavior Errors
    #[error("Behavior initialization failed for {collectible}: {error}")]
    BehaviorInitialization { collectible: String, error: String },

    #[error("Serialization error in {context}: {error}")]
    SerializationError { context: String, error: String },

    #[error("Deserialization error in {context}: {error}")]
    DeserializationError { context: String, error: String },

    // Generic fallback for unexpected errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results in the pile engine
pub type PileResult<T> = Result<T, PileError>;

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> PileResult<T>;
    fn with_context<F>(self, f: F) -> PileResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> PileResult<T> {
        self.map_err(|e| PileError::Internal {
            message: format!("{}: {}", msg, e),
        })
    }

    fn with_context<F>(self, f: F) -> PileResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PileError::Internal {
            message: format!("{}: {}", f(), e),
        })
    }
}
