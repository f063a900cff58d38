//! Error types for the Suzuran catalog store.

use thiserror::Error;

/// A shared error type for the catalog crates.
///
/// A record that does not exist is not an error for repository calls; those
/// return `Option` or `bool`. `NotFound` exists for callers that need to turn
/// a missing record into a failure.
#[derive(Error, Debug, Clone)]
pub enum SuzuranError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A collection file exists but cannot be read as the expected shape.
    #[error("Corrupt data in {path}: {message}")]
    CorruptData { path: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Advisory file lock could not be acquired
    #[error("Lock error: {0}")]
    Lock(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Input rejected before reaching storage
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SuzuranError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a CorruptData error for the given file
    pub fn corrupt(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Migration error
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a CorruptData error
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SuzuranError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SuzuranError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SuzuranError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for SuzuranError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, SuzuranError>`.
pub type Result<T> = std::result::Result<T, SuzuranError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: SuzuranError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_json_conversion_is_serialization() {
        let parse_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: SuzuranError = parse_err.into();
        assert!(err.is_serialization());
        assert!(!err.is_corrupt_data());
    }

    #[test]
    fn test_not_found_display() {
        let err = SuzuranError::not_found("rarity", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: rarity 'abc'");
    }
}
