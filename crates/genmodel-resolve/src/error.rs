//! Error types for the resolution library.

use thiserror::Error;

/// Main error type for resolution operations.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Configuration error (unknown target language, missing type mapping, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The attribute does not record any referenced entity.
    ///
    /// Expected in normal use when a renderer queries referenced-entity
    /// information on an attribute that is not a foreign key. Callers may
    /// guard around this instead of aborting (see [`ResolveError::is_domain_error`]).
    #[error("Attribute '{attribute}' does not reference any entity")]
    NoReferencedEntity { attribute: String },

    /// A recorded referenced-entity name is absent from the model index.
    ///
    /// Indicates an upstream model defect, not a caller mistake.
    #[error("Model integrity error: entity '{class_name}' referenced by attribute '{attribute}' not found in model")]
    ModelIntegrity {
        attribute: String,
        class_name: String,
    },

    /// Programmer mistake in a helper call (e.g. multi-character separator).
    #[error("Usage error: {0}")]
    Usage(String),

    /// IO error (configuration file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResolveError {
    /// Create a `NoReferencedEntity` error for the given attribute.
    pub fn no_referenced_entity(attribute: impl Into<String>) -> Self {
        ResolveError::NoReferencedEntity {
            attribute: attribute.into(),
        }
    }

    /// Create a `ModelIntegrity` error for the given attribute and missing class name.
    pub fn model_integrity(attribute: impl Into<String>, class_name: impl Into<String>) -> Self {
        ResolveError::ModelIntegrity {
            attribute: attribute.into(),
            class_name: class_name.into(),
        }
    }

    /// True for errors a renderer may recover from by skipping or guarding
    /// around the attribute instead of aborting the generation run.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, ResolveError::NoReferencedEntity { .. })
    }
}

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_classification() {
        assert!(ResolveError::no_referenced_entity("code").is_domain_error());
        assert!(!ResolveError::model_integrity("code", "Country").is_domain_error());
        assert!(!ResolveError::Config("no mapping".to_string()).is_domain_error());
        assert!(!ResolveError::Usage("single char expected".to_string()).is_domain_error());
    }

    #[test]
    fn test_error_messages_identify_attribute() {
        let err = ResolveError::model_integrity("countryCode", "Country");
        let msg = err.to_string();
        assert!(msg.contains("countryCode"));
        assert!(msg.contains("Country"));
    }
}
