//! Generation-environment configuration loading and validation.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::neutral::NeutralType;
use crate::error::{ResolveError, Result};

/// Generation environment settings as written by the user.
///
/// Selects the target language and database dialect, and optionally
/// overrides the neutral-type to SQL-type mapping table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Target language (default: "java").
    pub language: String,

    /// Target database dialect; empty means generic ANSI defaults.
    pub database: String,

    /// User overrides from neutral type to base SQL type.
    pub database_types_mapping: HashMap<NeutralType, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: "java".to_string(),
            database: String::new(),
            database_types_mapping: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML or JSON file, selected by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(ResolveError::Config(
                "Target language cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.language, "java");
        assert_eq!(config.database, "");
        assert!(config.database_types_mapping.is_empty());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
language: typescript
database: postgresql
database_types_mapping:
  string: TEXT
  decimal: NUMERIC
"#;
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.language, "typescript");
        assert_eq!(config.database, "postgresql");
        assert_eq!(
            config.database_types_mapping.get(&NeutralType::String),
            Some(&"TEXT".to_string())
        );
        assert_eq!(
            config.database_types_mapping.get(&NeutralType::Decimal),
            Some(&"NUMERIC".to_string())
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"language": "java", "database": "mysql"}"#;
        let config = GeneratorConfig::from_json(json).unwrap();
        assert_eq!(config.language, "java");
        assert_eq!(config.database, "mysql");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = GeneratorConfig::from_yaml("database: oracle\n").unwrap();
        assert_eq!(config.language, "java");
        assert_eq!(config.database, "oracle");
    }

    #[test]
    fn test_empty_language_is_rejected() {
        let err = GeneratorConfig::from_yaml("language: \"  \"\n").unwrap_err();
        assert!(matches!(err, ResolveError::Config(_)));
    }
}
