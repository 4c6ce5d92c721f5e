//! Converter registry for explicit dependency injection.
//!
//! The [`ConverterCatalog`] holds the type converters available to a
//! generation run. It is explicitly constructed and injected through the
//! environment rather than accessed as global state, so tests can build
//! catalogs with fixed mappings and initialization stays deterministic.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ResolveError, Result};

use super::{JavaTypeConverter, TypeConverter, TypeScriptTypeConverter};

/// Registry of target-language type converters, keyed by language name.
#[derive(Default)]
pub struct ConverterCatalog {
    converters: HashMap<String, Arc<dyn TypeConverter>>,
}

impl ConverterCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in converters registered.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        catalog.register(Arc::new(JavaTypeConverter::new()));
        catalog.register(Arc::new(TypeScriptTypeConverter::new()));
        catalog
    }

    /// Register a converter under its own language name (lowercased).
    ///
    /// A later registration for the same language replaces the earlier one.
    pub fn register(&mut self, converter: Arc<dyn TypeConverter>) {
        self.converters
            .insert(converter.language().to_lowercase(), converter);
    }

    /// Look up the converter for a language (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Config` naming the known languages when no
    /// converter is registered for `language`.
    pub fn converter(&self, language: &str) -> Result<Arc<dyn TypeConverter>> {
        self.converters
            .get(&language.to_lowercase())
            .cloned()
            .ok_or_else(|| {
                let mut known: Vec<&str> = self.converters.keys().map(String::as_str).collect();
                known.sort_unstable();
                ResolveError::Config(format!(
                    "No type converter for language '{}' (known: {})",
                    language,
                    known.join(", ")
                ))
            })
    }

    /// Registered language names.
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.converters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ConverterCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterCatalog")
            .field("languages", &self.languages())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::neutral::NeutralType;
    use crate::lang::{AttributeTypeInfo, LanguageType};

    #[test]
    fn test_builtins_are_registered() {
        let catalog = ConverterCatalog::with_builtins();
        assert_eq!(catalog.languages(), vec!["java", "typescript"]);
        assert!(catalog.converter("java").is_ok());
        assert!(catalog.converter("Java").is_ok());
        assert!(catalog.converter("TYPESCRIPT").is_ok());
    }

    #[test]
    fn test_unknown_language_is_config_error() {
        let catalog = ConverterCatalog::with_builtins();
        let err = catalog.converter("cobol").err().unwrap();
        assert!(matches!(err, ResolveError::Config(_)));
        assert!(err.to_string().contains("cobol"));
        assert!(err.to_string().contains("java"));
    }

    struct FixedConverter;
    impl TypeConverter for FixedConverter {
        fn language(&self) -> &str {
            "fixed"
        }

        fn resolve(&self, info: &AttributeTypeInfo) -> crate::error::Result<LanguageType> {
            match info.neutral_type {
                NeutralType::Int => Ok(LanguageType::object("FixedInt", "fixed.FixedInt")),
                other => Err(ResolveError::Config(format!(
                    "No language type mapping for neutral type '{}' in language 'fixed'",
                    other
                ))),
            }
        }
    }

    #[test]
    fn test_custom_converter_registration_and_partial_mapping() {
        let mut catalog = ConverterCatalog::new();
        catalog.register(Arc::new(FixedConverter));

        let conv = catalog.converter("fixed").unwrap();
        let t = conv.resolve(&AttributeTypeInfo::new(NeutralType::Int)).unwrap();
        assert_eq!(t.simple_type, "FixedInt");

        let err = conv
            .resolve(&AttributeTypeInfo::new(NeutralType::Date))
            .unwrap_err();
        assert!(matches!(err, ResolveError::Config(_)));
    }
}
