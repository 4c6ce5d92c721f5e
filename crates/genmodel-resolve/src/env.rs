//! The active generation environment.
//!
//! One [`Env`] value is built per generation run from a [`GeneratorConfig`]
//! and injected into every attribute context. It bundles the selected target
//! language and database dialect with the registries the resolvers need:
//! the converter catalog and the vendor type-code catalog. Both are owned
//! here and read-only during resolution, so the environment is shared freely
//! across threads.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::core::neutral::NeutralType;
use crate::error::Result;
use crate::lang::{ConverterCatalog, TypeConverter};
use crate::sqltype::TypeCodeCatalog;

/// Active generation environment: target language, target database and the
/// injected lookup catalogs.
#[derive(Debug)]
pub struct Env {
    language: String,
    database: String,
    database_types_mapping: HashMap<NeutralType, String>,
    converters: ConverterCatalog,
    type_codes: TypeCodeCatalog,
}

impl Env {
    /// Environment with default settings (Java, generic SQL defaults).
    pub fn new() -> Self {
        Self::from_config(GeneratorConfig::default())
    }

    /// Build an environment from user configuration, registering the
    /// built-in converters and the standard type-code catalog.
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self {
            language: config.language,
            database: config.database,
            database_types_mapping: config.database_types_mapping,
            converters: ConverterCatalog::with_builtins(),
            type_codes: TypeCodeCatalog::standard(),
        }
    }

    /// Replace the type-code catalog (test doubles, vendor-specific sets).
    pub fn with_type_codes(mut self, type_codes: TypeCodeCatalog) -> Self {
        self.type_codes = type_codes;
        self
    }

    /// Register an additional type converter.
    pub fn register_converter(&mut self, converter: Arc<dyn TypeConverter>) {
        self.converters.register(converter);
    }

    /// Selected target language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Selected target database dialect; empty means generic defaults.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The converter for the selected target language.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no converter is registered for
    /// the selected language.
    pub fn type_converter(&self) -> Result<Arc<dyn TypeConverter>> {
        self.converters.converter(&self.language)
    }

    /// User override for a neutral type, if one was configured.
    pub fn type_mapping(&self, neutral: NeutralType) -> Option<&str> {
        self.database_types_mapping.get(&neutral).map(String::as_str)
    }

    /// The injected vendor type-code catalog.
    pub fn type_codes(&self) -> &TypeCodeCatalog {
        &self.type_codes
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
