//! # genmodel-resolve
//!
//! Type and constraint resolution core for model-driven code generation.
//!
//! Given a storage-agnostic "neutral model" of an entity's attributes, this
//! library resolves, per attribute:
//!
//! - **Language types** via pluggable per-language converters (simple, full
//!   and wrapper spellings plus a primitive flag)
//! - **SQL types** per target-database dialect, with explicit overrides,
//!   user mapping tables and size suffixing
//! - **Foreign key relationships** against a read-only entity index
//! - **Generated-value metadata** (auto-increment vs. sequence vs. table
//!   generators, with a strict precedence rule)
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use genmodel_resolve::{
//!     Attribute, AttributeContext, Entity, Env, GeneratorConfig, Model, NeutralType,
//! };
//!
//! let entity = Entity {
//!     class_name: "Person".to_string(),
//!     attributes: vec![Attribute {
//!         name: "age".to_string(),
//!         neutral_type: NeutralType::Int,
//!         ..Attribute::default()
//!     }],
//! };
//! let model = Arc::new(Model::new(vec![entity.clone()]));
//! let env = Arc::new(Env::from_config(GeneratorConfig::default()));
//!
//! let ctx = AttributeContext::new(&entity, &entity.attributes[0], model, env);
//! assert_eq!(ctx.simple_type().unwrap(), "int");
//! assert_eq!(ctx.wrapper_type().unwrap(), "Integer");
//! assert_eq!(ctx.getter().unwrap(), "getAge");
//! ```

pub mod config;
pub mod context;
pub mod core;
pub mod env;
pub mod error;
pub mod lang;
pub mod sqltype;

// Re-exports for convenient access
pub use config::GeneratorConfig;
pub use context::{AttributeContext, GeneratedValue};
pub use self::core::format;
pub use self::core::model::{
    Attribute, Entity, ForeignKeyPart, Model, SequenceGenerator, TableGenerator,
};
pub use self::core::neutral::{DateKind, GenerationStrategy, NeutralType, TriState};
pub use env::Env;
pub use error::{ResolveError, Result};
pub use lang::{AttributeTypeInfo, ConverterCatalog, LanguageType, TypeConverter};
pub use sqltype::{TypeCodeCatalog, TypeCodeEntry};
