//! Target-language type resolution.
//!
//! Maps a neutral type plus the constraints that shape type choice onto a
//! concrete [`LanguageType`] for one target language. Each supported
//! language is one [`TypeConverter`] implementation behind the shared
//! contract; implementations are registered in a [`ConverterCatalog`] and
//! selected through the environment.
//!
//! The resolver always computes all three spellings (simple, full, wrapper)
//! plus the primitive flag; which spelling gets rendered is the caller's
//! choice, per query.

mod catalog;
mod java;
mod typescript;

pub use catalog::ConverterCatalog;
pub use java::JavaTypeConverter;
pub use typescript::TypeScriptTypeConverter;

use crate::core::model::Attribute;
use crate::core::neutral::NeutralType;
use crate::error::Result;

/// Concrete type representation for one target language.
///
/// Produced fresh per resolution call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageType {
    /// Short, unqualified spelling (e.g. "int", "BigDecimal").
    pub simple_type: String,

    /// Fully qualified spelling (e.g. "java.math.BigDecimal").
    pub full_type: String,

    /// Boxed/object counterpart of a primitive-like type.
    ///
    /// Equals `simple_type` whenever `is_primitive` is false.
    pub wrapper_type: String,

    /// Whether the spelling is a language primitive.
    pub is_primitive: bool,
}

impl LanguageType {
    /// Build a primitive type with its wrapper spelling.
    pub fn primitive(
        simple: impl Into<String>,
        full: impl Into<String>,
        wrapper: impl Into<String>,
    ) -> Self {
        Self {
            simple_type: simple.into(),
            full_type: full.into(),
            wrapper_type: wrapper.into(),
            is_primitive: true,
        }
    }

    /// Build an object type; the wrapper spelling is the type itself.
    pub fn object(simple: impl Into<String>, full: impl Into<String>) -> Self {
        let simple = simple.into();
        Self {
            wrapper_type: simple.clone(),
            simple_type: simple,
            full_type: full.into(),
            is_primitive: false,
        }
    }
}

/// The inputs that shape type choice for one attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeTypeInfo {
    /// Neutral type classification.
    pub neutral_type: NeutralType,

    /// Not-null constraint; forces the primitive spelling where one exists.
    pub not_null: bool,

    /// Model hint: prefer the primitive spelling.
    pub prefer_primitive_type: bool,

    /// Model hint: prefer the boxed/object spelling.
    pub prefer_object_type: bool,

    /// Model hint: prefer an unsigned spelling where the language has one.
    pub prefer_unsigned_type: bool,
}

impl AttributeTypeInfo {
    /// Type info with a neutral type and no constraints.
    pub fn new(neutral_type: NeutralType) -> Self {
        Self {
            neutral_type,
            ..Self::default()
        }
    }

    /// Extract the type-shaping fields from a raw attribute.
    pub fn from_attribute(attribute: &Attribute) -> Self {
        Self {
            neutral_type: attribute.neutral_type,
            not_null: attribute.not_null,
            prefer_primitive_type: attribute.prefer_primitive_type,
            prefer_object_type: attribute.prefer_object_type,
            prefer_unsigned_type: attribute.prefer_unsigned_type,
        }
    }
}

/// Resolve neutral types to concrete types for one target language.
///
/// Implementations must be pure and total over the neutral-type catalog;
/// a missing mapping is a fatal configuration error, never a silent default.
pub trait TypeConverter: Send + Sync {
    /// Language identifier this converter serves (e.g. "java").
    fn language(&self) -> &str;

    /// Resolve a language type for the given attribute type info.
    fn resolve(&self, info: &AttributeTypeInfo) -> Result<LanguageType>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_wrapper_equals_simple() {
        let t = LanguageType::object("String", "java.lang.String");
        assert!(!t.is_primitive);
        assert_eq!(t.wrapper_type, t.simple_type);
        assert_eq!(t.full_type, "java.lang.String");
    }

    #[test]
    fn test_primitive_carries_distinct_wrapper() {
        let t = LanguageType::primitive("int", "int", "Integer");
        assert!(t.is_primitive);
        assert_eq!(t.simple_type, "int");
        assert_eq!(t.wrapper_type, "Integer");
    }

    #[test]
    fn test_type_info_from_attribute() {
        let attr = Attribute {
            name: "age".to_string(),
            neutral_type: NeutralType::Int,
            not_null: true,
            prefer_object_type: true,
            ..Attribute::default()
        };
        let info = AttributeTypeInfo::from_attribute(&attr);
        assert_eq!(info.neutral_type, NeutralType::Int);
        assert!(info.not_null);
        assert!(info.prefer_object_type);
        assert!(!info.prefer_primitive_type);
    }
}
