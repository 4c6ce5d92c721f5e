//! TypeScript type converter.
//!
//! All numeric neutral types collapse onto `number`; `string`, `number` and
//! `boolean` are language primitives with `String`/`Number`/`Boolean` object
//! wrappers. Temporal types map to `Date`. The primitive/object/unsigned
//! hints have no effect: the language offers no alternative spellings worth
//! emitting.

use crate::core::neutral::NeutralType;
use crate::error::Result;

use super::{AttributeTypeInfo, LanguageType, TypeConverter};

/// Type converter for the TypeScript language.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptTypeConverter;

impl TypeScriptTypeConverter {
    pub fn new() -> Self {
        Self
    }
}

impl TypeConverter for TypeScriptTypeConverter {
    fn language(&self) -> &str {
        "typescript"
    }

    fn resolve(&self, info: &AttributeTypeInfo) -> Result<LanguageType> {
        let t = match info.neutral_type {
            NeutralType::String => LanguageType::primitive("string", "string", "String"),
            NeutralType::Boolean => LanguageType::primitive("boolean", "boolean", "Boolean"),
            NeutralType::Byte
            | NeutralType::Short
            | NeutralType::Int
            | NeutralType::Long
            | NeutralType::Float
            | NeutralType::Double
            | NeutralType::Decimal => LanguageType::primitive("number", "number", "Number"),
            NeutralType::Date | NeutralType::Time | NeutralType::Timestamp => {
                LanguageType::object("Date", "Date")
            }
            NeutralType::Binary => LanguageType::object("Uint8Array", "Uint8Array"),
        };
        Ok(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(nt: NeutralType) -> LanguageType {
        TypeScriptTypeConverter::new()
            .resolve(&AttributeTypeInfo::new(nt))
            .unwrap()
    }

    #[test]
    fn test_numbers_collapse() {
        for nt in [
            NeutralType::Byte,
            NeutralType::Short,
            NeutralType::Int,
            NeutralType::Long,
            NeutralType::Float,
            NeutralType::Double,
            NeutralType::Decimal,
        ] {
            let t = resolve(nt);
            assert_eq!(t.simple_type, "number");
            assert_eq!(t.wrapper_type, "Number");
            assert!(t.is_primitive);
        }
    }

    #[test]
    fn test_temporals_are_date() {
        assert_eq!(resolve(NeutralType::Date).simple_type, "Date");
        assert_eq!(resolve(NeutralType::Timestamp).simple_type, "Date");
        assert!(!resolve(NeutralType::Time).is_primitive);
    }

    #[test]
    fn test_total_over_catalog_with_consistent_wrappers() {
        for nt in NeutralType::ALL {
            let t = resolve(nt);
            assert!(!t.simple_type.is_empty());
            if !t.is_primitive {
                assert_eq!(t.wrapper_type, t.simple_type);
            }
        }
    }
}
