//! Java type converter.
//!
//! Primitive-capable neutral types resolve to the primitive spelling by
//! default; an object-type hint boxes them, and a not-null constraint forces
//! the primitive spelling back (a primitive cannot hold null, so it is the
//! strictest faithful representation). Java has no unsigned types, so the
//! unsigned hint is ignored.

use crate::core::neutral::NeutralType;
use crate::error::Result;

use super::{AttributeTypeInfo, LanguageType, TypeConverter};

/// Type converter for the Java language.
#[derive(Debug, Clone, Default)]
pub struct JavaTypeConverter;

impl JavaTypeConverter {
    pub fn new() -> Self {
        Self
    }

    fn primitive_or_boxed(
        info: &AttributeTypeInfo,
        primitive: &str,
        wrapper: &str,
        full_wrapper: &str,
    ) -> LanguageType {
        let boxed = info.prefer_object_type && !info.not_null && !info.prefer_primitive_type;
        if boxed {
            LanguageType::object(wrapper, full_wrapper)
        } else {
            LanguageType::primitive(primitive, primitive, wrapper)
        }
    }
}

impl TypeConverter for JavaTypeConverter {
    fn language(&self) -> &str {
        "java"
    }

    fn resolve(&self, info: &AttributeTypeInfo) -> Result<LanguageType> {
        let t = match info.neutral_type {
            NeutralType::String => LanguageType::object("String", "java.lang.String"),
            NeutralType::Boolean => {
                Self::primitive_or_boxed(info, "boolean", "Boolean", "java.lang.Boolean")
            }
            NeutralType::Byte => Self::primitive_or_boxed(info, "byte", "Byte", "java.lang.Byte"),
            NeutralType::Short => {
                Self::primitive_or_boxed(info, "short", "Short", "java.lang.Short")
            }
            NeutralType::Int => {
                Self::primitive_or_boxed(info, "int", "Integer", "java.lang.Integer")
            }
            NeutralType::Long => Self::primitive_or_boxed(info, "long", "Long", "java.lang.Long"),
            NeutralType::Float => {
                Self::primitive_or_boxed(info, "float", "Float", "java.lang.Float")
            }
            NeutralType::Double => {
                Self::primitive_or_boxed(info, "double", "Double", "java.lang.Double")
            }
            NeutralType::Decimal => LanguageType::object("BigDecimal", "java.math.BigDecimal"),
            NeutralType::Date => LanguageType::object("LocalDate", "java.time.LocalDate"),
            NeutralType::Time => LanguageType::object("LocalTime", "java.time.LocalTime"),
            NeutralType::Timestamp => {
                LanguageType::object("LocalDateTime", "java.time.LocalDateTime")
            }
            NeutralType::Binary => LanguageType::object("byte[]", "byte[]"),
        };
        Ok(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(info: &AttributeTypeInfo) -> LanguageType {
        JavaTypeConverter::new().resolve(info).unwrap()
    }

    #[test]
    fn test_int_defaults_to_primitive() {
        let t = resolve(&AttributeTypeInfo::new(NeutralType::Int));
        assert_eq!(t.simple_type, "int");
        assert_eq!(t.full_type, "int");
        assert_eq!(t.wrapper_type, "Integer");
        assert!(t.is_primitive);
    }

    #[test]
    fn test_object_hint_boxes_primitives() {
        let info = AttributeTypeInfo {
            prefer_object_type: true,
            ..AttributeTypeInfo::new(NeutralType::Int)
        };
        let t = resolve(&info);
        assert_eq!(t.simple_type, "Integer");
        assert_eq!(t.full_type, "java.lang.Integer");
        assert!(!t.is_primitive);
        assert_eq!(t.wrapper_type, "Integer");
    }

    #[test]
    fn test_not_null_forces_primitive_back() {
        let info = AttributeTypeInfo {
            prefer_object_type: true,
            not_null: true,
            ..AttributeTypeInfo::new(NeutralType::Long)
        };
        let t = resolve(&info);
        assert_eq!(t.simple_type, "long");
        assert!(t.is_primitive);
    }

    #[test]
    fn test_string_and_decimal_are_objects() {
        let s = resolve(&AttributeTypeInfo::new(NeutralType::String));
        assert_eq!(s.simple_type, "String");
        assert_eq!(s.full_type, "java.lang.String");
        assert!(!s.is_primitive);
        assert_eq!(s.wrapper_type, "String");

        let d = resolve(&AttributeTypeInfo::new(NeutralType::Decimal));
        assert_eq!(d.simple_type, "BigDecimal");
        assert_eq!(d.full_type, "java.math.BigDecimal");
    }

    #[test]
    fn test_temporal_types() {
        assert_eq!(
            resolve(&AttributeTypeInfo::new(NeutralType::Date)).full_type,
            "java.time.LocalDate"
        );
        assert_eq!(
            resolve(&AttributeTypeInfo::new(NeutralType::Time)).full_type,
            "java.time.LocalTime"
        );
        assert_eq!(
            resolve(&AttributeTypeInfo::new(NeutralType::Timestamp)).full_type,
            "java.time.LocalDateTime"
        );
    }

    #[test]
    fn test_total_over_catalog_with_consistent_wrappers() {
        for nt in NeutralType::ALL {
            let t = resolve(&AttributeTypeInfo::new(nt));
            assert!(!t.simple_type.is_empty());
            assert!(!t.full_type.is_empty());
            if !t.is_primitive {
                assert_eq!(t.wrapper_type, t.simple_type, "wrapper mismatch for {nt}");
            }
        }
    }
}
