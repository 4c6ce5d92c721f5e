//! Vendor type-code catalog.
//!
//! Maps vendor-neutral numeric type codes (the JDBC-style constants recorded
//! by database reverse-engineering) to a symbolic name and a recommended
//! default language type. The catalog is injected through the environment,
//! never reached as global state, so tests can substitute fixed mappings.

use std::collections::HashMap;

/// One type-code entry: symbolic name plus recommended language types.
#[derive(Debug, Clone)]
pub struct TypeCodeEntry {
    /// Vendor-neutral numeric code.
    pub code: i32,

    /// Symbolic constant name (e.g. "VARCHAR", "NUMERIC").
    pub name: String,

    /// Recommended language type when the column is nullable.
    pub recommended_type: String,

    /// Recommended language type when the column is NOT NULL.
    pub recommended_type_not_null: String,
}

impl TypeCodeEntry {
    fn new(code: i32, name: &str, recommended: &str, recommended_not_null: &str) -> Self {
        Self {
            code,
            name: name.to_string(),
            recommended_type: recommended.to_string(),
            recommended_type_not_null: recommended_not_null.to_string(),
        }
    }
}

/// Read-only lookup from vendor type code to entry.
#[derive(Debug, Clone)]
pub struct TypeCodeCatalog {
    by_code: HashMap<i32, TypeCodeEntry>,
}

impl TypeCodeCatalog {
    /// Build a catalog from explicit entries.
    pub fn new(entries: Vec<TypeCodeEntry>) -> Self {
        let by_code = entries.into_iter().map(|e| (e.code, e)).collect();
        Self { by_code }
    }

    /// The standard catalog covering the usual JDBC-style codes, with Java
    /// spellings for the recommended types.
    pub fn standard() -> Self {
        Self::new(vec![
            TypeCodeEntry::new(-7, "BIT", "Boolean", "boolean"),
            TypeCodeEntry::new(-6, "TINYINT", "Byte", "byte"),
            TypeCodeEntry::new(5, "SMALLINT", "Short", "short"),
            TypeCodeEntry::new(4, "INTEGER", "Integer", "int"),
            TypeCodeEntry::new(-5, "BIGINT", "Long", "long"),
            TypeCodeEntry::new(6, "FLOAT", "Double", "double"),
            TypeCodeEntry::new(7, "REAL", "Float", "float"),
            TypeCodeEntry::new(8, "DOUBLE", "Double", "double"),
            TypeCodeEntry::new(2, "NUMERIC", "BigDecimal", "BigDecimal"),
            TypeCodeEntry::new(3, "DECIMAL", "BigDecimal", "BigDecimal"),
            TypeCodeEntry::new(1, "CHAR", "String", "String"),
            TypeCodeEntry::new(12, "VARCHAR", "String", "String"),
            TypeCodeEntry::new(-1, "LONGVARCHAR", "String", "String"),
            TypeCodeEntry::new(91, "DATE", "LocalDate", "LocalDate"),
            TypeCodeEntry::new(92, "TIME", "LocalTime", "LocalTime"),
            TypeCodeEntry::new(93, "TIMESTAMP", "LocalDateTime", "LocalDateTime"),
            TypeCodeEntry::new(-2, "BINARY", "byte[]", "byte[]"),
            TypeCodeEntry::new(-3, "VARBINARY", "byte[]", "byte[]"),
            TypeCodeEntry::new(-4, "LONGVARBINARY", "byte[]", "byte[]"),
            TypeCodeEntry::new(16, "BOOLEAN", "Boolean", "boolean"),
        ])
    }

    /// Symbolic name for a code, if known.
    pub fn name_for(&self, code: i32) -> Option<&str> {
        self.by_code.get(&code).map(|e| e.name.as_str())
    }

    /// Recommended default language type for a code.
    ///
    /// The `not_null` flag selects between the nullable and NOT NULL
    /// recommendations (primitive vs boxed for numeric codes).
    pub fn recommended_type(&self, code: i32, not_null: bool) -> Option<&str> {
        self.by_code.get(&code).map(|e| {
            if not_null {
                e.recommended_type_not_null.as_str()
            } else {
                e.recommended_type.as_str()
            }
        })
    }
}

impl Default for TypeCodeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        let catalog = TypeCodeCatalog::standard();
        assert_eq!(catalog.name_for(12), Some("VARCHAR"));
        assert_eq!(catalog.name_for(4), Some("INTEGER"));
        assert_eq!(catalog.name_for(2), Some("NUMERIC"));
        assert_eq!(catalog.name_for(9999), None);
    }

    #[test]
    fn test_recommendation_honors_not_null() {
        let catalog = TypeCodeCatalog::standard();
        assert_eq!(catalog.recommended_type(4, false), Some("Integer"));
        assert_eq!(catalog.recommended_type(4, true), Some("int"));
        assert_eq!(catalog.recommended_type(12, true), Some("String"));
        assert_eq!(catalog.recommended_type(9999, true), None);
    }

    #[test]
    fn test_fixed_catalog_for_doubles() {
        let catalog = TypeCodeCatalog::new(vec![TypeCodeEntry::new(42, "ANSWER", "Answer", "answer")]);
        assert_eq!(catalog.name_for(42), Some("ANSWER"));
        assert_eq!(catalog.name_for(12), None);
    }
}
