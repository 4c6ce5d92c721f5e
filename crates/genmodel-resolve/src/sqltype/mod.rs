//! SQL type resolution.
//!
//! Produces the textual SQL type to emit for an attribute in the selected
//! target-database dialect. An explicit per-attribute override wins
//! verbatim; otherwise the base type is inferred from the neutral type
//! (user mapping table first, then the dialect table, then generic ANSI
//! defaults) and a `(size)` suffix is appended when the base type is
//! size-bearing and the attribute supplies a size.

mod dialects;
mod typecode;

pub use dialects::{dialect_type, generic_type, KNOWN_DIALECTS};
pub use typecode::{TypeCodeCatalog, TypeCodeEntry};

use crate::core::model::Attribute;
use crate::env::Env;

/// Size-suffix classification of a base SQL type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeFamily {
    /// Character types sized by length (VARCHAR, VARCHAR2, CHAR, ...).
    Char,
    /// Exact numeric types sized by precision/scale (DECIMAL, NUMERIC, NUMBER).
    Numeric,
    /// Types rendered bare.
    None,
}

fn size_family(type_name: &str) -> SizeFamily {
    let upper = type_name.to_uppercase();
    // VARCHAR and VARCHAR2 both contain CHAR, so one substring test covers
    // the whole character family.
    if upper.contains("CHAR") {
        SizeFamily::Char
    } else if upper.contains("DECIMAL") || upper.contains("NUMERIC") || upper.contains("NUMBER") {
        SizeFamily::Numeric
    } else {
        SizeFamily::None
    }
}

/// True when the type name belongs to a family rendered with a size suffix.
pub fn is_size_bearing(type_name: &str) -> bool {
    size_family(type_name) != SizeFamily::None
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Resolve the SQL type for an attribute against the environment.
///
/// Total: every neutral type has at least a generic fallback, so inference
/// cannot fail (unlike language-type resolution, which is configuration).
pub fn resolve(attribute: &Attribute, env: &Env) -> String {
    if let Some(explicit) = non_blank(attribute.sql_type.as_ref()) {
        return explicit.to_string();
    }

    let neutral = attribute.neutral_type;
    let base = env
        .type_mapping(neutral)
        .map(str::to_string)
        .or_else(|| dialect_type(env.database(), neutral).map(str::to_string))
        .unwrap_or_else(|| generic_type(neutral).to_string());

    let size = match size_family(&base) {
        SizeFamily::Char => attribute
            .max_length
            .map(|n| n.to_string())
            .or_else(|| non_blank(attribute.database_size.as_ref()).map(str::to_string)),
        SizeFamily::Numeric => non_blank(attribute.database_size.as_ref()).map(str::to_string),
        SizeFamily::None => None,
    };

    match size {
        Some(size) => format!("{}({})", base, size),
        None => base,
    }
}

/// Render the native database type with its size when the type calls for one.
///
/// `"VARCHAR"` + size `"24"` gives `"VARCHAR(24)"`; a size-bearing type
/// without a recorded size, or a type outside the sized families, is
/// returned bare. An attribute without a native type gives `""`.
pub fn native_type_with_size(attribute: &Attribute) -> String {
    let Some(db_type) = non_blank(attribute.database_type.as_ref()) else {
        return String::new();
    };
    if is_size_bearing(db_type) {
        if let Some(size) = non_blank(attribute.database_size.as_ref()) {
            return format!("{}({})", db_type, size);
        }
    }
    db_type.to_string()
}
