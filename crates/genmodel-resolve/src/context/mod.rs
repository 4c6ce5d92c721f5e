//! Per-attribute resolution contexts and renderer-facing helpers.
//!
//! [`AttributeContext`] is the unit queried by the template renderer. The
//! free functions below render common argument-list shapes over slices of
//! contexts, so templates do not re-implement comma joining.

mod attribute;
pub mod fk;
pub mod generated;

pub use attribute::AttributeContext;
pub use generated::{
    resolve_generated_value, resolve_sequence_generator, resolve_table_generator, GeneratedValue,
    SequenceGeneratorInfo, TableGeneratorInfo,
};

use crate::error::Result;

/// Comma-separated attribute names: `id, firstName, age`.
pub fn arguments_list(fields: &[AttributeContext]) -> String {
    fields
        .iter()
        .map(|f| f.name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated `type name` pairs: `int id, String firstName`.
pub fn arguments_list_with_type(fields: &[AttributeContext]) -> Result<String> {
    let mut parts = Vec::with_capacity(fields.len());
    for field in fields {
        parts.push(format!("{} {}", field.type_name()?, field.name()));
    }
    Ok(parts.join(", "))
}

/// Comma-separated `wrapper name` pairs: `Integer id, String firstName`.
pub fn arguments_list_with_wrapper_type(fields: &[AttributeContext]) -> Result<String> {
    let mut parts = Vec::with_capacity(fields.len());
    for field in fields {
        parts.push(format!("{} {}", field.wrapper_type()?, field.name()));
    }
    Ok(parts.join(", "))
}

/// Comma-separated getter calls on an object: `person.getId(), person.getAge()`.
pub fn arguments_list_with_getter(
    object_name: &str,
    fields: &[AttributeContext],
) -> Result<String> {
    let mut parts = Vec::with_capacity(fields.len());
    for field in fields {
        parts.push(format!("{}.{}()", object_name, field.getter()?));
    }
    Ok(parts.join(", "))
}

/// Copy of `fields` without the attributes whose names appear in `names`.
pub fn remove_from_list<'a>(
    fields: &'a [AttributeContext],
    names: &[&str],
) -> Vec<&'a AttributeContext> {
    fields
        .iter()
        .filter(|f| !names.contains(&f.name()))
        .collect()
}
