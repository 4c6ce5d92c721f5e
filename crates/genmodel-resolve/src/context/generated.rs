//! Generated-value resolution.
//!
//! The precedence rule lives in one decision function so it can be verified
//! in isolation: database auto-increment always wins over any explicitly
//! configured strategy, and "configured but empty" stays observably distinct
//! from "not generated at all".

use crate::core::model::Attribute;

/// Resolved identity-generation metadata for one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedValue {
    /// The value is produced automatically on insert.
    pub is_generated: bool,

    /// Strategy name; empty for the default strategy and when not generated.
    pub strategy: String,

    /// Generator name; empty when none is configured.
    pub generator: String,
}

/// Decide the generation strategy for an attribute, in strict priority order:
///
/// 1. database auto-increment: generated with the default strategy and no
///    generator name, whatever else is configured;
/// 2. explicit generation flag: the configured strategy and generator names
///    (either may be empty when unset);
/// 3. otherwise not generated, all fields empty.
pub fn resolve_generated_value(attribute: &Attribute) -> GeneratedValue {
    if attribute.is_auto_incremented {
        return GeneratedValue {
            is_generated: true,
            strategy: String::new(),
            generator: String::new(),
        };
    }
    if attribute.is_generated_value {
        return GeneratedValue {
            is_generated: true,
            strategy: attribute
                .generated_value_strategy
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            generator: attribute.generated_value_generator.clone().unwrap_or_default(),
        };
    }
    GeneratedValue::default()
}

/// Resolved sequence-generator fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGeneratorInfo {
    /// A sequence-generator block is present in the model.
    pub present: bool,

    /// Generator name.
    pub name: String,

    /// Database sequence name.
    pub sequence_name: String,

    /// Allocation size: the configured value, 0 when the block is present
    /// but leaves it unset, and -1 when there is no block at all.
    pub allocation_size: i32,
}

/// Resolve the sequence-generator descriptor by presence check.
pub fn resolve_sequence_generator(attribute: &Attribute) -> SequenceGeneratorInfo {
    match &attribute.sequence_generator {
        Some(sg) => SequenceGeneratorInfo {
            present: true,
            name: sg.name.clone(),
            sequence_name: sg.sequence_name.clone(),
            allocation_size: sg.allocation_size.unwrap_or(0),
        },
        None => SequenceGeneratorInfo {
            present: false,
            name: String::new(),
            sequence_name: String::new(),
            allocation_size: -1,
        },
    }
}

/// Resolved table-generator fields; all empty when no block is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableGeneratorInfo {
    /// A table-generator block is present in the model.
    pub present: bool,

    pub name: String,
    pub table: String,
    pub pk_column_name: String,
    pub value_column_name: String,
    pub pk_column_value: String,
}

/// Resolve the table-generator descriptor by presence check.
pub fn resolve_table_generator(attribute: &Attribute) -> TableGeneratorInfo {
    match &attribute.table_generator {
        Some(tg) => TableGeneratorInfo {
            present: true,
            name: tg.name.clone(),
            table: tg.table.clone(),
            pk_column_name: tg.pk_column_name.clone(),
            value_column_name: tg.value_column_name.clone(),
            pk_column_value: tg.pk_column_value.clone(),
        },
        None => TableGeneratorInfo::default(),
    }
}
