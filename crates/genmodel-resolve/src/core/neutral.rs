//! Neutral attribute classification types shared across the resolution core.
//!
//! The neutral type is the storage- and language-agnostic classification of
//! an attribute's data. Every resolver in this crate starts from it: the
//! language resolver maps it to a concrete target-language type, the SQL
//! type provider maps it to a dialect-specific column type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract, storage-agnostic classification of an attribute's data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralType {
    /// Character string.
    #[default]
    String,
    /// Boolean flag.
    Boolean,
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Exact decimal number.
    Decimal,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    Timestamp,
    /// Raw binary data.
    Binary,
}

impl NeutralType {
    /// Every neutral type known to the catalog, in declaration order.
    pub const ALL: [NeutralType; 13] = [
        NeutralType::String,
        NeutralType::Boolean,
        NeutralType::Byte,
        NeutralType::Short,
        NeutralType::Int,
        NeutralType::Long,
        NeutralType::Float,
        NeutralType::Double,
        NeutralType::Decimal,
        NeutralType::Date,
        NeutralType::Time,
        NeutralType::Timestamp,
        NeutralType::Binary,
    ];

    /// Lowercase name as it appears in model files.
    pub fn as_str(&self) -> &'static str {
        match self {
            NeutralType::String => "string",
            NeutralType::Boolean => "boolean",
            NeutralType::Byte => "byte",
            NeutralType::Short => "short",
            NeutralType::Int => "int",
            NeutralType::Long => "long",
            NeutralType::Float => "float",
            NeutralType::Double => "double",
            NeutralType::Decimal => "decimal",
            NeutralType::Date => "date",
            NeutralType::Time => "time",
            NeutralType::Timestamp => "timestamp",
            NeutralType::Binary => "binary",
        }
    }

    /// True for byte, short, int, long, float, double and decimal.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            NeutralType::Byte
                | NeutralType::Short
                | NeutralType::Int
                | NeutralType::Long
                | NeutralType::Float
                | NeutralType::Double
                | NeutralType::Decimal
        )
    }

    /// True for date, time and timestamp.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            NeutralType::Date | NeutralType::Time | NeutralType::Timestamp
        )
    }
}

impl fmt::Display for NeutralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date/time precision carried by a temporal attribute.
///
/// Only meaningful when the neutral type is date, time or timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    /// Date without time of day.
    DateOnly,
    /// Time of day without date.
    TimeOnly,
    /// Both date and time of day.
    DateAndTime,
    /// Not specified in the model.
    #[default]
    Undefined,
}

/// Three-valued flag: true, false, or explicitly undefined.
///
/// Distinct from `Option<bool>` coerced to a default: the undefined state
/// must render differently than an explicit false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    True,
    False,
    #[default]
    Undefined,
}

impl TriState {
    /// Rendered form: `"true"`, `"false"` or `"undefined"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::True => "true",
            TriState::False => "false",
            TriState::Undefined => "undefined",
        }
    }

    /// True only when the flag holds the given explicit value.
    ///
    /// An undefined flag matches neither `true` nor `false`.
    pub fn is(&self, value: bool) -> bool {
        match self {
            TriState::True => value,
            TriState::False => !value,
            TriState::Undefined => false,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity-generation strategies known to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStrategy {
    /// Let the persistence layer pick a strategy.
    Auto,
    /// Database identity column.
    Identity,
    /// Database sequence.
    Sequence,
    /// Table-based counter.
    Table,
}

impl GenerationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStrategy::Auto => "auto",
            GenerationStrategy::Identity => "identity",
            GenerationStrategy::Sequence => "sequence",
            GenerationStrategy::Table => "table",
        }
    }
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
