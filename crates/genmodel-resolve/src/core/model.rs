//! Neutral-model metadata types for entities and attributes.
//!
//! These types are the data contract with the external model loader: every
//! optional scalar is an `Option` (or carries a `#[serde(default)]`) so that
//! "not specified" survives deserialization unchanged instead of collapsing
//! into a default the renderer cannot distinguish.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::neutral::{DateKind, GenerationStrategy, NeutralType, TriState};
use crate::error::{ResolveError, Result};

/// One column's contribution to a foreign key.
///
/// A pure value copied verbatim from the raw model at construction time;
/// it carries no resolution logic of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKeyPart {
    /// Name of the foreign key this part belongs to.
    pub fk_name: String,

    /// Local column implementing this part.
    pub column: String,

    /// Referenced entity (class name).
    pub referenced_entity: String,

    /// Referenced column in the referenced entity.
    pub referenced_column: String,
}

/// Sequence-based generator descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceGenerator {
    /// Generator name.
    pub name: String,

    /// Database sequence name.
    pub sequence_name: String,

    /// Allocation size, when specified.
    pub allocation_size: Option<i32>,
}

/// Table-based counter generator descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableGenerator {
    /// Generator name.
    pub name: String,

    /// Table holding the counters.
    pub table: String,

    /// Primary key column of the counter table.
    pub pk_column_name: String,

    /// Column storing the last generated value.
    pub value_column_name: String,

    /// Primary key value distinguishing this counter row.
    pub pk_column_value: String,
}

/// Raw attribute metadata as supplied by the model loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    /// Attribute name (non-empty).
    pub name: String,

    /// Neutral type classification.
    pub neutral_type: NeutralType,

    // ===== Value constraints =====
    /// Not-null validation rule.
    pub not_null: bool,

    /// Not-empty validation rule (strings).
    pub not_empty: bool,

    /// Not-blank validation rule (strings).
    pub not_blank: bool,

    /// Minimum length (strings).
    pub min_length: Option<u32>,

    /// Maximum length (strings).
    pub max_length: Option<u32>,

    /// Regular-expression pattern (strings).
    pub pattern: Option<String>,

    /// Minimum value (numbers).
    pub min_value: Option<Decimal>,

    /// Maximum value (numbers).
    pub max_value: Option<Decimal>,

    /// Initial value for new instances.
    pub initial_value: Option<String>,

    /// Default value.
    pub default_value: Option<String>,

    /// Display label.
    pub label: Option<String>,

    /// Input type hint (e.g. for HTML forms).
    pub input_type: Option<String>,

    /// Long text stored as CLOB/BLOB rather than a classical string.
    pub is_long_text: bool,

    /// Selection flag set by the model editor.
    pub is_selected: bool,

    // ===== Type-shaping hints =====
    /// Prefer the primitive spelling in languages that have one.
    pub prefer_primitive_type: bool,

    /// Prefer the boxed/object spelling in languages that have one.
    pub prefer_object_type: bool,

    /// Prefer an unsigned spelling in languages that have one.
    pub prefer_unsigned_type: bool,

    // ===== Temporal constraints =====
    /// Date/time precision.
    pub date_kind: DateKind,

    /// Must be a date in the past.
    pub is_date_past: bool,

    /// Must be a date in the future.
    pub is_date_future: bool,

    /// Must be before this date value.
    pub date_before_value: Option<String>,

    /// Must be after this date value.
    pub date_after_value: Option<String>,

    // ===== Boolean literal mapping =====
    /// Persisted representation of `true` (e.g. "1", "Yes").
    pub boolean_true_value: Option<String>,

    /// Persisted representation of `false` (e.g. "0", "No").
    pub boolean_false_value: Option<String>,

    // ===== Database mapping =====
    /// Column name in the database table.
    pub database_name: Option<String>,

    /// Native vendor type name (e.g. "VARCHAR", "NUMBER").
    pub database_type: Option<String>,

    /// Column size, possibly "precision,scale" for numeric types.
    pub database_size: Option<String>,

    /// Column comment.
    pub database_comment: Option<String>,

    /// Column default value.
    pub database_default_value: Option<String>,

    /// NOT NULL in the database.
    pub database_not_null: bool,

    /// Auto-incremented by the database engine.
    pub is_auto_incremented: bool,

    /// Vendor-neutral numeric type code.
    pub database_type_code: Option<i32>,

    /// Symbolic name recorded for the type code.
    pub database_type_name: Option<String>,

    /// Primary key (or part of it) in the database.
    pub is_key_element: bool,

    // ===== Foreign keys =====
    /// Used in at least one foreign key.
    pub is_fk: bool,

    /// The foreign key is based on this single attribute.
    pub is_fk_simple: bool,

    /// Part of a foreign key spanning several attributes.
    pub is_fk_composite: bool,

    /// Class name of the referenced entity. Best-effort: resolved lazily
    /// against the model index, and not guaranteed to agree with `fk_parts`.
    pub referenced_entity_class_name: Option<String>,

    /// Foreign key parts this attribute participates in, in model order.
    pub fk_parts: Vec<ForeignKeyPart>,

    // ===== Generated value =====
    /// Value produced automatically on insert.
    pub is_generated_value: bool,

    /// Configured generation strategy, `None` when unset.
    pub generated_value_strategy: Option<GenerationStrategy>,

    /// Configured generator name.
    pub generated_value_generator: Option<String>,

    /// Sequence generator descriptor, when present.
    pub sequence_generator: Option<SequenceGenerator>,

    /// Table generator descriptor, when present.
    pub table_generator: Option<TableGenerator>,

    // ===== Persistence flags =====
    /// Insertable flag (true / false / undefined).
    pub insertable: TriState,

    /// Updatable flag (true / false / undefined).
    pub updatable: TriState,

    /// Excluded from persistence mapping.
    pub is_transient: bool,

    // ===== Link usage (computed upstream from the relationship graph) =====
    pub is_used_in_links: bool,
    pub is_used_in_selected_links: bool,

    /// Explicit SQL type override; wins over any inference.
    pub sql_type: Option<String>,

    /// Free-form tags attached by model authors.
    pub tags: HashMap<String, String>,
}

impl Attribute {
    /// Check the attribute's internal consistency.
    ///
    /// Rejects empty names, foreign-key classification flags that disagree
    /// with each other, and attributes carrying both generator descriptors.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ResolveError::Config(
                "Attribute name cannot be empty".to_string(),
            ));
        }
        if self.is_fk != (self.is_fk_simple || self.is_fk_composite) {
            return Err(ResolveError::Config(format!(
                "Attribute '{}': foreign key flags are inconsistent",
                self.name
            )));
        }
        if self.sequence_generator.is_some() && self.table_generator.is_some() {
            return Err(ResolveError::Config(format!(
                "Attribute '{}': at most one generator descriptor is allowed",
                self.name
            )));
        }
        Ok(())
    }
}

/// Entity metadata: a class name and its ordered attributes.
///
/// Relationship links are an external concern; their effect arrives
/// pre-computed in the attributes' link-usage flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Class name, the key used for cross-entity references.
    pub class_name: String,

    /// Attributes in model order.
    pub attributes: Vec<Attribute>,
}

impl Entity {
    /// Find an attribute by name.
    pub fn attribute_by_name(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Attributes flagged as primary key elements, in model order.
    pub fn key_attributes(&self) -> Vec<&Attribute> {
        self.attributes.iter().filter(|a| a.is_key_element).collect()
    }
}

/// The full neutral model: entities indexed by class name.
///
/// The index is built once at construction and read-only afterwards, so
/// concurrent lookups during resolution need no synchronization. Entities
/// reference each other by class name only; there are no ownership pointers
/// between them, which keeps mutually referencing entities constructible.
#[derive(Debug, Clone, Default)]
pub struct Model {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl Model {
    /// Build a model from loaded entities, indexing them by class name.
    pub fn new(entities: Vec<Entity>) -> Self {
        let index = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.class_name.clone(), i))
            .collect();
        Self { entities, index }
    }

    /// All entities in load order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up an entity by class name.
    pub fn entity_by_class_name(&self, class_name: &str) -> Option<&Entity> {
        self.index.get(class_name).map(|&i| &self.entities[i])
    }

    /// Validate every attribute of every entity.
    pub fn validate(&self) -> Result<()> {
        for entity in &self.entities {
            if entity.class_name.is_empty() {
                return Err(ResolveError::Config(
                    "Entity class name cannot be empty".to_string(),
                ));
            }
            for attribute in &entity.attributes {
                attribute.validate()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_attribute(name: &str, neutral_type: NeutralType) -> Attribute {
        Attribute {
            name: name.to_string(),
            neutral_type,
            ..Attribute::default()
        }
    }

    #[test]
    fn test_neutral_type_defaults_to_string() {
        let attr = Attribute {
            name: "code".to_string(),
            ..Attribute::default()
        };
        assert_eq!(attr.neutral_type, NeutralType::String);
    }

    #[test]
    fn test_model_index_lookup() {
        let model = Model::new(vec![
            Entity {
                class_name: "Author".to_string(),
                attributes: vec![make_test_attribute("id", NeutralType::Int)],
            },
            Entity {
                class_name: "Book".to_string(),
                attributes: vec![],
            },
        ]);

        assert_eq!(model.entities().len(), 2);
        assert_eq!(
            model.entity_by_class_name("Author").unwrap().class_name,
            "Author"
        );
        assert!(model.entity_by_class_name("Publisher").is_none());
    }

    #[test]
    fn test_entity_key_attributes() {
        let mut id = make_test_attribute("id", NeutralType::Long);
        id.is_key_element = true;
        let entity = Entity {
            class_name: "Book".to_string(),
            attributes: vec![id, make_test_attribute("title", NeutralType::String)],
        };
        let keys = entity.key_attributes();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].name, "id");
        assert!(entity.attribute_by_name("title").is_some());
        assert!(entity.attribute_by_name("isbn").is_none());
    }

    #[test]
    fn test_validate_rejects_inconsistent_fk_flags() {
        let mut attr = make_test_attribute("authorId", NeutralType::Int);
        attr.is_fk = true;
        assert!(attr.validate().is_err());

        attr.is_fk_simple = true;
        assert!(attr.validate().is_ok());

        attr.is_fk = false;
        assert!(attr.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_both_generators() {
        let mut attr = make_test_attribute("id", NeutralType::Long);
        attr.sequence_generator = Some(SequenceGenerator::default());
        assert!(attr.validate().is_ok());

        attr.table_generator = Some(TableGenerator::default());
        assert!(attr.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let attr = Attribute::default();
        assert!(attr.validate().is_err());
    }

    #[test]
    fn test_attribute_deserializes_with_defaults() {
        let yaml = "name: age\nneutral_type: int\nmax_length: 3\n";
        let attr: Attribute = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(attr.name, "age");
        assert_eq!(attr.neutral_type, NeutralType::Int);
        assert_eq!(attr.max_length, Some(3));
        assert_eq!(attr.insertable, TriState::Undefined);
        assert_eq!(attr.updatable, TriState::Undefined);
        assert!(attr.fk_parts.is_empty());
        assert!(attr.sequence_generator.is_none());
    }
}
