//! Per-attribute resolution context.
//!
//! One [`AttributeContext`] is created per attribute per generation run. It
//! snapshots the raw attribute together with references to the owning
//! entity, the model index and the active environment, resolves the
//! generated-value metadata eagerly, and answers every renderer query from
//! immutable state. Type and SQL-type queries go through the resolvers per
//! call; they are cheap and pure, so nothing is cached.
//!
//! The only post-construction mutation is the one-way [`use_full_type`]
//! rendering switch, kept in an atomic so contexts stay shareable across
//! threads.
//!
//! [`use_full_type`]: AttributeContext::use_full_type

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::format;
use crate::core::model::{Attribute, Entity, ForeignKeyPart, Model};
use crate::core::neutral::{DateKind, NeutralType, TriState};
use crate::env::Env;
use crate::error::{ResolveError, Result};
use crate::lang::{AttributeTypeInfo, LanguageType};
use crate::sqltype;

use super::fk;
use super::generated::{
    resolve_generated_value, resolve_sequence_generator, resolve_table_generator, GeneratedValue,
    SequenceGeneratorInfo, TableGeneratorInfo,
};

/// Read-only query API over one attribute, for template renderers.
pub struct AttributeContext {
    attribute: Attribute,
    entity_class_name: String,
    model: Arc<Model>,
    env: Arc<Env>,
    generated: GeneratedValue,
    sequence: SequenceGeneratorInfo,
    table: TableGeneratorInfo,
    use_full_type: AtomicBool,
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn has(value: &Option<String>) -> bool {
    value.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
}

impl AttributeContext {
    /// Wrap a raw attribute of `entity` into a resolution context.
    pub fn new(entity: &Entity, attribute: &Attribute, model: Arc<Model>, env: Arc<Env>) -> Self {
        let generated = resolve_generated_value(attribute);
        let sequence = resolve_sequence_generator(attribute);
        let table = resolve_table_generator(attribute);
        Self {
            attribute: attribute.clone(),
            entity_class_name: entity.class_name.clone(),
            model,
            env,
            generated,
            sequence,
            table,
            use_full_type: AtomicBool::new(false),
        }
    }

    // ===== Identity =====

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.attribute.name
    }

    /// The entity owning this attribute.
    ///
    /// # Errors
    ///
    /// A model-integrity error when the context was paired with a model
    /// that does not contain its owning entity.
    pub fn entity(&self) -> Result<&Entity> {
        self.model
            .entity_by_class_name(&self.entity_class_name)
            .ok_or_else(|| {
                ResolveError::model_integrity(&self.attribute.name, &self.entity_class_name)
            })
    }

    /// Class name of the owning entity.
    pub fn entity_class_name(&self) -> &str {
        &self.entity_class_name
    }

    /// Neutral type as defined in the model.
    pub fn neutral_type(&self) -> NeutralType {
        self.attribute.neutral_type
    }

    /// Attribute name padded with trailing blanks to the expected width.
    pub fn formatted_name(&self, width: usize) -> String {
        format::pad(&self.attribute.name, width)
    }

    // ===== Language type =====

    /// Resolve the language type for this attribute in the active environment.
    ///
    /// # Errors
    ///
    /// A configuration error when the environment has no converter for the
    /// target language or the converter has no mapping for the neutral type.
    pub fn language_type(&self) -> Result<LanguageType> {
        self.env
            .type_converter()
            .and_then(|converter| {
                converter.resolve(&AttributeTypeInfo::from_attribute(&self.attribute))
            })
            .map_err(|e| match e {
                ResolveError::Config(msg) => ResolveError::Config(format!(
                    "attribute '{}.{}': {}",
                    self.entity_class_name, self.attribute.name, msg
                )),
                other => other,
            })
    }

    /// Switch subsequent type queries to the fully qualified spelling.
    ///
    /// One-way and idempotent: a rendering-mode change, not a model change.
    pub fn use_full_type(&self) {
        self.use_full_type.store(true, Ordering::Relaxed);
    }

    /// The type to render: the simple spelling, or the full spelling once
    /// [`use_full_type`](Self::use_full_type) has been called.
    pub fn type_name(&self) -> Result<String> {
        let t = self.language_type()?;
        if self.use_full_type.load(Ordering::Relaxed) {
            Ok(t.full_type)
        } else {
            Ok(t.simple_type)
        }
    }

    /// Simple (unqualified) type spelling.
    pub fn simple_type(&self) -> Result<String> {
        Ok(self.language_type()?.simple_type)
    }

    /// Fully qualified type spelling.
    pub fn full_type(&self) -> Result<String> {
        Ok(self.language_type()?.full_type)
    }

    /// Wrapper spelling of a primitive type; the type itself otherwise.
    pub fn wrapper_type(&self) -> Result<String> {
        Ok(self.language_type()?.wrapper_type)
    }

    /// True when the resolved language type is a primitive.
    pub fn is_primitive_type(&self) -> Result<bool> {
        Ok(self.language_type()?.is_primitive)
    }

    /// Rendered type padded with trailing blanks to the expected width.
    pub fn formatted_type(&self, width: usize) -> Result<String> {
        Ok(format::pad(&self.type_name()?, width))
    }

    /// Wrapper type padded with trailing blanks to the expected width.
    pub fn formatted_wrapper_type(&self, width: usize) -> Result<String> {
        Ok(format::pad(&self.wrapper_type()?, width))
    }

    // ===== Accessors =====

    /// Accessor name: `isFoo` for a primitive boolean, `getFoo` otherwise.
    pub fn getter(&self) -> Result<String> {
        let boolean_primitive = self.is_boolean_type() && self.is_primitive_type()?;
        Ok(format::build_getter(&self.attribute.name, boolean_primitive))
    }

    /// Accessor name with a `get` prefix, even for booleans.
    pub fn getter_with_get_prefix(&self) -> String {
        format::build_getter_plain(&self.attribute.name)
    }

    /// Mutator name: `setFoo`.
    pub fn setter(&self) -> String {
        format::build_setter(&self.attribute.name)
    }

    // ===== Value constraints =====

    pub fn is_not_null(&self) -> bool {
        self.attribute.not_null
    }

    pub fn is_not_empty(&self) -> bool {
        self.attribute.not_empty
    }

    pub fn is_not_blank(&self) -> bool {
        self.attribute.not_blank
    }

    pub fn is_long_text(&self) -> bool {
        self.attribute.is_long_text
    }

    pub fn is_selected(&self) -> bool {
        self.attribute.is_selected
    }

    pub fn is_transient(&self) -> bool {
        self.attribute.is_transient
    }

    pub fn min_length(&self) -> Option<u32> {
        self.attribute.min_length
    }

    pub fn max_length(&self) -> Option<u32> {
        self.attribute.max_length
    }

    pub fn has_pattern(&self) -> bool {
        has(&self.attribute.pattern)
    }

    pub fn pattern(&self) -> &str {
        opt(&self.attribute.pattern)
    }

    pub fn min_value(&self) -> Option<Decimal> {
        self.attribute.min_value
    }

    pub fn max_value(&self) -> Option<Decimal> {
        self.attribute.max_value
    }

    pub fn has_initial_value(&self) -> bool {
        has(&self.attribute.initial_value)
    }

    pub fn initial_value(&self) -> &str {
        opt(&self.attribute.initial_value)
    }

    pub fn has_default_value(&self) -> bool {
        has(&self.attribute.default_value)
    }

    pub fn default_value(&self) -> &str {
        opt(&self.attribute.default_value)
    }

    pub fn has_label(&self) -> bool {
        has(&self.attribute.label)
    }

    pub fn label(&self) -> &str {
        opt(&self.attribute.label)
    }

    pub fn has_input_type(&self) -> bool {
        has(&self.attribute.input_type)
    }

    pub fn input_type(&self) -> &str {
        opt(&self.attribute.input_type)
    }

    // ===== Temporal constraints =====

    pub fn date_kind(&self) -> DateKind {
        self.attribute.date_kind
    }

    pub fn has_date_past_validation(&self) -> bool {
        self.attribute.is_date_past
    }

    pub fn has_date_future_validation(&self) -> bool {
        self.attribute.is_date_future
    }

    pub fn has_date_before_validation(&self) -> bool {
        has(&self.attribute.date_before_value)
    }

    pub fn date_before_value(&self) -> &str {
        opt(&self.attribute.date_before_value)
    }

    pub fn has_date_after_validation(&self) -> bool {
        has(&self.attribute.date_after_value)
    }

    pub fn date_after_value(&self) -> &str {
        opt(&self.attribute.date_after_value)
    }

    // ===== Boolean literal mapping =====

    /// Persisted representation of `true` (e.g. "1", "Yes").
    pub fn boolean_true_value(&self) -> &str {
        opt(&self.attribute.boolean_true_value)
    }

    /// Persisted representation of `false` (e.g. "0", "No").
    pub fn boolean_false_value(&self) -> &str {
        opt(&self.attribute.boolean_false_value)
    }

    // ===== Database mapping =====

    pub fn has_database_name(&self) -> bool {
        has(&self.attribute.database_name)
    }

    pub fn database_name(&self) -> &str {
        opt(&self.attribute.database_name)
    }

    pub fn has_database_type(&self) -> bool {
        has(&self.attribute.database_type)
    }

    /// Native vendor type name as recorded in the model.
    pub fn database_type(&self) -> &str {
        opt(&self.attribute.database_type)
    }

    /// Native vendor type with its size when the type calls for one,
    /// e.g. `VARCHAR(24)`, `NUMBER`, `CHAR(3)`.
    pub fn database_type_with_size(&self) -> String {
        sqltype::native_type_with_size(&self.attribute)
    }

    pub fn database_size(&self) -> &str {
        opt(&self.attribute.database_size)
    }

    pub fn has_database_comment(&self) -> bool {
        has(&self.attribute.database_comment)
    }

    pub fn database_comment(&self) -> &str {
        opt(&self.attribute.database_comment)
    }

    /// True when a database default value is recorded. Auto-incremented
    /// columns report false: the engine supplies the value.
    pub fn has_database_default_value(&self) -> bool {
        if self.attribute.is_auto_incremented {
            return false;
        }
        has(&self.attribute.database_default_value)
    }

    pub fn database_default_value(&self) -> &str {
        opt(&self.attribute.database_default_value)
    }

    pub fn is_database_not_null(&self) -> bool {
        self.attribute.database_not_null
    }

    pub fn is_auto_incremented(&self) -> bool {
        self.attribute.is_auto_incremented
    }

    pub fn is_key_element(&self) -> bool {
        self.attribute.is_key_element
    }

    /// Vendor-neutral numeric type code, 0 when unset.
    pub fn database_type_code(&self) -> i32 {
        self.attribute.database_type_code.unwrap_or(0)
    }

    /// Symbolic name for the type code: the recorded name when present,
    /// otherwise the environment's type-code catalog.
    pub fn database_type_name(&self) -> String {
        if has(&self.attribute.database_type_name) {
            return opt(&self.attribute.database_type_name).to_string();
        }
        self.attribute
            .database_type_code
            .and_then(|code| self.env.type_codes().name_for(code))
            .unwrap_or("")
            .to_string()
    }

    /// Recommended default language type for the bare type code,
    /// independent of the neutral-type path.
    pub fn recommended_type_for_code(&self) -> String {
        self.attribute
            .database_type_code
            .and_then(|code| {
                self.env
                    .type_codes()
                    .recommended_type(code, self.attribute.database_not_null)
            })
            .unwrap_or("")
            .to_string()
    }

    /// The SQL type to emit: the explicit override when defined, otherwise
    /// inferred from the neutral type against the environment.
    pub fn sql_type(&self) -> String {
        sqltype::resolve(&self.attribute, &self.env)
    }

    // ===== Foreign keys =====

    /// Used in at least one foreign key (simple or composite).
    pub fn is_fk(&self) -> bool {
        self.attribute.is_fk
    }

    /// The foreign key is based on this single attribute.
    pub fn is_fk_simple(&self) -> bool {
        self.attribute.is_fk_simple
    }

    /// Part of a foreign key spanning several attributes.
    pub fn is_fk_composite(&self) -> bool {
        self.attribute.is_fk_composite
    }

    /// Foreign key parts this attribute participates in; empty when none.
    pub fn fk_parts(&self) -> &[ForeignKeyPart] {
        &self.attribute.fk_parts
    }

    /// The entity referenced by this attribute.
    ///
    /// # Errors
    ///
    /// A domain error when the attribute references no entity; a
    /// model-integrity error when the recorded name is not in the model.
    pub fn referenced_entity(&self) -> Result<&Entity> {
        fk::resolve_referenced_entity(&self.attribute, &self.model)
    }

    /// Class name of the referenced entity.
    pub fn referenced_entity_name(&self) -> Result<&str> {
        fk::resolve_referenced_entity_name(&self.attribute, &self.model)
    }

    // ===== Generated value =====

    /// The value is produced automatically on insert (database
    /// auto-increment or persistence-layer generator).
    pub fn is_generated_value(&self) -> bool {
        self.generated.is_generated
    }

    /// Generation strategy name; empty for the default strategy.
    pub fn generated_value_strategy(&self) -> &str {
        &self.generated.strategy
    }

    /// Configured generator name; empty when none.
    pub fn generated_value_generator(&self) -> &str {
        &self.generated.generator
    }

    pub fn has_sequence_generator(&self) -> bool {
        self.sequence.present
    }

    pub fn sequence_generator_name(&self) -> &str {
        &self.sequence.name
    }

    pub fn sequence_generator_sequence_name(&self) -> &str {
        &self.sequence.sequence_name
    }

    /// Allocation size: configured value, 0 when present but unset, -1 when
    /// no sequence generator exists.
    pub fn sequence_generator_allocation_size(&self) -> i32 {
        self.sequence.allocation_size
    }

    pub fn has_table_generator(&self) -> bool {
        self.table.present
    }

    pub fn table_generator_name(&self) -> &str {
        &self.table.name
    }

    pub fn table_generator_table(&self) -> &str {
        &self.table.table
    }

    pub fn table_generator_pk_column_name(&self) -> &str {
        &self.table.pk_column_name
    }

    pub fn table_generator_value_column_name(&self) -> &str {
        &self.table.value_column_name
    }

    pub fn table_generator_pk_column_value(&self) -> &str {
        &self.table.pk_column_value
    }

    // ===== Insertable / updatable =====

    pub fn insertable_flag(&self) -> TriState {
        self.attribute.insertable
    }

    /// True when the insertable flag holds the given explicit value; an
    /// undefined flag matches neither.
    pub fn insertable_is(&self, value: bool) -> bool {
        self.attribute.insertable.is(value)
    }

    /// `"true"`, `"false"` or `"undefined"`.
    pub fn insertable(&self) -> &'static str {
        self.attribute.insertable.as_str()
    }

    pub fn updatable_flag(&self) -> TriState {
        self.attribute.updatable
    }

    pub fn updatable_is(&self, value: bool) -> bool {
        self.attribute.updatable.is(value)
    }

    pub fn updatable(&self) -> &'static str {
        self.attribute.updatable.as_str()
    }

    // ===== Links =====

    pub fn is_used_in_links(&self) -> bool {
        self.attribute.is_used_in_links
    }

    pub fn is_used_in_selected_links(&self) -> bool {
        self.attribute.is_used_in_selected_links
    }

    // ===== Tags =====

    /// True when the attribute carries a tag with the given name.
    pub fn has_tag(&self, name: &str) -> bool {
        self.attribute.tags.contains_key(name)
    }

    /// Value held by the tag; an empty string when the tag is not defined.
    pub fn tag_value(&self, name: &str) -> &str {
        self.attribute.tags.get(name).map(String::as_str).unwrap_or("")
    }

    // ===== Neutral type predicates =====

    pub fn is_string_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::String
    }

    pub fn is_boolean_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Boolean
    }

    pub fn is_byte_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Byte
    }

    pub fn is_short_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Short
    }

    pub fn is_int_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Int
    }

    pub fn is_long_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Long
    }

    pub fn is_float_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Float
    }

    pub fn is_double_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Double
    }

    pub fn is_decimal_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Decimal
    }

    pub fn is_date_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Date
    }

    pub fn is_time_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Time
    }

    pub fn is_timestamp_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Timestamp
    }

    pub fn is_binary_type(&self) -> bool {
        self.attribute.neutral_type == NeutralType::Binary
    }

    /// byte, short, int, long, float, double or decimal.
    pub fn is_number_type(&self) -> bool {
        self.attribute.neutral_type.is_number()
    }

    /// date, time or timestamp.
    pub fn is_temporal_type(&self) -> bool {
        self.attribute.neutral_type.is_temporal()
    }
}

impl fmt::Display for AttributeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Best effort: fall back to the neutral type name when the
        // environment has no language mapping.
        let type_name = self
            .type_name()
            .unwrap_or_else(|_| self.attribute.neutral_type.to_string());
        write!(f, "{} {}", type_name, self.attribute.name)?;
        if self.has_initial_value() {
            write!(f, " = {}", self.initial_value())?;
        }
        Ok(())
    }
}
