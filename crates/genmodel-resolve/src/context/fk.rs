//! Referenced-entity resolution over the model index.
//!
//! Entities reference each other by class name, resolved lazily against the
//! read-only index. Two failure modes are kept apart: an attribute without a
//! recorded referenced entity is a domain error the renderer may guard
//! around, while a recorded name missing from the index is an integrity
//! defect in the upstream model.

use tracing::warn;

use crate::core::model::{Attribute, Entity, Model};
use crate::error::{ResolveError, Result};

/// Resolve the entity referenced by an attribute.
///
/// The recorded name is best-effort: when it does not appear among the
/// attribute's foreign-key parts, the disagreement is surfaced as a warning
/// (a data-quality signal), never silently reconciled.
///
/// # Errors
///
/// - `NoReferencedEntity` when the attribute records no referenced entity.
/// - `ModelIntegrity` when the recorded name is absent from the model index.
pub fn resolve_referenced_entity<'m>(
    attribute: &Attribute,
    model: &'m Model,
) -> Result<&'m Entity> {
    let class_name = attribute
        .referenced_entity_class_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ResolveError::no_referenced_entity(&attribute.name))?;

    if !attribute.fk_parts.is_empty()
        && !attribute
            .fk_parts
            .iter()
            .any(|part| part.referenced_entity == class_name)
    {
        warn!(
            attribute = %attribute.name,
            recorded = %class_name,
            "recorded referenced entity does not appear in the attribute's foreign key parts"
        );
    }

    model
        .entity_by_class_name(class_name)
        .ok_or_else(|| ResolveError::model_integrity(&attribute.name, class_name))
}

/// Resolve the class name of the referenced entity.
///
/// Thin composition over [`resolve_referenced_entity`]: the name comes from
/// the resolved entity, not from the raw recorded string.
pub fn resolve_referenced_entity_name<'m>(
    attribute: &Attribute,
    model: &'m Model,
) -> Result<&'m str> {
    resolve_referenced_entity(attribute, model).map(|entity| entity.class_name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ForeignKeyPart;

    fn make_model() -> Model {
        Model::new(vec![
            Entity {
                class_name: "Book".to_string(),
                attributes: vec![],
            },
            Entity {
                class_name: "Author".to_string(),
                attributes: vec![],
            },
        ])
    }

    fn make_fk_attribute(referenced: &str) -> Attribute {
        Attribute {
            name: "authorId".to_string(),
            is_fk: true,
            is_fk_simple: true,
            referenced_entity_class_name: Some(referenced.to_string()),
            fk_parts: vec![ForeignKeyPart {
                fk_name: "FK_BOOK_AUTHOR".to_string(),
                column: "author_id".to_string(),
                referenced_entity: referenced.to_string(),
                referenced_column: "id".to_string(),
            }],
            ..Attribute::default()
        }
    }

    #[test]
    fn test_round_trip_resolution() {
        let model = make_model();
        let attr = make_fk_attribute("Author");
        let entity = resolve_referenced_entity(&attr, &model).unwrap();
        assert_eq!(entity.class_name, "Author");
        assert_eq!(
            resolve_referenced_entity_name(&attr, &model).unwrap(),
            "Author"
        );
    }

    #[test]
    fn test_missing_entity_is_integrity_error_not_silent() {
        // Same attribute, but the target entity is gone from the model.
        let model = Model::new(vec![Entity {
            class_name: "Book".to_string(),
            attributes: vec![],
        }]);
        let attr = make_fk_attribute("Author");
        let err = resolve_referenced_entity(&attr, &model).unwrap_err();
        assert!(matches!(err, ResolveError::ModelIntegrity { .. }));
        assert!(!err.is_domain_error());
    }

    #[test]
    fn test_no_recorded_name_is_domain_error() {
        let model = make_model();
        let attr = Attribute {
            name: "title".to_string(),
            ..Attribute::default()
        };
        let err = resolve_referenced_entity(&attr, &model).unwrap_err();
        assert!(matches!(err, ResolveError::NoReferencedEntity { .. }));
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_blank_recorded_name_is_domain_error() {
        let model = make_model();
        let attr = Attribute {
            name: "title".to_string(),
            referenced_entity_class_name: Some("  ".to_string()),
            ..Attribute::default()
        };
        let err = resolve_referenced_entity(&attr, &model).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_disagreeing_fk_parts_still_resolve() {
        // The recorded name wins even when the FK parts point elsewhere;
        // the disagreement is only logged.
        let model = make_model();
        let mut attr = make_fk_attribute("Author");
        attr.fk_parts[0].referenced_entity = "Publisher".to_string();
        let entity = resolve_referenced_entity(&attr, &model).unwrap();
        assert_eq!(entity.class_name, "Author");
    }
}
