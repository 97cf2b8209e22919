//! Entity materializer
//!
//! Turns row descriptions into entity graphs. Instances start bare and are
//! populated by direct field assignment; nested rows recurse through the
//! relationship resolver to whatever depth the description has.

use crate::domain::entities::{Entity, Row, RowValue, Value};
use crate::domain::ports::{MappingMetadata, ObjectFieldAccess};
use crate::error::MockError;

use super::resolver::{RelationshipResolver, Resolution};

pub struct Materializer<'m, M: MappingMetadata + ?Sized> {
    metadata: &'m M,
    resolver: RelationshipResolver<'m, M>,
}

impl<'m, M: MappingMetadata + ?Sized> Materializer<'m, M> {
    pub fn new(metadata: &'m M) -> Self {
        Self {
            metadata,
            resolver: RelationshipResolver::new(metadata),
        }
    }

    /// Materialize a single row as an instance of `entity_type`
    pub fn materialize_one(&self, entity_type: &str, row: &Row) -> Result<Entity, MockError> {
        if !self.metadata.declares_type(entity_type) {
            return Err(MockError::UnknownEntityType(entity_type.to_string()));
        }

        tracing::trace!(entity_type, fields = row.len(), "materializing row");

        let mut entity = Entity::new(entity_type);
        for (field, value) in row.iter() {
            if !self.metadata.declares_field(entity_type, field) {
                return Err(MockError::UnknownField {
                    entity_type: entity_type.to_string(),
                    field: field.to_string(),
                });
            }

            let resolved = match (self.resolver.resolve(entity_type, field, value)?, value) {
                (Resolution::Scalar, RowValue::Value(value)) => value.clone(),
                (Resolution::ToOne(target), RowValue::Row(nested)) => {
                    Value::from(self.materialize_one(&target, nested)?)
                }
                (Resolution::ToMany(target), RowValue::Rows(nested)) => {
                    Value::Collection(self.materialize_many(&target, nested)?)
                }
                (Resolution::ToOne(_), _) => {
                    return Err(shape_mismatch(field, "to-one association expects a nested row"))
                }
                (_, _) => {
                    return Err(shape_mismatch(field, "to-many association expects a list of rows"))
                }
            };
            entity.set(field, resolved);
        }
        Ok(entity)
    }

    /// Materialize each row independently, preserving input order
    pub fn materialize_many(
        &self,
        entity_type: &str,
        rows: &[Row],
    ) -> Result<Vec<Entity>, MockError> {
        rows.iter()
            .map(|row| self.materialize_one(entity_type, row))
            .collect()
    }
}

fn shape_mismatch(field: &str, reason: &str) -> MockError {
    MockError::InvalidRowDescription {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_schema;
    use serde_json::json;

    #[test]
    fn materializes_scalars_nulls_and_to_one() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);
        let row = Row::from_json(&json!({
            "referenceId": 10,
            "name": null,
            "updatedBy": {"id": 2, "fullName": "Test Name"},
        }))
        .unwrap();

        let entity = materializer.materialize_one("Entity", &row).unwrap();

        assert_eq!(entity.entity_type(), "Entity");
        assert_eq!(entity.int("referenceId"), Some(10));
        assert_eq!(entity.get("name"), Some(&Value::Null));
        let updated_by = entity.related("updatedBy").unwrap();
        assert_eq!(updated_by.entity_type(), "EntityUser");
        assert_eq!(updated_by.int("id"), Some(2));
        assert_eq!(updated_by.text("fullName"), Some("Test Name"));
    }

    #[test]
    fn materializes_nested_collections_and_self_references() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);
        let row = Row::from_json(&json!({
            "owner": {"fullName": "Owner Name"},
            "users": [{"fullName": "User Name 1"}, {"fullName": "User Name 2"}],
            "subMulti": {"owner": {"fullName": "Owner SubMulti"}},
        }))
        .unwrap();

        let entity = materializer.materialize_one("EntityMulti", &row).unwrap();

        assert_eq!(entity.related("owner").unwrap().text("fullName"), Some("Owner Name"));
        let users = entity.related_many("users").unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|user| user.entity_type() == "EntityUser"));
        assert_eq!(users[0].text("fullName"), Some("User Name 1"));
        assert_eq!(users[1].text("fullName"), Some("User Name 2"));
        let sub_multi = entity.related("subMulti").unwrap();
        assert_eq!(sub_multi.entity_type(), "EntityMulti");
        assert_eq!(
            sub_multi.related("owner").unwrap().text("fullName"),
            Some("Owner SubMulti")
        );
        assert!(!entity.is_set("id"));
    }

    #[test]
    fn many_to_many_materializes_as_collection() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);
        let row = Row::new().rows("groups", vec![Row::new().set("fullName", "Group member")]);

        let entity = materializer.materialize_one("EntityMulti", &row).unwrap();

        assert_eq!(entity.related_many("groups").unwrap().len(), 1);
    }

    #[test]
    fn composite_value_on_plain_column_fails() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);
        let row = Row::from_json(&json!({
            "owner": {"fullName": "Owner Name"},
            "tags": [{"fullName": "User Name 1"}],
        }))
        .unwrap();

        let err = materializer.materialize_one("EntityMulti", &row).unwrap_err();

        assert!(matches!(&err, MockError::UnsupportedMapping { field, .. } if field == "tags"));
        assert!(err
            .to_string()
            .starts_with("Automatic mocking of mapping type used for field"));
    }

    #[test]
    fn to_many_without_target_entity_fails() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);
        let row = Row::new().rows("badUsers", vec![Row::new().set("fullName", "User Name 1")]);

        let err = materializer.materialize_one("EntityMulti", &row).unwrap_err();

        assert!(err
            .to_string()
            .starts_with("Target entity is not defined for field \"badUsers\""));
    }

    #[test]
    fn undeclared_field_fails() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);

        let err = materializer
            .materialize_one("Entity", &Row::new().set("nickname", "x"))
            .unwrap_err();

        assert_eq!(
            err,
            MockError::UnknownField {
                entity_type: "Entity".to_string(),
                field: "nickname".to_string(),
            }
        );
    }

    #[test]
    fn list_on_to_one_association_fails() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);

        let err = materializer
            .materialize_one("Entity", &Row::new().rows("updatedBy", vec![Row::new()]))
            .unwrap_err();

        assert!(matches!(&err, MockError::InvalidRowDescription { field, .. } if field == "updatedBy"));
    }

    #[test]
    fn materialize_many_preserves_order() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);
        let rows = vec![
            Row::new().set("id", 3),
            Row::new().set("id", 1),
            Row::new().set("id", 2),
        ];

        let users = materializer.materialize_many("EntityUser", &rows).unwrap();

        let ids: Vec<_> = users.iter().filter_map(|user| user.int("id")).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn unknown_entity_type_fails() {
        let schema = test_schema();
        let materializer = Materializer::new(&schema);

        let err = materializer.materialize_one("Ghost", &Row::new()).unwrap_err();

        assert_eq!(err, MockError::UnknownEntityType("Ghost".to_string()));
    }
}
