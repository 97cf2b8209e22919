//! In-memory mapping metadata
//!
//! Entity types are declared field by field, the way mapping attributes sit
//! on entity properties. Repository types list their public operations so
//! the factory can introspect them.

use indexmap::IndexMap;

use crate::domain::ports::{AssociationMeta, Cardinality, MappingMetadata, RepositoryType};

/// Mapping attribute on an association field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    ManyToOne,
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl AssociationKind {
    pub fn cardinality(self) -> Cardinality {
        match self {
            AssociationKind::ManyToOne | AssociationKind::OneToOne => Cardinality::One,
            AssociationKind::OneToMany | AssociationKind::ManyToMany => Cardinality::Many,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub kind: AssociationKind,
    /// `targetEntity` argument of the mapping attribute
    pub target_entity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDef {
    /// Declared static type of the property
    pub declared_type: Option<String>,
    pub association: Option<Association>,
}

/// Declared entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub name: String,
    pub id_field: Option<String>,
    pub fields: IndexMap<String, FieldDef>,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_field: None,
            fields: IndexMap::new(),
        }
    }

    /// Identifier column with a generated value
    pub fn id(mut self, field: &str) -> Self {
        self.id_field = Some(field.to_string());
        self.column(field)
    }

    pub fn column(mut self, field: &str) -> Self {
        self.fields.insert(field.to_string(), FieldDef::default());
        self
    }

    pub fn many_to_one(self, field: &str, declared_type: &str) -> Self {
        self.association(field, AssociationKind::ManyToOne, Some(declared_type), None)
    }

    pub fn one_to_one(self, field: &str, declared_type: &str) -> Self {
        self.association(field, AssociationKind::OneToOne, Some(declared_type), None)
    }

    pub fn one_to_many(self, field: &str, target_entity: Option<&str>) -> Self {
        self.association(field, AssociationKind::OneToMany, None, target_entity)
    }

    pub fn many_to_many(self, field: &str, target_entity: Option<&str>) -> Self {
        self.association(field, AssociationKind::ManyToMany, None, target_entity)
    }

    fn association(
        mut self,
        field: &str,
        kind: AssociationKind,
        declared_type: Option<&str>,
        target_entity: Option<&str>,
    ) -> Self {
        self.fields.insert(
            field.to_string(),
            FieldDef {
                declared_type: declared_type.map(str::to_string),
                association: Some(Association {
                    kind,
                    target_entity: target_entity.map(str::to_string),
                }),
            },
        );
        self
    }
}

/// Mapping metadata for a set of entity and repository types
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entities: IndexMap<String, EntityType>,
    repositories: IndexMap<String, RepositoryType>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, entity_type: EntityType) -> Self {
        self.entities.insert(entity_type.name.clone(), entity_type);
        self
    }

    pub fn with_repository(mut self, repository_type: RepositoryType) -> Self {
        self.repositories
            .insert(repository_type.name.clone(), repository_type);
        self
    }

    pub fn entity_type(&self, name: &str) -> Option<&EntityType> {
        self.entities.get(name)
    }

    fn field(&self, entity_type: &str, field: &str) -> Option<&FieldDef> {
        self.entities.get(entity_type)?.fields.get(field)
    }
}

impl MappingMetadata for Schema {
    fn declares_type(&self, entity_type: &str) -> bool {
        self.entities.contains_key(entity_type)
    }

    fn declares_field(&self, entity_type: &str, field: &str) -> bool {
        self.field(entity_type, field).is_some()
    }

    fn association(&self, entity_type: &str, field: &str) -> Option<AssociationMeta> {
        let def = self.field(entity_type, field)?;
        let association = def.association.as_ref()?;
        let cardinality = association.kind.cardinality();
        let element_type = match cardinality {
            Cardinality::One => def.declared_type.clone(),
            Cardinality::Many => association.target_entity.clone(),
        };
        Some(AssociationMeta {
            cardinality,
            element_type,
        })
    }

    fn identifier_field(&self, entity_type: &str) -> Option<&str> {
        self.entities.get(entity_type)?.id_field.as_deref()
    }

    fn repository(&self, name: &str) -> Option<&RepositoryType> {
        self.repositories.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_schema;

    #[test]
    fn to_one_uses_declared_type() {
        let schema = test_schema();

        let meta = schema.association("Entity", "updatedBy").unwrap();

        assert_eq!(meta.cardinality, Cardinality::One);
        assert_eq!(meta.element_type.as_deref(), Some("EntityUser"));
    }

    #[test]
    fn to_many_uses_target_entity() {
        let schema = test_schema();

        let users = schema.association("EntityMulti", "users").unwrap();
        let bad_users = schema.association("EntityMulti", "badUsers").unwrap();

        assert_eq!(users.cardinality, Cardinality::Many);
        assert_eq!(users.element_type.as_deref(), Some("EntityUser"));
        assert_eq!(bad_users.element_type, None);
    }

    #[test]
    fn plain_columns_have_no_association() {
        let schema = test_schema();

        assert!(schema.declares_field("Entity", "name"));
        assert_eq!(schema.association("Entity", "name"), None);
        assert_eq!(schema.association("Entity", "missing"), None);
        assert!(!schema.declares_field("Entity", "missing"));
    }

    #[test]
    fn identifier_field_lookup() {
        let schema = test_schema();

        assert_eq!(schema.identifier_field("EntityUser"), Some("id"));
        assert_eq!(schema.identifier_field("Unknown"), None);
    }
}
