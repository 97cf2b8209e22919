//! Test fixtures
//!
//! Mapping metadata for a handful of entity and repository types.

use crate::adapters::{EntityType, Schema};
use crate::app::DoubleFactory;
use crate::domain::ports::{RepositoryBase, RepositoryType};

/// Schema shared by the unit tests
pub fn test_schema() -> Schema {
    Schema::new()
        .with_entity(
            EntityType::new("Entity")
                .id("id")
                .column("referenceId")
                .column("name")
                .column("validTo")
                .many_to_one("updatedBy", "EntityUser"),
        )
        .with_entity(EntityType::new("EntityUser").id("id").column("fullName"))
        .with_entity(
            EntityType::new("EntityMulti")
                .id("id")
                .many_to_one("owner", "EntityUser")
                .one_to_many("users", Some("EntityUser"))
                .one_to_one("subMulti", "EntityMulti")
                .many_to_many("groups", Some("EntityUser"))
                .one_to_many("badUsers", None)
                .column("tags"),
        )
        .with_repository(
            RepositoryType::new("Repository", Some(RepositoryBase::ServiceEntityRepository))
                .with_operation("save", Some("Entity"))
                .with_operation("remove", Some("Entity")),
        )
        .with_repository(
            RepositoryType::new("RepositoryMulti", Some(RepositoryBase::ServiceEntityRepository))
                .with_operation("save", Some("EntityMulti"))
                .with_operation("remove", Some("EntityMulti")),
        )
        .with_repository(
            RepositoryType::new("RepositoryNoSave", Some(RepositoryBase::ServiceEntityRepository))
                .with_operation("persist", Some("Entity")),
        )
        .with_repository(
            RepositoryType::new(
                "RepositorySaveWithoutType",
                Some(RepositoryBase::ServiceEntityRepository),
            )
            .with_operation("save", None),
        )
        .with_repository(
            RepositoryType::new("RepositorySimple", None)
                .with_operation("find", None)
                .with_operation("findOneBy", None)
                .with_operation("findAll", None)
                .with_operation("findBy", None)
                .with_operation("save", Some("Entity")),
        )
        .with_repository(RepositoryType::new(
            "RepositoryUser",
            Some(RepositoryBase::EntityRepository),
        ))
}

/// Factory over [`test_schema`]
pub fn test_factory() -> DoubleFactory<Schema> {
    DoubleFactory::new(test_schema())
}
