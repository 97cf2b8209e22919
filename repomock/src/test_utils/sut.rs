//! Sample service under test
//!
//! Depends on repositories only through [`EntityRepository`], the way
//! application services do.

use std::rc::Rc;

use anyhow::{bail, Result};

use crate::domain::entities::Entity;
use crate::domain::ports::{EntityRepository, ObjectFieldAccess};

const TEMPORARY_PLACEHOLDER: i64 = -1;

pub struct SutService<R, U>
where
    R: EntityRepository,
    U: EntityRepository,
{
    repository: Rc<R>,
    users: Rc<U>,
}

impl<R, U> SutService<R, U>
where
    R: EntityRepository,
    U: EntityRepository,
{
    pub fn new(repository: Rc<R>, users: Rc<U>) -> Self {
        Self { repository, users }
    }

    pub fn get_first(&self) -> Result<Option<Entity>> {
        Ok(self.repository.find(1)?)
    }

    /// Saves two entities that both reference the generated id of the first
    pub fn make_two_entities(&self) -> Result<()> {
        let Some(user) = self.users.find(1)? else {
            bail!("User not found");
        };

        let mut first = Entity::new("Entity")
            .with("updatedBy", user.clone())
            .with("referenceId", TEMPORARY_PLACEHOLDER);
        self.repository.save(&mut first)?;
        let first_id = first.int("id").unwrap_or(TEMPORARY_PLACEHOLDER);
        first.set("referenceId", first_id.into());
        self.repository.save(&mut first)?;

        let mut second = Entity::new("Entity")
            .with("updatedBy", user)
            .with("referenceId", first_id);
        self.repository.save(&mut second)?;

        Ok(())
    }
}
