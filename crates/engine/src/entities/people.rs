//! Person registry operations.

use std::sync::Arc;

use amity_domain::{self as domain, PersonCategory, PersonId};

use crate::infrastructure::ports::{PersonRepo, RepoError};

/// Person registry operations.
pub struct People {
    repo: Arc<dyn PersonRepo>,
}

impl People {
    pub fn new(repo: Arc<dyn PersonRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: PersonId) -> Result<Option<domain::Person>, RepoError> {
        self.repo.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<domain::Person>, RepoError> {
        self.repo.list().await
    }

    pub async fn list_by_category(
        &self,
        category: PersonCategory,
    ) -> Result<Vec<domain::Person>, RepoError> {
        self.repo.list_by_category(category).await
    }

    pub async fn save(&self, person: &domain::Person) -> Result<(), RepoError> {
        self.repo.save(person).await
    }
}
