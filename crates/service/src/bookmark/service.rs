use std::sync::Arc;
use tracing::{info, instrument};

use models::bookmark::BookmarkFields;

use crate::bookmark::repository::BookmarkRepository;
use crate::errors::ServiceError;

/// Application service wrapping the bookmark record store.
/// The HTTP layer owns payload validation; this layer only logs lifecycle
/// events and delegates to the repository.
pub struct BookmarkService<R: BookmarkRepository> {
    repo: Arc<R>,
}

impl<R: BookmarkRepository> BookmarkService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<models::bookmark::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<models::bookmark::Model>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: BookmarkFields) -> Result<models::bookmark::Model, ServiceError> {
        let created = self.repo.insert(fields).await?;
        info!(id = created.id, "bookmark created");
        Ok(created)
    }

    /// Replace all four mutable fields; `NotFound` when the id does not exist.
    pub async fn update(&self, id: i32, fields: BookmarkFields) -> Result<(), ServiceError> {
        let affected = self.repo.update(id, fields).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("bookmark"));
        }
        Ok(())
    }

    /// Returns whether a record was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(id, "bookmark deleted");
        }
        Ok(deleted)
    }
}
