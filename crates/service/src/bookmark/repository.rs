use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::bookmark::BookmarkFields;

use crate::errors::ServiceError;

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::bookmark::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::bookmark::Model>, ServiceError>;
    async fn insert(&self, fields: BookmarkFields) -> Result<models::bookmark::Model, ServiceError>;
    async fn update(&self, id: i32, fields: BookmarkFields) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBookmarkRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookmarkRepository for SeaOrmBookmarkRepository {
    async fn list(&self) -> Result<Vec<models::bookmark::Model>, ServiceError> {
        crate::db::bookmark_service::list_bookmarks(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<models::bookmark::Model>, ServiceError> {
        crate::db::bookmark_service::get_bookmark(&self.db, id).await
    }

    async fn insert(&self, fields: BookmarkFields) -> Result<models::bookmark::Model, ServiceError> {
        crate::db::bookmark_service::insert_bookmark(&self.db, fields).await
    }

    async fn update(&self, id: i32, fields: BookmarkFields) -> Result<u64, ServiceError> {
        crate::db::bookmark_service::update_bookmark(&self.db, id, fields).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::bookmark_service::delete_bookmark(&self.db, id).await
    }
}
