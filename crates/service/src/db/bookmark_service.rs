use models::bookmark::{self, BookmarkFields};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::errors::ServiceError;

/// List every bookmark in natural table order.
pub async fn list_bookmarks(db: &DatabaseConnection) -> Result<Vec<bookmark::Model>, ServiceError> {
    bookmark::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Fetch one bookmark. Absence is a valid outcome, not an error.
pub async fn get_bookmark(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<bookmark::Model>, ServiceError> {
    bookmark::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert a bookmark; the table assigns the id. No validation here — the
/// request handler owns that.
pub async fn insert_bookmark(
    db: &DatabaseConnection,
    fields: BookmarkFields,
) -> Result<bookmark::Model, ServiceError> {
    let am = bookmark::ActiveModel {
        id: NotSet,
        title: Set(fields.title),
        url: Set(fields.url),
        description: Set(fields.description),
        rating: Set(fields.rating),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Replace all four mutable fields of the record matching `id`.
/// Returns the affected-row count; `0` means the id does not exist and the
/// caller decides whether that is an error.
pub async fn update_bookmark(
    db: &DatabaseConnection,
    id: i32,
    fields: BookmarkFields,
) -> Result<u64, ServiceError> {
    let res = bookmark::Entity::update_many()
        .col_expr(bookmark::Column::Title, Expr::value(fields.title))
        .col_expr(bookmark::Column::Url, Expr::value(fields.url))
        .col_expr(bookmark::Column::Description, Expr::value(fields.description))
        .col_expr(bookmark::Column::Rating, Expr::value(fields.rating))
        .filter(bookmark::Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

/// Remove the record matching `id`; returns whether a row was deleted.
pub async fn delete_bookmark(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = bookmark::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
