use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookmarks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The four mutable fields of a bookmark; the store owns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkFields {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

pub fn rating_in_range(rating: i32) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(rating_in_range(0));
        assert!(rating_in_range(5));
        assert!(!rating_in_range(-1));
        assert!(!rating_in_range(6));
    }

    #[test]
    fn model_serializes_flat() {
        let m = Model {
            id: 1,
            title: "t".into(),
            url: "u".into(),
            description: "d".into(),
            rating: 3,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "t", "url": "u", "description": "d", "rating": 3})
        );
    }
}
