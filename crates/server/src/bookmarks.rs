use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use models::bookmark::{self, BookmarkFields};

use crate::auth::ServerState;
use crate::errors::ApiError;

/// Incoming payload for create and update. Every field is optional at the
/// wire level so validation can name the missing one; `rating` stays untyped
/// so a present-but-non-integer value is rejected with the range message
/// instead of failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct BookmarkPayload {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<Value>,
}

/// Presence checks first, in declaration order, then the rating rules.
pub fn validate_payload(payload: BookmarkPayload) -> Result<BookmarkFields, ApiError> {
    let required = |field: &str, value: Option<String>| {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::Validation(format!("{field} is required")))
    };

    let title = required("title", payload.title)?;
    let url = required("url", payload.url)?;
    let description = required("description", payload.description)?;
    let rating = payload
        .rating
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::Validation("rating is required".to_string()))?;
    // Integer-valued numbers only; anything else shares the range message,
    // matching how an out-of-range value is reported.
    let rating = rating
        .as_i64()
        .or_else(|| rating.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        .and_then(|r| i32::try_from(r).ok())
        .filter(|r| bookmark::rating_in_range(*r))
        .ok_or_else(|| ApiError::Validation("rating must be between 0 and 5".to_string()))?;

    Ok(BookmarkFields { title, url, description, rating })
}

/// `GET /bookmarks`: the full collection, empty array for an empty table.
pub async fn list_bookmarks(
    State(state): State<ServerState>,
) -> Result<Json<Vec<bookmark::Model>>, ApiError> {
    let all = state.bookmarks.list().await?;
    Ok(Json(all))
}

/// `POST /bookmarks`: validate, insert, 201 with a Location header.
pub async fn create_bookmark(
    State(state): State<ServerState>,
    Json(payload): Json<BookmarkPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = validate_payload(payload)?;
    let created = state.bookmarks.create(fields).await?;
    let location = format!("/bookmarks/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// `GET /bookmarks/{id}`: 404 when the id matches nothing.
pub async fn get_bookmark(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<bookmark::Model>, ApiError> {
    match state.bookmarks.get(id).await? {
        Some(found) => Ok(Json(found)),
        None => Err(ApiError::bookmark_not_found()),
    }
}

/// `PATCH /bookmarks/{id}`: same payload rules as create; 204 on success.
pub async fn update_bookmark(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(payload): Json<BookmarkPayload>,
) -> Result<StatusCode, ApiError> {
    let fields = validate_payload(payload)?;
    state.bookmarks.update(id, fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /bookmarks/{id}`: 204 when a row was removed, 404 when absent.
pub async fn delete_bookmark(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.bookmarks.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::bookmark_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(
        title: Option<&str>,
        url: Option<&str>,
        description: Option<&str>,
        rating: Option<Value>,
    ) -> BookmarkPayload {
        BookmarkPayload {
            title: title.map(Into::into),
            url: url.map(Into::into),
            description: description.map(Into::into),
            rating,
        }
    }

    fn message(err: ApiError) -> String {
        match err {
            ApiError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_passes_through() {
        let fields =
            validate_payload(payload(Some("t"), Some("u"), Some("d"), Some(json!(3)))).unwrap();
        assert_eq!(fields.title, "t");
        assert_eq!(fields.url, "u");
        assert_eq!(fields.description, "d");
        assert_eq!(fields.rating, 3);
    }

    #[test]
    fn each_missing_field_is_named() {
        let err = validate_payload(payload(None, Some("u"), Some("d"), Some(json!(3)))).unwrap_err();
        assert_eq!(message(err), "title is required");
        let err = validate_payload(payload(Some("t"), None, Some("d"), Some(json!(3)))).unwrap_err();
        assert_eq!(message(err), "url is required");
        let err = validate_payload(payload(Some("t"), Some("u"), None, Some(json!(3)))).unwrap_err();
        assert_eq!(message(err), "description is required");
        let err = validate_payload(payload(Some("t"), Some("u"), Some("d"), None)).unwrap_err();
        assert_eq!(message(err), "rating is required");
    }

    #[test]
    fn null_rating_counts_as_missing() {
        let err = validate_payload(payload(Some("t"), Some("u"), Some("d"), Some(json!(null))))
            .unwrap_err();
        assert_eq!(message(err), "rating is required");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let err =
            validate_payload(payload(Some("  "), Some("u"), Some("d"), Some(json!(3)))).unwrap_err();
        assert_eq!(message(err), "title is required");
    }

    #[test]
    fn rating_out_of_range_is_rejected_regardless_of_other_fields() {
        for bad in [-1, 6, 9, 100] {
            let err = validate_payload(payload(Some("t"), Some("u"), Some("d"), Some(json!(bad))))
                .unwrap_err();
            assert_eq!(message(err), "rating must be between 0 and 5");
        }
    }

    #[test]
    fn non_integer_rating_is_rejected() {
        for bad in [json!(3.5), json!("3"), json!(true), json!([3]), json!({"value": 3})] {
            let err =
                validate_payload(payload(Some("t"), Some("u"), Some("d"), Some(bad))).unwrap_err();
            assert_eq!(message(err), "rating must be between 0 and 5");
        }
    }

    #[test]
    fn integer_valued_float_rating_is_accepted() {
        let fields =
            validate_payload(payload(Some("t"), Some("u"), Some("d"), Some(json!(3.0)))).unwrap();
        assert_eq!(fields.rating, 3);
    }

    #[test]
    fn rating_bounds_are_accepted() {
        for ok in [0, 5] {
            let fields =
                validate_payload(payload(Some("t"), Some("u"), Some("d"), Some(json!(ok)))).unwrap();
            assert_eq!(fields.rating, ok);
        }
    }

    #[test]
    fn presence_is_checked_before_range() {
        // A missing title is reported even when the rating is also bad.
        let err = validate_payload(payload(None, Some("u"), Some("d"), Some(json!(9)))).unwrap_err();
        assert_eq!(message(err), "title is required");
    }
}
