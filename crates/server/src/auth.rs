use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use sea_orm::DatabaseConnection;

use service::bookmark::repository::SeaOrmBookmarkRepository;
use service::bookmark::service::BookmarkService;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub api_token: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub auth: ServerAuthConfig,
    pub bookmarks: Arc<BookmarkService<SeaOrmBookmarkRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, api_token: String) -> Self {
        let repo = Arc::new(SeaOrmBookmarkRepository { db });
        Self {
            auth: ServerAuthConfig { api_token },
            bookmarks: Arc::new(BookmarkService::new(repo)),
        }
    }
}

/// Middleware: require `Authorization: Bearer {token}` matching the configured
/// secret. Rejects before any handler runs.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(t) if !t.is_empty() && t == state.auth.api_token => Ok(next.run(req).await),
        _ => Err(ApiError::Unauthorized),
    }
}
