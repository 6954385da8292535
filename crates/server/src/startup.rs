use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::auth::ServerState;
use crate::routes;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_api_token() -> anyhow::Result<String> {
    let token = match configs::load_default() {
        Ok(mut cfg) => {
            cfg.auth.normalize_from_env();
            cfg.auth.token
        }
        Err(_) => env::var("API_TOKEN").unwrap_or_default(),
    };
    if token.trim().is_empty() {
        anyhow::bail!("no bearer token configured; set auth.token or API_TOKEN");
    }
    Ok(token)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection and schema
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let api_token = load_api_token()?;
    let state = ServerState::new(db, api_token);

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting bookmark server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
