#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::OnceCell;

// Ensure migrations run only once per process against a shared database.
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Test database: `DATABASE_URL` when provided, otherwise an isolated sqlite
/// in-memory database so the suite runs without external services.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => {
            MIGRATED
                .get_or_init(|| async {
                    let db = Database::connect(&url).await.expect("connect db for migration");
                    migration::Migrator::up(&db, None).await.expect("migrate up");
                })
                .await;
            let db = Database::connect(url).await?;
            Ok(db)
        }
        Err(_) => fresh_db().await,
    }
}

/// Always-empty sqlite in-memory database, migrated.
/// A single pooled connection keeps the in-memory schema alive.
pub async fn fresh_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
