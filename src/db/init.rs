//! Database connection and schema setup.
use crate::db::{Db as _, DatabaseConnection, DatabaseKind};
use std::env;

/// Default database location, relative to the working directory.
const DEFAULT_DB_URL: &str = "sqlite://perch.sqlite3?mode=rwc";

/// Connects to a database and applies the schema.
/// We use `SQLite` by default, but we can override this by setting the `DATABASE_URL` environment variable.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| String::from(DEFAULT_DB_URL));
    let connection = DatabaseConnection::connect(&db_url).await?;
    tracing::info!("Connected to database");
    migrate(&connection).await?;
    Ok(connection)
}

/// Applies the schema migrations for the connected database.
///
/// # Errors
/// Errors if a migration statement cannot be executed.
pub async fn migrate(conn: &DatabaseConnection) -> anyhow::Result<()> {
    match conn.kind {
        DatabaseKind::Sqlite => {
            let statement = include_str!("../../migrations/sqlite/0001_create_post.sql");
            let mut connection = conn.pool.acquire().await?;
            sqlx::query(statement).execute(&mut *connection).await?;
        }
    }
    Ok(())
}
