#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory database per test, migrations applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_ephemeral().await
}
