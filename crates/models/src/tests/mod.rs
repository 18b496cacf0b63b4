
/// Relation, cascade and derived-view tests
pub mod relation_tests;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the schema applied.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_url("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
