#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use models::{pizza, restaurant};

/// In-memory database with migrations applied; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_url("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn restaurant_with_pizza(db: &DatabaseConnection) -> Result<(restaurant::Model, pizza::Model), anyhow::Error> {
    let r = restaurant::create(db, "Karen's Pizza Shack", "address1").await?;
    let p = pizza::create(db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
    Ok((r, p))
}
