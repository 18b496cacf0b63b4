//! Sample data loader.
//!
//! Restaurants and pizzas have no creation route; this is how a fresh
//! database gets its rows.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::info;

use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::{db_err, ServiceError};

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const MENU: &[(usize, usize, i32)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
    /// Set when the database already had restaurants and `reset` was false.
    pub skipped: bool,
}

/// Insert the sample rows. With `reset`, existing rows are removed first;
/// without it, a database that already holds restaurants is left untouched.
pub async fn seed_sample_data(db: &DatabaseConnection, reset: bool) -> Result<SeedSummary, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;

    if reset {
        restaurant_pizza::Entity::delete_many().exec(&txn).await.map_err(db_err)?;
        restaurant::Entity::delete_many().exec(&txn).await.map_err(db_err)?;
        pizza::Entity::delete_many().exec(&txn).await.map_err(db_err)?;
    } else if restaurant::Entity::find().count(&txn).await.map_err(db_err)? > 0 {
        info!("database already seeded; skipping");
        return Ok(SeedSummary { skipped: true, ..Default::default() });
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(restaurant::create(&txn, name, address).await?);
    }
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(pizza::create(&txn, name, ingredients).await?);
    }
    for &(r, p, price) in MENU {
        restaurant_pizza::create(&txn, restaurants[r].id, pizzas[p].id, price).await?;
    }

    txn.commit().await.map_err(db_err)?;

    let summary = SeedSummary {
        restaurants: restaurants.len(),
        pizzas: pizzas.len(),
        restaurant_pizzas: MENU.len(),
        skipped: false,
    };
    info!(?summary, "seeded sample data");
    Ok(summary)
}
