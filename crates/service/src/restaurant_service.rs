use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::info;

use models::pizza::{self, PizzaView};
use models::restaurant::{self, Entity as RestaurantEntity, RestaurantDetailView, RestaurantView};
use models::restaurant_pizza;

use crate::errors::{db_err, ServiceError};

/// List all restaurants in primary key order.
pub async fn list_restaurants(db: &DatabaseConnection) -> Result<Vec<RestaurantView>, ServiceError> {
    let rows = RestaurantEntity::find()
        .order_by_asc(restaurant::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(rows.iter().map(restaurant::Model::to_view).collect())
}

async fn find_restaurant<C>(db: &C, id: i32) -> Result<restaurant::Model, ServiceError>
where
    C: ConnectionTrait,
{
    RestaurantEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Restaurant"))
}

/// Get a restaurant together with its menu entries.
pub async fn get_restaurant_detail(db: &DatabaseConnection, id: i32) -> Result<RestaurantDetailView, ServiceError> {
    let found = find_restaurant(db, id).await?;
    let entries = found
        .find_related(restaurant_pizza::Entity)
        .order_by_asc(restaurant_pizza::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(found.to_detail_view(&entries))
}

/// Delete a restaurant and its menu entries.
///
/// Children go first, then the parent, in one transaction, so the outcome does
/// not depend on the backend enforcing `ON DELETE CASCADE`.
pub async fn delete_restaurant(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;
    find_restaurant(&txn, id).await?;
    let removed = restaurant_pizza::Entity::delete_many()
        .filter(restaurant_pizza::Column::RestaurantId.eq(id))
        .exec(&txn)
        .await
        .map_err(db_err)?;
    RestaurantEntity::delete_by_id(id).exec(&txn).await.map_err(db_err)?;
    txn.commit().await.map_err(db_err)?;
    info!(restaurant_id = id, menu_entries = removed.rows_affected, "deleted restaurant");
    Ok(())
}

/// Pizzas sold by a restaurant, derived from its menu entries.
pub async fn pizzas_for_restaurant(db: &DatabaseConnection, id: i32) -> Result<Vec<PizzaView>, ServiceError> {
    let found = find_restaurant(db, id).await?;
    let pizzas = found
        .find_related(pizza::Entity)
        .order_by_asc(pizza::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(pizzas.iter().map(pizza::Model::to_view).collect())
}
