use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};

use models::pizza::{self, Entity as PizzaEntity, PizzaView};
use models::restaurant::{self, RestaurantView};

use crate::errors::{db_err, ServiceError};

/// List all pizzas in primary key order.
pub async fn list_pizzas(db: &DatabaseConnection) -> Result<Vec<PizzaView>, ServiceError> {
    let rows = PizzaEntity::find()
        .order_by_asc(pizza::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(rows.iter().map(pizza::Model::to_view).collect())
}

/// Restaurants selling a pizza.
pub async fn restaurants_for_pizza(db: &DatabaseConnection, id: i32) -> Result<Vec<RestaurantView>, ServiceError> {
    let found = PizzaEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Pizza"))?;
    let rows = found
        .find_related(restaurant::Entity)
        .order_by_asc(restaurant::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(rows.iter().map(restaurant::Model::to_view).collect())
}
