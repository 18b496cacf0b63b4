use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Deserialize;
use tracing::{info, instrument};

use models::restaurant_pizza::{self, RestaurantPizzaExpandedView};
use models::{pizza, restaurant};

use crate::errors::{db_err, ServiceError};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurantPizzaInput {
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// Create a menu entry and return it with its pizza and restaurant.
///
/// Both references are resolved before the insert; a missing one yields the
/// same `Reference` error whichever it was. Everything runs in one
/// transaction and nothing is persisted unless the commit succeeds.
#[instrument(skip(db), fields(restaurant_id = input.restaurant_id, pizza_id = input.pizza_id))]
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    input: CreateRestaurantPizzaInput,
) -> Result<RestaurantPizzaExpandedView, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;

    let pizza = pizza::Entity::find_by_id(input.pizza_id).one(&txn).await.map_err(db_err)?;
    let restaurant = restaurant::Entity::find_by_id(input.restaurant_id).one(&txn).await.map_err(db_err)?;
    let (Some(pizza), Some(restaurant)) = (pizza, restaurant) else {
        return Err(ServiceError::reference());
    };

    let created = restaurant_pizza::create(&txn, restaurant.id, pizza.id, input.price).await?;
    txn.commit().await.map_err(db_err)?;

    info!(id = created.id, price = created.price, "created restaurant pizza");
    Ok(created.to_expanded_view(&pizza, &restaurant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, restaurant_with_pizza};
    use sea_orm::PaginatorTrait;

    fn input(price: i32, pizza_id: i32, restaurant_id: i32) -> CreateRestaurantPizzaInput {
        CreateRestaurantPizzaInput { price, pizza_id, restaurant_id }
    }

    #[tokio::test]
    async fn creates_expanded_view_at_bounds() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (r, p) = restaurant_with_pizza(&db).await?;

        for price in [1, 30] {
            let view = create_restaurant_pizza(&db, input(price, p.id, r.id)).await?;
            assert_eq!(view.price, price);
            assert_eq!(view.pizza, p.to_view());
            assert_eq!(view.restaurant, r.to_view());
        }
        assert_eq!(restaurant_pizza::Entity::find().count(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_out_of_range_price_without_insert() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (r, p) = restaurant_with_pizza(&db).await?;

        for price in [0, 31] {
            let err = create_restaurant_pizza(&db, input(price, p.id, r.id)).await.unwrap_err();
            assert!(err.is_validation(), "unexpected error: {err}");
        }
        assert_eq!(restaurant_pizza::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn missing_reference_is_not_distinguished() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (r, p) = restaurant_with_pizza(&db).await?;

        let no_pizza = create_restaurant_pizza(&db, input(5, 9999, r.id)).await.unwrap_err();
        let no_restaurant = create_restaurant_pizza(&db, input(5, p.id, 9999)).await.unwrap_err();
        assert!(matches!(no_pizza, ServiceError::Reference(_)));
        assert_eq!(no_pizza.to_string(), no_restaurant.to_string());
        assert_eq!(restaurant_pizza::Entity::find().count(&db).await?, 0);
        Ok(())
    }
}
