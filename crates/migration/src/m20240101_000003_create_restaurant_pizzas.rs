//! Create `restaurant_pizzas` join table.
//!
//! One row is one menu entry: a pizza sold by a restaurant at a price.
//! Rows follow their restaurant on delete; pizzas are only referenced.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantPizzas::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantPizzas::Id))
                    .col(integer(RestaurantPizzas::Price))
                    .col(integer(RestaurantPizzas::RestaurantId))
                    .col(integer(RestaurantPizzas::PizzaId))
                    .col(
                        timestamp_with_time_zone(RestaurantPizzas::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(RestaurantPizzas::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_restaurant_id_restaurants")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_pizza_id_pizzas")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::PizzaId)
                            .to(Pizzas::Table, Pizzas::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RestaurantPizzas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RestaurantPizzas { Table, Id, Price, RestaurantId, PizzaId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Restaurants { Table, Id }

#[derive(DeriveIden)]
enum Pizzas { Table, Id }
