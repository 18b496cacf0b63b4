use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, restaurant};

pub const PRICE_MIN: i32 = 1;
pub const PRICE_MAX: i32 = 30;

/// A menu entry: `restaurant_id` sells `pizza_id` at `price`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Restaurant, Pizza }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .into(),
        }
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef { Relation::Restaurant.def() }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pizza.def() }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Every save re-checks the price, whichever code path assigned it.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(price) = &self.price {
            validate_price(*price).map_err(errors::ModelError::into_db_err)?;
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert {
            if matches!(self.created_at, ActiveValue::NotSet) {
                self.created_at = Set(now);
            }
        } else {
            self.updated_at = Set(Some(now));
        }
        Ok(self)
    }
}

/// Basic view: `{id, price, pizza_id, restaurant_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizzaView {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// Basic view plus the referenced pizza and restaurant, each in its base view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizzaExpandedView {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: pizza::PizzaView,
    pub restaurant: restaurant::RestaurantView,
}

impl Model {
    pub fn to_view(&self) -> RestaurantPizzaView {
        RestaurantPizzaView {
            id: self.id,
            price: self.price,
            pizza_id: self.pizza_id,
            restaurant_id: self.restaurant_id,
        }
    }

    pub fn to_expanded_view(&self, pizza: &pizza::Model, restaurant: &restaurant::Model) -> RestaurantPizzaExpandedView {
        RestaurantPizzaExpandedView {
            id: self.id,
            price: self.price,
            pizza_id: self.pizza_id,
            restaurant_id: self.restaurant_id,
            pizza: pizza.to_view(),
            restaurant: restaurant.to_view(),
        }
    }
}

/// Accepts prices in `PRICE_MIN..=PRICE_MAX` and returns them unchanged.
pub fn validate_price(price: i32) -> Result<i32, errors::ModelError> {
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Err(errors::ModelError::Validation(format!(
            "price out of range: must be between {PRICE_MIN} and {PRICE_MAX}"
        )));
    }
    Ok(price)
}

/// Insert a menu entry. Callers are expected to have checked that both
/// referenced rows exist.
pub async fn create<C>(db: &C, restaurant_id: i32, pizza_id: i32, price: i32) -> Result<Model, errors::ModelError>
where
    C: ConnectionTrait,
{
    let price = validate_price(price)?;
    let am = ActiveModel {
        price: Set(price),
        restaurant_id: Set(restaurant_id),
        pizza_id: Set(pizza_id),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn set_price<C>(db: &C, id: i32, price: i32) -> Result<Model, errors::ModelError>
where
    C: ConnectionTrait,
{
    let price = validate_price(price)?;
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| errors::ModelError::NotFound("restaurant_pizza".into()))?
        .into();
    found.price = Set(price);
    Ok(found.update(db).await?)
}
