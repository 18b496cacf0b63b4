use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, pizza, restaurant_pizza};

pub const NAME_MAX_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { RestaurantPizza }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::RestaurantPizza => Entity::has_many(restaurant_pizza::Entity).into(),
        }
    }
}

impl Related<restaurant_pizza::Entity> for Entity {
    fn to() -> RelationDef { Relation::RestaurantPizza.def() }
}

// Pizzas reachable through the menu entries; computed on every query.
impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef { restaurant_pizza::Relation::Pizza.def() }

    fn via() -> Option<RelationDef> { Some(restaurant_pizza::Relation::Restaurant.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Base view: `{id, name, address}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantView {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Base view plus the restaurant's menu entries. The nested entries use the
/// basic menu-entry view, so they never point back at the restaurant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDetailView {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<restaurant_pizza::RestaurantPizzaView>,
}

impl Model {
    pub fn to_view(&self) -> RestaurantView {
        RestaurantView { id: self.id, name: self.name.clone(), address: self.address.clone() }
    }

    pub fn to_detail_view(&self, entries: &[restaurant_pizza::Model]) -> RestaurantDetailView {
        RestaurantDetailView {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            restaurant_pizzas: entries.iter().map(restaurant_pizza::Model::to_view).collect(),
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

/// Insert a restaurant. Not reachable over HTTP; used by seeding and admin tooling.
pub async fn create<C>(db: &C, name: &str, address: &str) -> Result<Model, errors::ModelError>
where
    C: ConnectionTrait,
{
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        address: Set(address.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
