use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, restaurant, restaurant_pizza};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Free-form, usually a comma separated list.
    pub ingredients: String,
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

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef { restaurant_pizza::Relation::Restaurant.def() }

    fn via() -> Option<RelationDef> { Some(restaurant_pizza::Relation::Pizza.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaView {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl Model {
    pub fn to_view(&self) -> PizzaView {
        PizzaView { id: self.id, name: self.name.clone(), ingredients: self.ingredients.clone() }
    }
}

pub async fn create<C>(db: &C, name: &str, ingredients: &str) -> Result<Model, errors::ModelError>
where
    C: ConnectionTrait,
{
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    let am = ActiveModel {
        name: Set(name.to_string()),
        ingredients: Set(ingredients.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
