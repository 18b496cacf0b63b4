use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RestaurantDoc { pub id: i32, pub name: String, pub address: String }

#[derive(ToSchema)]
pub struct PizzaDoc { pub id: i32, pub name: String, pub ingredients: String }

#[derive(ToSchema)]
pub struct RestaurantPizzaDoc { pub id: i32, pub price: i32, pub pizza_id: i32, pub restaurant_id: i32 }

#[derive(ToSchema)]
pub struct RestaurantDetailDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaDoc>,
}

#[derive(ToSchema)]
pub struct RestaurantPizzaExpandedDoc {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaDoc,
    pub restaurant: RestaurantDoc,
}

#[derive(ToSchema)]
pub struct CreateRestaurantPizzaDoc {
    /// 1 to 30 inclusive
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

/// Single-resource failure body.
#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

/// Validation and creation failure body.
#[derive(ToSchema)]
pub struct ErrorsDoc { pub errors: Vec<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list_restaurants,
        crate::routes::restaurants::get_restaurant,
        crate::routes::restaurants::delete_restaurant,
        crate::routes::pizzas::list_pizzas,
        crate::routes::restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            HealthResponse,
            RestaurantDoc,
            PizzaDoc,
            RestaurantPizzaDoc,
            RestaurantDetailDoc,
            RestaurantPizzaExpandedDoc,
            CreateRestaurantPizzaDoc,
            ErrorDoc,
            ErrorsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas")
    )
)]
pub struct ApiDoc;
