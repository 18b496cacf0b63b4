use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use models::restaurant_pizza::RestaurantPizzaExpandedView;
use service::restaurant_pizza_service::{self, CreateRestaurantPizzaInput};

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    post, path = "/restaurant_pizzas", tag = "restaurant_pizzas",
    request_body = crate::openapi::CreateRestaurantPizzaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantPizzaExpandedDoc),
        (status = 400, description = "Unknown pizza or restaurant, price outside 1..=30, or malformed body", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn create_restaurant_pizza(
    State(state): State<ServerState>,
    body: Result<Json<CreateRestaurantPizzaInput>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaExpandedView>), ApiError> {
    let Json(input) = body.map_err(|e| {
        warn!(err = %e, "rejected restaurant pizza body");
        ApiError::validation()
    })?;
    let created = restaurant_pizza_service::create_restaurant_pizza(&state.db, input).await?;
    info!(id = created.id, restaurant_id = created.restaurant_id, pizza_id = created.pizza_id, "created restaurant pizza");
    Ok((StatusCode::CREATED, Json(created)))
}
