use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use models::restaurant::{RestaurantDetailView, RestaurantView};
use service::restaurant_service;

use crate::{errors::ApiError, routes::ServerState};

/// A path segment that is not an integer cannot name any restaurant.
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::restaurant_not_found())
}

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [crate::openapi::RestaurantDoc]),
        (status = 400, description = "Storage failure", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn list_restaurants(State(state): State<ServerState>) -> Result<Json<Vec<RestaurantView>>, ApiError> {
    let list = restaurant_service::list_restaurants(&state.db).await?;
    info!(count = list.len(), "list restaurants");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its menu entries", body = crate::openapi::RestaurantDetailDoc),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_restaurant(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetailView>, ApiError> {
    let id = restaurant_id(path)?;
    let detail = restaurant_service::get_restaurant_detail(&state.db, id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Deleted together with its menu entries"),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_restaurant(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;
    restaurant_service::delete_restaurant(&state.db, id).await?;
    info!(id, "deleted restaurant");
    Ok(StatusCode::NO_CONTENT)
}
