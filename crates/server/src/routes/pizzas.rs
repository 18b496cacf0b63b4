use axum::{extract::State, Json};
use tracing::info;

use models::pizza::PizzaView;
use service::pizza_service;

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/pizzas", tag = "pizzas",
    responses(
        (status = 200, description = "All pizzas", body = [crate::openapi::PizzaDoc]),
        (status = 400, description = "Storage failure", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn list_pizzas(State(state): State<ServerState>) -> Result<Json<Vec<PizzaView>>, ApiError> {
    let list = pizza_service::list_pizzas(&state.db).await?;
    info!(count = list.len(), "list pizzas");
    Ok(Json(list))
}
