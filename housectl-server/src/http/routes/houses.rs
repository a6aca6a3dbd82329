//! House endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::HouseRepo;
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::server::AppState;
use crate::models::{House, HouseView, Manager};

/// GET /houses - list all houses with managers and tenants
async fn list_houses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<HouseView>>, ApiError> {
    let houses = HouseRepo::new(&state.pool).list().await?;
    Ok(Json(houses))
}

/// GET /houses/{id} - get a single house
async fn get_house(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<House>,
) -> Result<Json<HouseView>, ApiError> {
    let house = HouseRepo::new(&state.pool).get(id).await?;
    Ok(Json(house))
}

/// GET /houses/{id}/managers - managers of one house
async fn get_house_managers(
    State(state): State<Arc<AppState>>,
    EntityId(house_id, _): EntityId<House>,
) -> Result<Json<Vec<Manager>>, ApiError> {
    let managers = HouseRepo::new(&state.pool).managers(house_id).await?;
    Ok(Json(managers))
}

/// House routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/houses", get(list_houses))
        .route("/houses/{id}", get(get_house))
        .route("/houses/{id}/managers", get(get_house_managers))
}
