//! Manager endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::ManagerRepo;
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::server::AppState;
use crate::models::Manager;

/// GET /managers
async fn list_managers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Manager>>, ApiError> {
    let managers = ManagerRepo::new(&state.pool).list().await?;
    Ok(Json(managers))
}

/// GET /managers/{id}
async fn get_manager(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Manager>,
) -> Result<Json<Manager>, ApiError> {
    let manager = ManagerRepo::new(&state.pool).get(id).await?;
    Ok(Json(manager))
}

/// Manager routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/managers", get(list_managers))
        .route("/managers/{id}", get(get_manager))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::http::test_support::{get_json, seeded_app};

    #[tokio::test]
    async fn list_managers_flat() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/managers").await;

        assert_eq!(status, StatusCode::OK);
        let managers = body.as_array().unwrap();
        assert_eq!(managers.len(), 3);
        for manager in managers {
            assert!(manager.get("house").is_none());
            assert!(manager.get("house_id").is_some());
        }
    }

    #[tokio::test]
    async fn get_manager_by_id() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/managers/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 2, "name": "Bob Williams", "salary": 75000.0, "house_id": 2})
        );
    }

    #[tokio::test]
    async fn missing_manager_is_404() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/managers/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Manager not found"}));
    }
}
