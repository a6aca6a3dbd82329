//! Tenant endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::TenantRepo;
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::server::AppState;
use crate::models::Tenant;

/// GET /tenants
async fn list_tenants(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Tenant>>, ApiError> {
    let tenants = TenantRepo::new(&state.pool).list().await?;
    Ok(Json(tenants))
}

/// GET /tenants/{id}
async fn get_tenant(
    State(state): State<Arc<AppState>>,
    EntityId(id, _): EntityId<Tenant>,
) -> Result<Json<Tenant>, ApiError> {
    let tenant = TenantRepo::new(&state.pool).get(id).await?;
    Ok(Json(tenant))
}

/// Tenant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tenants", get(list_tenants))
        .route("/tenants/{id}", get(get_tenant))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::http::test_support::{get_json, seeded_app};

    #[tokio::test]
    async fn list_tenants_returns_all() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/tenants").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(
            body[4],
            json!({"id": 5, "name": "Henry Moore", "rent": 1300.0, "house_id": 3})
        );
    }

    #[tokio::test]
    async fn missing_tenant_is_404() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/tenants/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Tenant not found"}));
    }

    #[tokio::test]
    async fn out_of_range_tenant_id_is_404() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/tenants/99999999999999999999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Tenant not found"}));
    }

    #[tokio::test]
    async fn tenant_by_id() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/tenants/4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Grace Wilson");
        assert_eq!(body["rent"], 2000.0);
    }
}
