//! Welcome endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const WELCOME: &str = "Welcome to the House Management API!";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /
async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse { message: WELCOME })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
