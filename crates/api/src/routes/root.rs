use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub mensaje: &'static str,
}

/// GET / -- greeting.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        mensaje: "Welcome to the Star Wars world!",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
