use axum::routing::get;
use axum::Router;

use crate::handlers::fav;
use crate::state::AppState;

/// Routes mounted at `/fav`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fav::list).post(fav::create))
        .route("/{id}", get(fav::get_by_id))
}
