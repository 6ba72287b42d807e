use axum::routing::get;
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// Routes mounted at `/planet`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planet::list).post(planet::create))
        .route("/{id}", get(planet::get_by_id))
}
