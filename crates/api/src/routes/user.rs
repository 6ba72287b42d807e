//! Route definitions for the `/user` resource and its favorites.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{favorite, user};
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /                                          -> list
/// POST   /                                          -> create
/// GET    /{id}                                      -> get_by_id
/// GET    /{id}/favorites                            -> favorite::list_for_user
/// POST   /{id}/favorites/planet/{planet_id}         -> favorite::add_planet
/// POST   /{id}/favorites/character/{character_id}   -> favorite::add_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/{id}", get(user::get_by_id))
        .route("/{id}/favorites", get(favorite::list_for_user))
        .route(
            "/{id}/favorites/planet/{planet_id}",
            post(favorite::add_planet),
        )
        .route(
            "/{id}/favorites/character/{character_id}",
            post(favorite::add_character),
        )
}
