pub mod admin;
pub mod character;
pub mod fav;
pub mod health;
pub mod planet;
pub mod root;
pub mod user;
pub mod weapon;

use axum::Router;

use crate::state::AppState;

/// Build the public resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user                                          list, create
/// /user/{id}                                     get
/// /user/{id}/favorites                           list favorites
/// /user/{id}/favorites/planet/{planet_id}        add favorite planet (POST)
/// /user/{id}/favorites/character/{character_id}  add favorite character (POST)
///
/// /planet                                        list, create
/// /planet/{id}                                   get
///
/// /character                                     list, create
/// /character/{id}                                get
/// /character/{id}/weapons                        weapons owned
///
/// /weapon                                        list, create
/// /weapon/{id}                                   get
///
/// /fav                                           list, create
/// /fav/{id}                                      get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", user::router())
        .nest("/planet", planet::router())
        .nest("/character", character::router())
        .nest("/weapon", weapon::router())
        .nest("/fav", fav::router())
}
