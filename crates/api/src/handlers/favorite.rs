//! Handlers for a user's favorite planets and characters.
//!
//! Nested under `/user/{id}/favorites`. Both sides of a link are checked
//! before insert so a missing user or target is reported as 404 naming the
//! entity, rather than as a foreign key failure.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starwars_core::error::CoreError;
use starwars_core::types::DbId;
use starwars_db::models::favorite::{CharacterFavorite, PlanetFavorite, UserFavorites};
use starwars_db::repositories::{CharacterRepo, FavoriteRepo, PlanetRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /user/{id}/favorites
pub async fn list_for_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<UserFavorites>> {
    ensure_user(&state, user_id).await?;

    let planets = FavoriteRepo::planets_for_user(&state.pool, user_id).await?;
    let characters = FavoriteRepo::characters_for_user(&state.pool, user_id).await?;

    Ok(Json(UserFavorites {
        planets,
        characters,
    }))
}

/// POST /user/{id}/favorites/planet/{planet_id}
///
/// 201 when the link is new, 200 when it already existed.
pub async fn add_planet(
    State(state): State<AppState>,
    AppPath((user_id, planet_id)): AppPath<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<PlanetFavorite>)> {
    ensure_user(&state, user_id).await?;
    PlanetRepo::find_by_id(&state.pool, planet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id: planet_id,
        }))?;

    let created = FavoriteRepo::add_planet(&state.pool, user_id, planet_id).await?;
    if created {
        tracing::info!(user_id, planet_id, "Planet favorited");
    }

    Ok((
        link_status(created),
        Json(PlanetFavorite { user_id, planet_id }),
    ))
}

/// POST /user/{id}/favorites/character/{character_id}
///
/// 201 when the link is new, 200 when it already existed.
pub async fn add_character(
    State(state): State<AppState>,
    AppPath((user_id, character_id)): AppPath<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<CharacterFavorite>)> {
    ensure_user(&state, user_id).await?;
    CharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        }))?;

    let created = FavoriteRepo::add_character(&state.pool, user_id, character_id).await?;
    if created {
        tracing::info!(user_id, character_id, "Character favorited");
    }

    Ok((
        link_status(created),
        Json(CharacterFavorite {
            user_id,
            character_id,
        }),
    ))
}

async fn ensure_user(state: &AppState, user_id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    Ok(())
}

fn link_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}
