//! Handlers for the `/character` resource, including the weapons each
//! character owns.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starwars_core::error::CoreError;
use starwars_core::types::DbId;
use starwars_db::models::character::{Character, CreateCharacter};
use starwars_db::models::weapon::Weapon;
use starwars_db::repositories::{CharacterRepo, WeaponRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, RequiredJson};
use crate::state::AppState;

/// GET /character
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// POST /character
pub async fn create(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(
        character_id = character.id,
        name = %character.name,
        is_jedi = character.is_jedi,
        "Character created"
    );
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /character/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Character>> {
    let character = find_character(&state, id).await?;
    Ok(Json(character))
}

/// GET /character/{id}/weapons
///
/// Weapons whose `weapon_owner_id` points at this character.
pub async fn list_weapons(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<Weapon>>> {
    find_character(&state, id).await?;
    let weapons = WeaponRepo::list_by_owner(&state.pool, id).await?;
    Ok(Json(weapons))
}

async fn find_character(state: &AppState, id: DbId) -> AppResult<Character> {
    CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
}
