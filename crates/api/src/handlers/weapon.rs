//! Handlers for the `/weapon` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starwars_core::error::CoreError;
use starwars_core::types::DbId;
use starwars_db::models::weapon::{CreateWeapon, Weapon};
use starwars_db::repositories::WeaponRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, RequiredJson};
use crate::state::AppState;

/// GET /weapon
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Weapon>>> {
    let weapons = WeaponRepo::list(&state.pool).await?;
    Ok(Json(weapons))
}

/// POST /weapon
///
/// An owner id that matches no character is rejected by the database's
/// foreign key and surfaces as a 400 `INVALID_REFERENCE`.
pub async fn create(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<CreateWeapon>,
) -> AppResult<(StatusCode, Json<Weapon>)> {
    let weapon = WeaponRepo::create(&state.pool, &input).await?;
    tracing::info!(
        weapon_id = weapon.id,
        owner_id = ?weapon.weapon_owner_id,
        "Weapon created"
    );
    Ok((StatusCode::CREATED, Json(weapon)))
}

/// GET /weapon/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Weapon>> {
    let weapon = WeaponRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Weapon",
            id,
        }))?;
    Ok(Json(weapon))
}
