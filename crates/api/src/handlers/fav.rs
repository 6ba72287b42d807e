//! Handlers for the `/fav` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starwars_core::error::CoreError;
use starwars_core::types::DbId;
use starwars_db::models::fav::{CreateFav, Fav};
use starwars_db::repositories::FavRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, RequiredJson};
use crate::state::AppState;

/// GET /fav
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Fav>>> {
    let favs = FavRepo::list(&state.pool).await?;
    Ok(Json(favs))
}

/// POST /fav
pub async fn create(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<CreateFav>,
) -> AppResult<(StatusCode, Json<Fav>)> {
    let fav = FavRepo::create(&state.pool, &input).await?;
    tracing::info!(fav_id = fav.id, post_owner = %fav.post_owner, "Fav created");
    Ok((StatusCode::CREATED, Json(fav)))
}

/// GET /fav/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Fav>> {
    let fav = FavRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Fav", id }))?;
    Ok(Json(fav))
}
