//! Handlers for the `/planet` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use starwars_core::error::CoreError;
use starwars_core::types::DbId;
use starwars_db::models::planet::{CreatePlanet, Planet};
use starwars_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, RequiredJson};
use crate::state::AppState;

/// GET /planet
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets))
}

/// POST /planet
pub async fn create(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<CreatePlanet>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    let planet = PlanetRepo::create(&state.pool, &input).await?;
    tracing::info!(planet_id = planet.id, name = %planet.name, "Planet created");
    Ok((StatusCode::CREATED, Json(planet)))
}

/// GET /planet/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))?;
    Ok(Json(planet))
}
