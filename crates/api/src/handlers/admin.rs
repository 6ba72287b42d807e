//! Read-only administrative browser over every table.
//!
//! `GET /admin` summarizes each browsable model with its row count;
//! `GET /admin/{model}` dumps the rows of one model in the same
//! serialization the public endpoints use (users without passwords).

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use starwars_db::models::user::UserResponse;
use starwars_db::repositories::{
    CharacterRepo, FavRepo, FavoriteRepo, PlanetRepo, UserRepo, WeaponRepo,
};
use starwars_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

/// A model exposed through the admin browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminModel {
    User,
    Planet,
    Character,
    Weapon,
    Fav,
    UserPlanetFav,
    UserCharacterFav,
}

impl AdminModel {
    pub const ALL: [AdminModel; 7] = [
        AdminModel::User,
        AdminModel::Planet,
        AdminModel::Character,
        AdminModel::Weapon,
        AdminModel::Fav,
        AdminModel::UserPlanetFav,
        AdminModel::UserCharacterFav,
    ];

    /// Path segment used in `/admin/{model}`.
    pub fn name(self) -> &'static str {
        match self {
            AdminModel::User => "user",
            AdminModel::Planet => "planet",
            AdminModel::Character => "character",
            AdminModel::Weapon => "weapon",
            AdminModel::Fav => "fav",
            AdminModel::UserPlanetFav => "user_planet_fav",
            AdminModel::UserCharacterFav => "user_character_fav",
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            AdminModel::User => "users",
            AdminModel::Planet => "planets",
            AdminModel::Character => "characters",
            AdminModel::Weapon => "weapons",
            AdminModel::Fav => "favs",
            AdminModel::UserPlanetFav => "user_planet_favs",
            AdminModel::UserCharacterFav => "user_character_favs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    async fn count(self, pool: &DbPool) -> Result<i64, sqlx::Error> {
        match self {
            AdminModel::User => UserRepo::count(pool).await,
            AdminModel::Planet => PlanetRepo::count(pool).await,
            AdminModel::Character => CharacterRepo::count(pool).await,
            AdminModel::Weapon => WeaponRepo::count(pool).await,
            AdminModel::Fav => FavRepo::count(pool).await,
            AdminModel::UserPlanetFav => FavoriteRepo::count_planet_links(pool).await,
            AdminModel::UserCharacterFav => FavoriteRepo::count_character_links(pool).await,
        }
    }

    async fn rows(self, pool: &DbPool) -> AppResult<Value> {
        let value = match self {
            AdminModel::User => {
                let users: Vec<UserResponse> = UserRepo::list(pool)
                    .await?
                    .into_iter()
                    .map(UserResponse::from)
                    .collect();
                serde_json::to_value(users)
            }
            AdminModel::Planet => serde_json::to_value(PlanetRepo::list(pool).await?),
            AdminModel::Character => serde_json::to_value(CharacterRepo::list(pool).await?),
            AdminModel::Weapon => serde_json::to_value(WeaponRepo::list(pool).await?),
            AdminModel::Fav => serde_json::to_value(FavRepo::list(pool).await?),
            AdminModel::UserPlanetFav => {
                serde_json::to_value(FavoriteRepo::list_planet_links(pool).await?)
            }
            AdminModel::UserCharacterFav => {
                serde_json::to_value(FavoriteRepo::list_character_links(pool).await?)
            }
        };
        value.map_err(|e| AppError::InternalError(format!("Failed to serialize rows: {e}")))
    }
}

/// One entry in the admin summary.
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub model: &'static str,
    pub table: &'static str,
    pub rows: i64,
}

/// GET /admin
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<Vec<ModelSummary>>> {
    let mut models = Vec::with_capacity(AdminModel::ALL.len());
    for model in AdminModel::ALL {
        models.push(ModelSummary {
            model: model.name(),
            table: model.table(),
            rows: model.count(&state.pool).await?,
        });
    }
    Ok(Json(models))
}

/// GET /admin/{model}
pub async fn browse(
    State(state): State<AppState>,
    AppPath(model): AppPath<String>,
) -> AppResult<Json<Value>> {
    let model = AdminModel::from_name(&model)
        .ok_or_else(|| AppError::NotFound(format!("Unknown admin model '{model}'")))?;
    let rows = model.rows(&state.pool).await?;
    Ok(Json(rows))
}
