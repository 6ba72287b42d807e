//! Handlers for the `/user` resource.
//!
//! Users are the only records carrying a secret. The plaintext password from
//! the request is hashed before it reaches the repository, and every response
//! goes through [`UserResponse`], which has no password field.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use starwars_core::error::CoreError;
use starwars_core::payload::{no_nul_bytes, RequiredFields};
use starwars_core::types::DbId;
use starwars_db::models::user::{CreateUser, UserResponse};
use starwars_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, RequiredJson};
use crate::state::AppState;

/// Request body for `POST /user`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email, length(max = 120), custom(function = "no_nul_bytes"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
    pub is_active: bool,
    pub sub_date: i64,
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub name: String,
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub last_name: String,
}

impl RequiredFields for CreateUserRequest {
    const REQUIRED: &'static [&'static str] = &[
        "email",
        "password",
        "is_active",
        "sub_date",
        "name",
        "last_name",
    ];
}

/// GET /user
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /user
///
/// Rejects a duplicate email with 409. The `uq_users_email` constraint
/// backs this up when two requests race past the lookup.
pub async fn create(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A user with email '{}' already exists",
            input.email
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateUser {
        email: input.email,
        password_hash,
        is_active: input.is_active,
        sub_date: input.sub_date,
        name: input.name,
        last_name: input.last_name,
    };
    let user = UserRepo::create(&state.pool, &create).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(user)))
}
