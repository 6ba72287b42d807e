//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use starwars_core::types::DbId;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub sub_date: i64,
    pub name: String,
    pub last_name: String,
}

/// Safe user representation for API responses (no password).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub is_active: bool,
    pub sub_date: i64,
    pub name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            sub_date: user.sub_date,
            name: user.name,
            last_name: user.last_name,
        }
    }
}

/// DTO for inserting a user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub sub_date: i64,
    pub name: String,
    pub last_name: String,
}
