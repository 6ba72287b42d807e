//! Fav entity model and DTOs.
//!
//! Despite the name, a fav is a standalone post record with no link to
//! users, planets or characters. Favorites proper live in [`super::favorite`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starwars_core::payload::{no_nul_bytes, RequiredFields};
use starwars_core::types::DbId;
use validator::Validate;

/// A row from the `favs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Fav {
    pub id: DbId,
    pub post_owner: String,
    pub caption: String,
    pub timestamp: i64,
}

/// DTO for creating a new fav.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFav {
    #[validate(length(max = 60), custom(function = "no_nul_bytes"))]
    pub post_owner: String,
    #[validate(length(max = 240), custom(function = "no_nul_bytes"))]
    pub caption: String,
    pub timestamp: i64,
}

impl RequiredFields for CreateFav {
    const REQUIRED: &'static [&'static str] = &["post_owner", "caption", "timestamp"];
}
