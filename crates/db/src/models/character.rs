//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starwars_core::payload::{no_nul_bytes, RequiredFields};
use starwars_core::types::DbId;
use validator::Validate;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub last_name: String,
    pub race: String,
    pub native_planet: String,
    pub is_jedi: bool,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacter {
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub name: String,
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub last_name: String,
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub race: String,
    /// Free-text planet name; not a reference to `planets`.
    #[validate(length(max = 60), custom(function = "no_nul_bytes"))]
    pub native_planet: String,
    pub is_jedi: bool,
}

impl RequiredFields for CreateCharacter {
    const REQUIRED: &'static [&'static str] =
        &["name", "last_name", "race", "native_planet", "is_jedi"];
}
