//! Weapon entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starwars_core::payload::{no_nul_bytes, RequiredFields};
use starwars_core::types::DbId;
use validator::Validate;

/// A weapon row from the `weapons` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Weapon {
    pub id: DbId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub weapon_type: String,
    pub name: String,
    pub is_lethal: bool,
    /// Owning character, or `None` for an ownerless weapon.
    pub weapon_owner_id: Option<DbId>,
}

/// DTO for creating a new weapon.
///
/// `weapon_owner_id` must be present in the payload but may be `null`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWeapon {
    #[serde(rename = "type")]
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub weapon_type: String,
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub name: String,
    pub is_lethal: bool,
    pub weapon_owner_id: Option<DbId>,
}

impl RequiredFields for CreateWeapon {
    const REQUIRED: &'static [&'static str] = &["type", "name", "is_lethal", "weapon_owner_id"];
}
