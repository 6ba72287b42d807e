//! Planet entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starwars_core::payload::{no_nul_bytes, RequiredFields};
use starwars_core::types::DbId;
use validator::Validate;

/// A planet row from the `planets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub solar_system: String,
}

/// DTO for creating a new planet.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlanet {
    #[validate(length(max = 120), custom(function = "no_nul_bytes"))]
    pub name: String,
    #[validate(length(max = 60), custom(function = "no_nul_bytes"))]
    pub solar_system: String,
}

impl RequiredFields for CreatePlanet {
    const REQUIRED: &'static [&'static str] = &["name", "solar_system"];
}
