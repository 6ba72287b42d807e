//! Repository for the `planets` table.

use sqlx::PgPool;
use starwars_core::types::DbId;

use crate::models::planet::{CreatePlanet, Planet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, solar_system";

/// Provides create and read operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, solar_system)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.solar_system)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Count all planets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM planets")
            .fetch_one(pool)
            .await
    }
}
