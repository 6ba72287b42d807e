//! Repository for the `user_planet_favs` and `user_character_favs`
//! association tables.

use sqlx::PgPool;
use starwars_core::types::DbId;

use crate::models::character::Character;
use crate::models::favorite::{CharacterFavorite, PlanetFavorite};
use crate::models::planet::Planet;

/// Manages favorite links between users and planets/characters.
pub struct FavoriteRepo;

impl FavoriteRepo {
    // -----------------------------------------------------------------------
    // Planets
    // -----------------------------------------------------------------------

    /// Mark a planet as a user's favorite.
    ///
    /// Idempotent: returns `true` if a new link was written, `false` if it
    /// already existed.
    pub async fn add_planet(
        pool: &PgPool,
        user_id: DbId,
        planet_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_planet_favs (user_id, planet_id) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id, planet_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(planet_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Planets the user has marked as favorite, ordered by planet id.
    pub async fn planets_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            "SELECT p.id, p.name, p.solar_system \
             FROM planets p \
             JOIN user_planet_favs f ON f.planet_id = p.id \
             WHERE f.user_id = $1 \
             ORDER BY p.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// All user/planet links.
    pub async fn list_planet_links(pool: &PgPool) -> Result<Vec<PlanetFavorite>, sqlx::Error> {
        sqlx::query_as::<_, PlanetFavorite>(
            "SELECT user_id, planet_id FROM user_planet_favs ORDER BY user_id, planet_id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn count_planet_links(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_planet_favs")
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Characters
    // -----------------------------------------------------------------------

    /// Mark a character as a user's favorite. Idempotent, like [`Self::add_planet`].
    pub async fn add_character(
        pool: &PgPool,
        user_id: DbId,
        character_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_character_favs (user_id, character_id) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id, character_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(character_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Characters the user has marked as favorite, ordered by character id.
    pub async fn characters_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            "SELECT c.id, c.name, c.last_name, c.race, c.native_planet, c.is_jedi \
             FROM characters c \
             JOIN user_character_favs f ON f.character_id = c.id \
             WHERE f.user_id = $1 \
             ORDER BY c.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// All user/character links.
    pub async fn list_character_links(
        pool: &PgPool,
    ) -> Result<Vec<CharacterFavorite>, sqlx::Error> {
        sqlx::query_as::<_, CharacterFavorite>(
            "SELECT user_id, character_id FROM user_character_favs ORDER BY user_id, character_id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn count_character_links(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_character_favs")
            .fetch_one(pool)
            .await
    }
}
