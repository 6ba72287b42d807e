//! Repository for the `favs` table.

use sqlx::PgPool;
use starwars_core::types::DbId;

use crate::models::fav::{CreateFav, Fav};

const COLUMNS: &str = r#"id, post_owner, caption, "timestamp""#;

/// Provides create and read operations for favs.
pub struct FavRepo;

impl FavRepo {
    /// Insert a new fav, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFav) -> Result<Fav, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO favs (post_owner, caption, "timestamp")
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Fav>(&query)
            .bind(&input.post_owner)
            .bind(&input.caption)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fav>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favs WHERE id = $1");
        sqlx::query_as::<_, Fav>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all favs in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Fav>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favs ORDER BY id");
        sqlx::query_as::<_, Fav>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM favs")
            .fetch_one(pool)
            .await
    }
}
