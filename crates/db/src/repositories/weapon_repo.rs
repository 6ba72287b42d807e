//! Repository for the `weapons` table.

use sqlx::PgPool;
use starwars_core::types::DbId;

use crate::models::weapon::{CreateWeapon, Weapon};

/// Column list shared across queries. `type` is quoted since it is a keyword.
const COLUMNS: &str = r#"id, "type", name, is_lethal, weapon_owner_id"#;

/// Provides create and read operations for weapons.
pub struct WeaponRepo;

impl WeaponRepo {
    /// Insert a new weapon, returning the created row.
    ///
    /// A `weapon_owner_id` that does not reference an existing character is
    /// rejected by the `fk_weapons_owner` constraint.
    pub async fn create(pool: &PgPool, input: &CreateWeapon) -> Result<Weapon, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO weapons ("type", name, is_lethal, weapon_owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(&input.weapon_type)
            .bind(&input.name)
            .bind(input.is_lethal)
            .bind(input.weapon_owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a weapon by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons WHERE id = $1");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all weapons in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons ORDER BY id");
        sqlx::query_as::<_, Weapon>(&query).fetch_all(pool).await
    }

    /// List the weapons owned by one character.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Weapon>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM weapons WHERE weapon_owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM weapons")
            .fetch_one(pool)
            .await
    }
}
