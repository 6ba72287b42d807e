//! Favorite links between users and planets/characters.
//!
//! Backed by the `user_planet_favs` and `user_character_favs` association
//! tables, each keyed by the pair of foreign ids.

use serde::Serialize;
use sqlx::FromRow;
use starwars_core::types::DbId;

use crate::models::character::Character;
use crate::models::planet::Planet;

/// A row from `user_planet_favs`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PlanetFavorite {
    pub user_id: DbId,
    pub planet_id: DbId,
}

/// A row from `user_character_favs`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CharacterFavorite {
    pub user_id: DbId,
    pub character_id: DbId,
}

/// Everything a user has marked as liked.
#[derive(Debug, Clone, Serialize)]
pub struct UserFavorites {
    pub planets: Vec<Planet>,
    pub characters: Vec<Character>,
}
