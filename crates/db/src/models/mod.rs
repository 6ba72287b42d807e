//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row; its `Serialize`
//!   projection is what the API returns
//! - A `Deserialize` create DTO for inserts, with its required keys and
//!   length limits declared alongside

pub mod character;
pub mod fav;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod weapon;
