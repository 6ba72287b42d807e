//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod character_repo;
pub mod fav_repo;
pub mod favorite_repo;
pub mod planet_repo;
pub mod user_repo;
pub mod weapon_repo;

pub use character_repo::CharacterRepo;
pub use fav_repo::FavRepo;
pub use favorite_repo::FavoriteRepo;
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;
pub use weapon_repo::WeaponRepo;
