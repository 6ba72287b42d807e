//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create, get_by_id)
//! for a single entity type. Handlers delegate to the corresponding
//! repository in `starwars_db` and map errors via [`crate::error::AppError`].

pub mod admin;
pub mod character;
pub mod fav;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod weapon;
