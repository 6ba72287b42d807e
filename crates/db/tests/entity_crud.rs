//! Integration tests for the repository layer.
//!
//! Exercises every repository against a real database:
//! - Create and list each entity type
//! - Unique constraint on user email
//! - Foreign key enforcement on weapon owners and favorite links
//! - Idempotent favorite links

use sqlx::PgPool;
use starwars_db::models::character::CreateCharacter;
use starwars_db::models::fav::CreateFav;
use starwars_db::models::planet::CreatePlanet;
use starwars_db::models::user::{CreateUser, UserResponse};
use starwars_db::models::weapon::CreateWeapon;
use starwars_db::repositories::{
    CharacterRepo, FavRepo, FavoriteRepo, PlanetRepo, UserRepo, WeaponRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_planet(name: &str) -> CreatePlanet {
    CreatePlanet {
        name: name.to_string(),
        solar_system: format!("{name} system"),
    }
}

fn new_character(name: &str, last_name: &str, is_jedi: bool) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        last_name: last_name.to_string(),
        race: "Human".to_string(),
        native_planet: "Tatooine".to_string(),
        is_jedi,
    }
}

fn new_weapon(name: &str, owner: Option<i64>) -> CreateWeapon {
    CreateWeapon {
        weapon_type: "lightsaber".to_string(),
        name: name.to_string(),
        is_lethal: true,
        weapon_owner_id: owner,
    }
}

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        is_active: true,
        sub_date: 1_700_000_000,
        name: "Leia".to_string(),
        last_name: "Organa".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_planets(pool: PgPool) {
    let hoth = PlanetRepo::create(&pool, &new_planet("Hoth")).await.unwrap();
    let endor = PlanetRepo::create(&pool, &new_planet("Endor")).await.unwrap();
    assert_ne!(hoth.id, endor.id);

    let planets = PlanetRepo::list(&pool).await.unwrap();
    assert_eq!(planets, vec![hoth.clone(), endor]);
    assert_eq!(PlanetRepo::count(&pool).await.unwrap(), 2);

    let found = PlanetRepo::find_by_id(&pool, hoth.id).await.unwrap();
    assert_eq!(found, Some(hoth));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_characters(pool: PgPool) {
    let luke = CharacterRepo::create(&pool, &new_character("Luke", "Skywalker", true))
        .await
        .unwrap();
    assert_eq!(luke.name, "Luke");
    assert!(luke.is_jedi);

    let characters = CharacterRepo::list(&pool).await.unwrap();
    assert_eq!(characters, vec![luke]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_favs(pool: PgPool) {
    let fav = FavRepo::create(
        &pool,
        &CreateFav {
            post_owner: "han".to_string(),
            caption: "Never tell me the odds".to_string(),
            timestamp: 1_234_567,
        },
    )
    .await
    .unwrap();
    assert_eq!(fav.timestamp, 1_234_567);

    assert_eq!(FavRepo::list(&pool).await.unwrap(), vec![fav.clone()]);
    assert_eq!(FavRepo::find_by_id(&pool, fav.id).await.unwrap(), Some(fav));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    assert!(PlanetRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(CharacterRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(WeaponRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(UserRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Weapons and owners
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_weapon_with_and_without_owner(pool: PgPool) {
    let obi = CharacterRepo::create(&pool, &new_character("Obi-Wan", "Kenobi", true))
        .await
        .unwrap();

    let owned = WeaponRepo::create(&pool, &new_weapon("Blue saber", Some(obi.id)))
        .await
        .unwrap();
    let loose = WeaponRepo::create(&pool, &new_weapon("Spare saber", None))
        .await
        .unwrap();

    assert_eq!(owned.weapon_owner_id, Some(obi.id));
    assert_eq!(owned.weapon_type, "lightsaber");
    assert_eq!(loose.weapon_owner_id, None);

    let by_owner = WeaponRepo::list_by_owner(&pool, obi.id).await.unwrap();
    assert_eq!(by_owner, vec![owned]);
    assert_eq!(WeaponRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_weapon_with_missing_owner_violates_fk(pool: PgPool) {
    let existing = WeaponRepo::create(&pool, &new_weapon("Blaster", None))
        .await
        .unwrap();

    let result = WeaponRepo::create(&pool, &new_weapon("Ghost saber", Some(424_242))).await;
    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected foreign key violation, got {other:?}"),
    }

    // The failed insert leaves existing rows untouched.
    assert_eq!(WeaponRepo::list(&pool).await.unwrap(), vec![existing]);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_user_email_fails(pool: PgPool) {
    UserRepo::create(&pool, &new_user("leia@alderaan.gov"))
        .await
        .unwrap();

    let result = UserRepo::create(&pool, &new_user("leia@alderaan.gov")).await;
    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_response_drops_password(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("leia@alderaan.gov"))
        .await
        .unwrap();
    let found = UserRepo::find_by_email(&pool, "leia@alderaan.gov")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, user.id);

    let json = serde_json::to_value(UserResponse::from(found)).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "leia@alderaan.gov");
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_favorite_links_are_idempotent(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("luke@rebellion.org"))
        .await
        .unwrap();
    let tatooine = PlanetRepo::create(&pool, &new_planet("Tatooine"))
        .await
        .unwrap();
    let yoda = CharacterRepo::create(&pool, &new_character("Yoda", "", true))
        .await
        .unwrap();

    assert!(FavoriteRepo::add_planet(&pool, user.id, tatooine.id).await.unwrap());
    assert!(!FavoriteRepo::add_planet(&pool, user.id, tatooine.id).await.unwrap());
    assert!(FavoriteRepo::add_character(&pool, user.id, yoda.id).await.unwrap());
    assert!(!FavoriteRepo::add_character(&pool, user.id, yoda.id).await.unwrap());

    assert_eq!(
        FavoriteRepo::planets_for_user(&pool, user.id).await.unwrap(),
        vec![tatooine]
    );
    assert_eq!(
        FavoriteRepo::characters_for_user(&pool, user.id).await.unwrap(),
        vec![yoda]
    );
    assert_eq!(FavoriteRepo::count_planet_links(&pool).await.unwrap(), 1);
    assert_eq!(FavoriteRepo::count_character_links(&pool).await.unwrap(), 1);
    assert_eq!(FavoriteRepo::list_planet_links(&pool).await.unwrap().len(), 1);
    assert_eq!(FavoriteRepo::list_character_links(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_favorite_link_requires_existing_rows(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("han@falcon.net"))
        .await
        .unwrap();

    let result = FavoriteRepo::add_planet(&pool, user.id, 999_999).await;
    assert!(result.is_err(), "Link to a missing planet should fail");

    let result = FavoriteRepo::add_character(&pool, 999_999, 1).await;
    assert!(result.is_err(), "Link from a missing user should fail");
}
