#[cfg(feature = "sqlite")]
use credo_auth_migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::config::auth::{Argon2Config, AuthConfig};
use crate::entities::v1::users;
use crate::helpers::now;
use crate::security::password::PasswordHasher;

/// Credentials inserted by the initial seeder migration.
pub const SEEDED_EMAIL: &str = "user1@mail.com";
pub const SEEDED_PASSWORD: &str = "qweqwe";

/// Returns an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh connection, so every test owns and tears down
/// its own isolated data. The seeder migration leaves [`SEEDED_EMAIL`] in
/// place.
///
/// # Panics
/// Panics if the connection or a migration fails. Intentional for test
/// setup: tests should fail fast if setup is broken.
#[cfg(feature = "sqlite")]
pub async fn database() -> DatabaseConnection {
    let db = crate::database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    credo_auth_migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// AuthConfig with reduced Argon2 cost for tests
///
/// Production parameters make every hash take hundreds of milliseconds;
/// these keep the same algorithm and hash/salt sizes while running ~50-100x
/// faster.
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        token_expiration: 3600,
        argon2: Argon2Config {
            memory_cost: 19456, // 19 MB (reduced from 64 MB)
            time_cost: 1,       // 1 iteration (reduced from 3)
            parallelism: 1,     // 1 thread (reduced from 4)
            hash_length: 32,    // same as production
            salt_length: 16,    // same as production
        },
    }
}

/// Returns a PasswordHasher configured with the fast test parameters
pub fn password_hasher() -> Result<PasswordHasher, argon2::password_hash::Error> {
    PasswordHasher::from_config(&auth_config())
}

/// Insert a user with a random unique email and the password `"password"`
pub async fn create_test_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
) -> Result<users::Model, DbErr> {
    use rand::Rng;

    let random_suffix: u32 = rand::thread_rng().r#gen();
    let email = format!("test_{}@example.com", random_suffix);

    let password_hash = hasher.hash("password").expect("Failed to hash password");

    let user = users::ActiveModel {
        email: Set(email),
        password: Set(password_hash),
        created_at: Set(now()),
        updated_at: Set(now()),
        ..Default::default()
    };

    user.insert(db).await
}
